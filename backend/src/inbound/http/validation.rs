//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies arrive as raw JSON so type mismatches can be reported per
//! field instead of as a generic deserialisation failure. Presence and range
//! rules stay in the domain.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidType,
    InvalidStrength,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::InvalidStrength => "invalid_strength",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_field_error(field: FieldName, code: ErrorCode) -> Error {
    Error::invalid_request("Invalid request").with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn invalid_body_error(reason: impl Into<String>) -> Error {
    Error::invalid_request("Invalid request").with_details(json!({
        "code": ErrorCode::InvalidBody.as_str(),
        "reason": reason.into(),
    }))
}

/// Require the body to be a JSON object.
pub(crate) fn body_object(body: &Value) -> Result<&Map<String, Value>, Error> {
    body.as_object()
        .ok_or_else(|| invalid_body_error("request body must be a JSON object"))
}

/// Read an optional JSON integer. Absent and `null` are both `None`; any
/// other non-integer value fails with `mismatch`.
pub(crate) fn optional_integer(
    body: &Map<String, Value>,
    field: FieldName,
    mismatch: ErrorCode,
) -> Result<Option<i64>, Error> {
    match body.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| invalid_field_error(field, mismatch)),
    }
}

/// Read an optional JSON string. Absent and `null` are both `None`.
pub(crate) fn optional_string(
    body: &Map<String, Value>,
    field: FieldName,
) -> Result<Option<String>, Error> {
    match body.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid_field_error(field, ErrorCode::InvalidType)),
    }
}

/// Render malformed or mistyped JSON payloads as `invalid_request`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting unreadable JSON body");
    invalid_body_error(err.to_string()).into()
}

/// Render unparsable path segments as `not_found`, so `/heroes/abc` behaves
/// like an unknown route.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejecting non-integer path id");
    Error::not_found("Not found").into()
}

/// Extractor configuration shared by every catalogue route.
pub fn extractor_config() -> (web::JsonConfig, web::PathConfig) {
    (
        web::JsonConfig::default().error_handler(json_error_handler),
        web::PathConfig::default().error_handler(path_error_handler),
    )
}
