//! `Custom-Header` values attached to power and hero-power responses.

use actix_web::HttpResponse;
use actix_web::http::header::{HeaderName, HeaderValue};

const CUSTOM_HEADER_NAME: &str = "custom-header";

/// `GET /powers/{id}` success.
pub const POWER_FETCHED: &str = "Custom Value";
/// `PATCH /powers/{id}` success.
pub const POWER_UPDATED: &str = "Updated Custom Value";
/// `PATCH /powers/{id}` rejected request body.
pub const POWER_UPDATE_REJECTED: &str = "Error Value";
/// `POST /hero_powers` success.
pub const HERO_POWER_CREATED: &str = "Created Custom Value";

/// Header pair for `HttpResponseBuilder::insert_header`.
pub fn custom_header(value: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(CUSTOM_HEADER_NAME),
        HeaderValue::from_static(value),
    )
}

/// Attach the header to an already-built response.
pub fn attach_custom_header(response: &mut HttpResponse, value: &'static str) {
    let (name, value) = custom_header(value);
    response.headers_mut().insert(name, value);
}
