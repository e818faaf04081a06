//! Power endpoints.
//!
//! ```text
//! GET   /powers
//! GET   /powers/{id}
//! PATCH /powers/{id}
//! ```
//!
//! Single-power responses carry `Custom-Header`; a rejected PATCH body gets
//! `Error Value` alongside the usual error payload.

use actix_web::{HttpResponse, ResponseError, get, patch, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::UpdatePowerRequest;
use crate::domain::{Error, ErrorCode, Power, PowerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::custom_header::{
    POWER_FETCHED, POWER_UPDATE_REJECTED, POWER_UPDATED, attach_custom_header, custom_header,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, body_object, optional_string};

/// Power representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PowerBody {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "flight")]
    pub name: String,
    #[schema(example = "gives the wielder the ability to fly through the skies at supersonic speed")]
    pub description: String,
}

impl From<Power> for PowerBody {
    fn from(power: Power) -> Self {
        Self {
            id: power.id().get(),
            name: power.name().to_owned(),
            description: power.description().to_owned(),
        }
    }
}

/// Partial update payload. Only `description` is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatePowerRequestBody {
    #[schema(max_length = 255, min_length = 1)]
    pub description: String,
}

/// List every power.
#[utoipa::path(
    get,
    path = "/powers",
    tags = ["powers"],
    responses(
        (status = 200, description = "All powers", body = [PowerBody]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[get("/powers")]
pub async fn list_powers(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PowerBody>>> {
    let powers = state.powers.list_powers().await?;
    Ok(web::Json(powers.into_iter().map(PowerBody::from).collect()))
}

/// Fetch one power.
#[utoipa::path(
    get,
    path = "/powers/{id}",
    tags = ["powers"],
    params(("id" = i32, Path, description = "Power identifier")),
    responses(
        (status = 200, description = "Power", body = PowerBody,
            headers(("Custom-Header" = String, description = "Always `Custom Value`"))),
        (status = 404, description = "Power not found", body = ErrorSchema)
    )
)]
#[get("/powers/{id}")]
pub async fn get_power(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let power = state.powers.get_power(PowerId::new(path.into_inner())).await?;
    Ok(HttpResponse::Ok()
        .insert_header(custom_header(POWER_FETCHED))
        .json(PowerBody::from(power)))
}

async fn apply_update(state: &HttpState, power_id: PowerId, body: &Value) -> Result<Power, Error> {
    let description = match body_object(body)
        .and_then(|fields| optional_string(fields, FieldName::new("description")))
    {
        Ok(description) => description,
        Err(error) => {
            // Unknown ids answer 404 whatever the body looks like.
            state.powers.get_power(power_id).await?;
            return Err(error);
        }
    };
    state
        .powers_command
        .update_power(UpdatePowerRequest {
            power_id,
            description,
        })
        .await
}

/// Replace a power's description.
#[utoipa::path(
    patch,
    path = "/powers/{id}",
    tags = ["powers"],
    params(("id" = i32, Path, description = "Power identifier")),
    request_body = UpdatePowerRequestBody,
    responses(
        (status = 200, description = "Updated power", body = PowerBody,
            headers(("Custom-Header" = String, description = "`Updated Custom Value`"))),
        (status = 400, description = "Missing or invalid description", body = ErrorSchema,
            headers(("Custom-Header" = String, description = "`Error Value`"))),
        (status = 404, description = "Power not found", body = ErrorSchema)
    )
)]
#[patch("/powers/{id}")]
pub async fn update_power(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let power_id = PowerId::new(path.into_inner());
    match apply_update(&state, power_id, &body).await {
        Ok(power) => Ok(HttpResponse::Ok()
            .insert_header(custom_header(POWER_UPDATED))
            .json(PowerBody::from(power))),
        Err(error) if error.code() == ErrorCode::InvalidRequest => {
            let mut response = error.error_response();
            attach_custom_header(&mut response, POWER_UPDATE_REJECTED);
            Ok(response)
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
#[path = "powers_tests.rs"]
mod tests;
