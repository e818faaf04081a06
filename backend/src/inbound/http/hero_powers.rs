//! Hero-power association endpoint.
//!
//! ```text
//! POST /hero_powers
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::HeroPower;
use crate::domain::ports::CreateHeroPowerRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::custom_header::{HERO_POWER_CREATED, custom_header};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{ErrorCode, FieldName, body_object, optional_integer};

/// Request payload linking a hero to a power.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateHeroPowerRequestBody {
    #[schema(example = 1)]
    pub hero_id: i64,
    #[schema(example = 2)]
    pub power_id: i64,
    /// Non-zero integer.
    #[schema(example = 8)]
    pub strength: i64,
}

/// Stored association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroPowerBody {
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: i64,
}

impl From<HeroPower> for HeroPowerBody {
    fn from(value: HeroPower) -> Self {
        Self {
            hero_id: value.hero_id.get(),
            power_id: value.power_id.get(),
            strength: value.strength.get(),
        }
    }
}

fn parse_create_request(body: &Value) -> ApiResult<CreateHeroPowerRequest> {
    let fields = body_object(body)?;
    Ok(CreateHeroPowerRequest {
        hero_id: optional_integer(fields, FieldName::new("hero_id"), ErrorCode::InvalidType)?,
        power_id: optional_integer(fields, FieldName::new("power_id"), ErrorCode::InvalidType)?,
        strength: optional_integer(
            fields,
            FieldName::new("strength"),
            ErrorCode::InvalidStrength,
        )?,
    })
}

/// Link a hero to a power.
#[utoipa::path(
    post,
    path = "/hero_powers",
    tags = ["hero_powers"],
    request_body = CreateHeroPowerRequestBody,
    responses(
        (status = 201, description = "Association created", body = HeroPowerBody,
            headers(("Custom-Header" = String, description = "`Created Custom Value`"))),
        (status = 400, description = "Invalid fields or power description", body = ErrorSchema),
        (status = 404, description = "Hero or power not found", body = ErrorSchema)
    )
)]
#[post("/hero_powers")]
pub async fn create_hero_power(
    state: web::Data<HttpState>,
    body: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let request = parse_create_request(&body)?;
    let created = state.hero_powers.create_hero_power(request).await?;
    Ok(HttpResponse::Created()
        .insert_header(custom_header(HERO_POWER_CREATED))
        .json(HeroPowerBody::from(created)))
}

#[cfg(test)]
#[path = "hero_powers_tests.rs"]
mod tests;
