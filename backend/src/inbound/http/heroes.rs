//! Hero read endpoints.
//!
//! ```text
//! GET /heroes
//! GET /heroes/{id}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Hero, HeroDetail, HeroId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::powers::PowerBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Hero summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroBody {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kamala Khan")]
    pub name: String,
    #[schema(example = "Ms. Marvel")]
    pub super_name: String,
}

impl From<Hero> for HeroBody {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id().get(),
            name: hero.name().to_owned(),
            super_name: hero.super_name().to_owned(),
        }
    }
}

/// Hero with the distinct powers linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroDetailBody {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    pub powers: Vec<PowerBody>,
}

impl From<HeroDetail> for HeroDetailBody {
    fn from(detail: HeroDetail) -> Self {
        let HeroBody {
            id,
            name,
            super_name,
        } = detail.hero.into();
        Self {
            id,
            name,
            super_name,
            powers: detail.powers.into_iter().map(PowerBody::from).collect(),
        }
    }
}

/// List every hero.
#[utoipa::path(
    get,
    path = "/heroes",
    tags = ["heroes"],
    responses(
        (status = 200, description = "All heroes", body = [HeroBody]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[get("/heroes")]
pub async fn list_heroes(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<HeroBody>>> {
    let heroes = state.heroes.list_heroes().await?;
    Ok(web::Json(heroes.into_iter().map(HeroBody::from).collect()))
}

/// Fetch one hero with its powers.
#[utoipa::path(
    get,
    path = "/heroes/{id}",
    tags = ["heroes"],
    params(("id" = i32, Path, description = "Hero identifier")),
    responses(
        (status = 200, description = "Hero with powers", body = HeroDetailBody),
        (status = 404, description = "Hero not found", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    )
)]
#[get("/heroes/{id}")]
pub async fn get_hero(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<HeroDetailBody>> {
    let detail = state.heroes.get_hero(HeroId::new(path.into_inner())).await?;
    Ok(web::Json(detail.into()))
}

#[cfg(test)]
#[path = "heroes_tests.rs"]
mod tests;
