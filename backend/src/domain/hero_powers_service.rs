//! Hero-power service implementing the [`HeroPowersCommand`] driving port.
//!
//! Creation runs in four steps: validate the request fields, resolve both
//! referenced rows, validate the power's stored description, then insert.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::heroes_service::map_hero_repository_error;
use crate::domain::ports::{
    CreateHeroPowerRequest, HeroPowerRepository, HeroPowerRepositoryError, HeroPowersCommand,
    HeroRepository, PowerRepository,
};
use crate::domain::powers_service::map_power_repository_error;
use crate::domain::{
    Error, HeroId, HeroPower, NewHeroPower, PowerId, validate_description, validate_strength,
};

fn invalid_request(field: &'static str, code: &'static str) -> Error {
    Error::invalid_request("Invalid request").with_details(json!({
        "field": field,
        "code": code,
    }))
}

fn not_found() -> Error {
    Error::not_found("Hero or Power not found")
}

/// Accept an identifier when it is present, non-zero, and fits the store's
/// integer column.
fn parse_id(raw: Option<i64>, field: &'static str) -> Result<i32, Error> {
    match raw {
        None | Some(0) => Err(invalid_request(field, "missing_field")),
        Some(value) => i32::try_from(value).map_err(|_| invalid_request(field, "out_of_range")),
    }
}

fn map_hero_power_repository_error(error: HeroPowerRepositoryError) -> Error {
    match error {
        HeroPowerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("hero power repository unavailable: {message}"))
        }
        HeroPowerRepositoryError::MissingReference { message } => {
            warn!(%message, "hero or power removed before association insert");
            not_found()
        }
        HeroPowerRepositoryError::Query { message } => {
            Error::internal(format!("hero power repository error: {message}"))
        }
    }
}

/// Repositories consumed by [`HeroPowersService`].
#[derive(Clone)]
pub struct HeroPowersRepositories<H, P, A> {
    pub heroes: Arc<H>,
    pub powers: Arc<P>,
    pub hero_powers: Arc<A>,
}

/// Hero-power creation service.
#[derive(Clone)]
pub struct HeroPowersService<H, P, A> {
    hero_repo: Arc<H>,
    power_repo: Arc<P>,
    hero_power_repo: Arc<A>,
}

impl<H, P, A> HeroPowersService<H, P, A> {
    /// Create a new service over the three repositories.
    pub fn new(repositories: HeroPowersRepositories<H, P, A>) -> Self {
        let HeroPowersRepositories {
            heroes,
            powers,
            hero_powers,
        } = repositories;
        Self {
            hero_repo: heroes,
            power_repo: powers,
            hero_power_repo: hero_powers,
        }
    }
}

#[async_trait]
impl<H, P, A> HeroPowersCommand for HeroPowersService<H, P, A>
where
    H: HeroRepository,
    P: PowerRepository,
    A: HeroPowerRepository,
{
    async fn create_hero_power(&self, request: CreateHeroPowerRequest) -> Result<HeroPower, Error> {
        let hero_id = HeroId::new(parse_id(request.hero_id, "hero_id")?);
        let power_id = PowerId::new(parse_id(request.power_id, "power_id")?);
        let strength = validate_strength(request.strength)
            .map_err(|_| invalid_request("strength", "invalid_strength"))?;

        let hero = self
            .hero_repo
            .find_hero(hero_id)
            .await
            .map_err(map_hero_repository_error)?;
        let power = self
            .power_repo
            .find_power(power_id)
            .await
            .map_err(map_power_repository_error)?;
        let (Some(_hero), Some(power)) = (hero, power) else {
            return Err(not_found());
        };

        if let Err(error) = validate_description(power.description()) {
            debug!(power_id = %power_id, %error, "stored power description failed validation");
            return Err(
                Error::invalid_request("Invalid request: Description validation failed")
                    .with_details(json!({
                        "field": "description",
                        "reason": error.to_string(),
                    })),
            );
        }

        self.hero_power_repo
            .create(&NewHeroPower {
                hero_id,
                power_id,
                strength,
            })
            .await
            .map_err(map_hero_power_repository_error)
    }
}

#[cfg(test)]
#[path = "hero_powers_service_tests.rs"]
mod tests;
