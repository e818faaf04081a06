//! Hero read service implementing the [`HeroesQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{HeroRepository, HeroRepositoryError, HeroesQuery};
use crate::domain::{Error, Hero, HeroDetail, HeroId};

pub(crate) fn map_hero_repository_error(error: HeroRepositoryError) -> Error {
    match error {
        HeroRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("hero repository unavailable: {message}"))
        }
        HeroRepositoryError::Query { message } => {
            Error::internal(format!("hero repository error: {message}"))
        }
    }
}

/// Hero service over a [`HeroRepository`].
#[derive(Clone)]
pub struct HeroesService<R> {
    hero_repo: Arc<R>,
}

impl<R> HeroesService<R> {
    /// Create a new service with the hero repository.
    pub fn new(hero_repo: Arc<R>) -> Self {
        Self { hero_repo }
    }
}

#[async_trait]
impl<R> HeroesQuery for HeroesService<R>
where
    R: HeroRepository,
{
    async fn list_heroes(&self) -> Result<Vec<Hero>, Error> {
        self.hero_repo
            .list_heroes()
            .await
            .map_err(map_hero_repository_error)
    }

    async fn get_hero(&self, id: HeroId) -> Result<HeroDetail, Error> {
        let hero = self
            .hero_repo
            .find_hero(id)
            .await
            .map_err(map_hero_repository_error)?
            .ok_or_else(|| Error::not_found("Hero not found"))?;

        let powers = self
            .hero_repo
            .list_powers_for_hero(id)
            .await
            .map_err(map_hero_repository_error)?;

        Ok(HeroDetail { hero, powers })
    }
}
