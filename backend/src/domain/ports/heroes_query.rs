//! Driving port for hero read models.
//!
//! Inbound adapters use this port to fetch heroes without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Hero, HeroDetail, HeroId};

/// Domain use-case port for reading heroes.
#[async_trait]
pub trait HeroesQuery: Send + Sync {
    /// Return every hero ordered by identifier.
    async fn list_heroes(&self) -> Result<Vec<Hero>, Error>;

    /// Return a hero with its powers, or `not_found`.
    async fn get_hero(&self, id: HeroId) -> Result<HeroDetail, Error>;
}
