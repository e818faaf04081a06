//! Port abstraction for hero persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Hero, HeroId, Power};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by hero repository adapters.
    pub enum HeroRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "hero repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "hero repository query failed: {message}",
    }
}

/// Read access to heroes and the powers linked to them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Return every hero ordered by identifier.
    async fn list_heroes(&self) -> Result<Vec<Hero>, HeroRepositoryError>;

    /// Fetch a hero by identifier.
    async fn find_hero(&self, id: HeroId) -> Result<Option<Hero>, HeroRepositoryError>;

    /// Return the distinct powers linked to a hero, ordered by power id.
    async fn list_powers_for_hero(&self, id: HeroId) -> Result<Vec<Power>, HeroRepositoryError>;
}
