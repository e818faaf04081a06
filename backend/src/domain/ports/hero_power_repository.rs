//! Port abstraction for hero-power association writes.

use async_trait::async_trait;

use crate::domain::{HeroPower, NewHeroPower};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by hero-power repository adapters.
    pub enum HeroPowerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "hero power repository connection failed: {message}",
        /// The referenced hero or power vanished before the insert landed.
        MissingReference { message: String } =>
            "hero power references a missing row: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "hero power repository query failed: {message}",
    }
}

/// Write access to hero-power associations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroPowerRepository: Send + Sync {
    /// Insert an association and return the stored row.
    async fn create(&self, hero_power: &NewHeroPower)
    -> Result<HeroPower, HeroPowerRepositoryError>;
}
