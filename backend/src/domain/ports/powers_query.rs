//! Driving port for power read models.

use async_trait::async_trait;

use crate::domain::{Error, Power, PowerId};

/// Domain use-case port for reading powers.
#[async_trait]
pub trait PowersQuery: Send + Sync {
    /// Return every power ordered by identifier.
    async fn list_powers(&self) -> Result<Vec<Power>, Error>;

    /// Return a single power, or `not_found`.
    async fn get_power(&self, id: PowerId) -> Result<Power, Error>;
}
