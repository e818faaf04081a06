//! Port abstraction for power persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Power, PowerId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by power repository adapters.
    pub enum PowerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "power repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "power repository query failed: {message}",
    }
}

/// Read and description-update access to powers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// Return every power ordered by identifier.
    async fn list_powers(&self) -> Result<Vec<Power>, PowerRepositoryError>;

    /// Fetch a power by identifier.
    async fn find_power(&self, id: PowerId) -> Result<Option<Power>, PowerRepositoryError>;

    /// Replace a power's description, returning the updated row.
    ///
    /// Returns `Ok(None)` when no power has the given identifier.
    async fn update_description(
        &self,
        id: PowerId,
        description: &str,
    ) -> Result<Option<Power>, PowerRepositoryError>;
}
