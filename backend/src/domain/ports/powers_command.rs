//! Driving port for partial power updates.

use async_trait::async_trait;

use crate::domain::{Error, Power, PowerId};

/// Partial update of a power.
///
/// `description` is `None` when the client omitted the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePowerRequest {
    pub power_id: PowerId,
    pub description: Option<String>,
}

/// Domain use-case port for mutating powers.
#[async_trait]
pub trait PowersCommand: Send + Sync {
    /// Apply the update and return the stored power.
    ///
    /// Fails with `not_found` when the power does not exist and with
    /// `invalid_request` when the description is missing or invalid.
    async fn update_power(&self, request: UpdatePowerRequest) -> Result<Power, Error>;
}
