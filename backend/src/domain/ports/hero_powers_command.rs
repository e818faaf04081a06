//! Driving port for linking heroes to powers.

use async_trait::async_trait;

use crate::domain::{Error, HeroPower};

/// Client request to link a hero to a power.
///
/// Fields are `None` when the client omitted them. Adapters reject values
/// of the wrong JSON type before building the request; presence, range, and
/// strength rules are enforced by the domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateHeroPowerRequest {
    pub hero_id: Option<i64>,
    pub power_id: Option<i64>,
    pub strength: Option<i64>,
}

/// Domain use-case port for creating hero-power associations.
#[async_trait]
pub trait HeroPowersCommand: Send + Sync {
    /// Validate the request, check both ends exist, and store the link.
    async fn create_hero_power(&self, request: CreateHeroPowerRequest) -> Result<HeroPower, Error>;
}
