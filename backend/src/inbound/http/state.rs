//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see driving ports, so they
//! stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    HeroPowerRepository, HeroPowersCommand, HeroRepository, HeroesQuery, PowerRepository,
    PowersCommand, PowersQuery,
};
use crate::domain::{HeroPowersRepositories, HeroPowersService, HeroesService, PowersService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub heroes: Arc<dyn HeroesQuery>,
    pub powers: Arc<dyn PowersQuery>,
    pub powers_command: Arc<dyn PowersCommand>,
    pub hero_powers: Arc<dyn HeroPowersCommand>,
}

impl HttpState {
    /// Wire the domain services over one set of repositories.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use superheroes::domain::HeroPowersRepositories;
    /// use superheroes::inbound::http::state::HttpState;
    /// use superheroes::outbound::memory::InMemoryCatalogue;
    ///
    /// let store = Arc::new(InMemoryCatalogue::new());
    /// let state = HttpState::from_repositories(HeroPowersRepositories {
    ///     heroes: store.clone(),
    ///     powers: store.clone(),
    ///     hero_powers: store,
    /// });
    /// # let _ = state;
    /// ```
    pub fn from_repositories<H, P, A>(repositories: HeroPowersRepositories<H, P, A>) -> Self
    where
        H: HeroRepository + 'static,
        P: PowerRepository + 'static,
        A: HeroPowerRepository + 'static,
    {
        let powers = Arc::new(PowersService::new(repositories.powers.clone()));
        Self {
            heroes: Arc::new(HeroesService::new(repositories.heroes.clone())),
            powers: powers.clone(),
            powers_command: powers,
            hero_powers: Arc::new(HeroPowersService::new(repositories)),
        }
    }
}
