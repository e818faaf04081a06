//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_seed_repository;
mod hero_power_repository;
mod hero_powers_command;
mod hero_repository;
mod heroes_query;
mod power_repository;
mod powers_command;
mod powers_query;

#[cfg(test)]
pub use catalogue_seed_repository::MockCatalogueSeedRepository;
pub use catalogue_seed_repository::{
    CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedingResult,
};
#[cfg(test)]
pub use hero_power_repository::MockHeroPowerRepository;
pub use hero_power_repository::{HeroPowerRepository, HeroPowerRepositoryError};
pub use hero_powers_command::{CreateHeroPowerRequest, HeroPowersCommand};
#[cfg(test)]
pub use hero_repository::MockHeroRepository;
pub use hero_repository::{HeroRepository, HeroRepositoryError};
pub use heroes_query::HeroesQuery;
#[cfg(test)]
pub use power_repository::MockPowerRepository;
pub use power_repository::{PowerRepository, PowerRepositoryError};
pub use powers_command::{PowersCommand, UpdatePowerRequest};
pub use powers_query::PowersQuery;
