//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain types and nothing
//! more. Row structs and the schema stay private to this module; connections
//! come from a `bb8` pool of `diesel-async` connections.
//!
//! ```rust,no_run
//! use superheroes::outbound::persistence::{DbPool, DieselHeroRepository, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/superheroes")).await?;
//! let heroes = DieselHeroRepository::new(pool);
//! # let _ = heroes;
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_catalogue_seed_repository;
mod diesel_hero_power_repository;
mod diesel_hero_repository;
mod diesel_power_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_seed_repository::DieselCatalogueSeedRepository;
pub use diesel_hero_power_repository::DieselHeroPowerRepository;
pub use diesel_hero_repository::DieselHeroRepository;
pub use diesel_power_repository::DieselPowerRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
