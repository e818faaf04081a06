//! Domain primitives, ports, and services.
//!
//! Purpose: define the hero/power catalogue entities, the two scalar
//! validators, and the use-case services the HTTP adapter drives. Nothing in
//! this module depends on actix or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Hero, Power, HeroPower and their identifiers.
//! - validate_strength / validate_description.
//! - HeroesService, PowersService, HeroPowersService: driving-port
//!   implementations over the repository ports in [`ports`].

pub mod error;
pub mod hero;
pub mod hero_power;
pub mod hero_powers_service;
pub mod heroes_service;
pub mod power;
pub mod ports;
pub mod powers_service;
pub mod seed;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::hero::{Hero, HeroDetail, HeroId};
pub use self::hero_power::{HeroPower, NewHeroPower, Strength};
pub use self::hero_powers_service::{HeroPowersRepositories, HeroPowersService};
pub use self::heroes_service::HeroesService;
pub use self::power::{Power, PowerId};
pub use self::powers_service::PowersService;
pub use self::seed::{CatalogueSeeder, SeedCatalogue, SeedHero, SeedHeroPower, SeedPower};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    DESCRIPTION_MAX_CHARS, ValidationError, validate_description, validate_strength,
};
