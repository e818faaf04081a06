//! HTTP inbound adapter exposing the catalogue REST endpoints.

pub mod custom_header;
pub mod error;
pub mod health;
pub mod hero_powers;
pub mod heroes;
pub mod powers;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register the catalogue routes and their extractor error handlers.
///
/// Health probes and docs are mounted separately by the server.
pub fn configure_catalogue(cfg: &mut web::ServiceConfig) {
    let (json_config, path_config) = validation::extractor_config();
    cfg.app_data(json_config)
        .app_data(path_config)
        .service(heroes::list_heroes)
        .service(heroes::get_hero)
        .service(powers::list_powers)
        .service(powers::get_power)
        .service(powers::update_power)
        .service(hero_powers::create_hero_power);
}
