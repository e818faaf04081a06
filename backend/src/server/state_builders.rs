//! Builders wiring repositories into HTTP state and the startup seeder.

use std::sync::Arc;

use superheroes::domain::ports::SeedingResult;
use superheroes::domain::{CatalogueSeeder, Error, HeroPowersRepositories, SeedCatalogue};
use superheroes::inbound::http::state::HttpState;
use superheroes::outbound::persistence::{
    DieselCatalogueSeedRepository, DieselHeroPowerRepository, DieselHeroRepository,
    DieselPowerRepository,
};

use super::config::StoreBackend;

/// Build handler state over the configured store.
pub fn build_http_state(store: &StoreBackend) -> HttpState {
    match store {
        StoreBackend::Postgres(pool) => HttpState::from_repositories(HeroPowersRepositories {
            heroes: Arc::new(DieselHeroRepository::new(pool.clone())),
            powers: Arc::new(DieselPowerRepository::new(pool.clone())),
            hero_powers: Arc::new(DieselHeroPowerRepository::new(pool.clone())),
        }),
        StoreBackend::Memory(store) => {
            let store = Arc::new(store.clone());
            HttpState::from_repositories(HeroPowersRepositories {
                heroes: store.clone(),
                powers: store.clone(),
                hero_powers: store,
            })
        }
    }
}

/// Load the starter catalogue into the configured store.
///
/// # Errors
/// Returns the mapped repository failure.
pub async fn seed_catalogue(store: &StoreBackend) -> Result<SeedingResult, Error> {
    let catalogue = SeedCatalogue::standard();
    match store {
        StoreBackend::Postgres(pool) => {
            CatalogueSeeder::new(Arc::new(DieselCatalogueSeedRepository::new(pool.clone())))
                .seed(&catalogue)
                .await
        }
        StoreBackend::Memory(store) => {
            CatalogueSeeder::new(Arc::new(store.clone()))
                .seed(&catalogue)
                .await
        }
    }
}
