//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::{HeroPowersRepositories, SeedCatalogue};
use crate::inbound::http::configure_catalogue;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCatalogue;

/// Store pre-loaded with the standard catalogue.
pub fn seeded_store() -> InMemoryCatalogue {
    InMemoryCatalogue::seeded(&SeedCatalogue::standard())
}

/// Build handler state over the given store.
pub fn state_for(store: &InMemoryCatalogue) -> HttpState {
    let store = Arc::new(store.clone());
    HttpState::from_repositories(HeroPowersRepositories {
        heroes: store.clone(),
        powers: store.clone(),
        hero_powers: store,
    })
}

/// Catalogue app over the given store, wrapped in the trace middleware.
pub fn test_app(
    store: &InMemoryCatalogue,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    App::new()
        .app_data(web::Data::new(state_for(store)))
        .wrap(Trace)
        .configure(configure_catalogue)
}
