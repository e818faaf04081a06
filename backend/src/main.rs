//! Backend entry-point: loads settings, prepares the store, and serves the
//! catalogue API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use superheroes::domain::Error as DomainError;
use superheroes::inbound::http::health::HealthState;
use superheroes::outbound::persistence::{
    DbPool, MigrationError, PoolConfig, PoolError, run_pending_migrations,
};
use superheroes::settings::AppSettings;

use server::{ServerConfig, create_server, seed_catalogue};

/// Failures that stop the process before the server starts.
#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load settings: {0}")]
    Settings(String),
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("catalogue seeding failed: {0}")]
    Seed(#[from] DomainError),
}

impl From<StartupError> for std::io::Error {
    fn from(error: StartupError) -> Self {
        std::io::Error::other(error.to_string())
    }
}

async fn build_server_config(settings: &AppSettings) -> Result<ServerConfig, StartupError> {
    let config = ServerConfig::new(settings.host(), settings.port());
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; using the in-memory store");
        return Ok(config);
    };

    if settings.run_migrations {
        run_pending_migrations(database_url).await?;
    }
    let pool =
        DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size())).await?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| StartupError::Settings(e.to_string()))?;
    let config = build_server_config(&settings).await?;

    if settings.seed_on_startup {
        let result = seed_catalogue(config.store())
            .await
            .map_err(StartupError::from)?;
        info!(?result, "startup seeding finished");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
