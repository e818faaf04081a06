//! HTTP server configuration object.

use superheroes::outbound::memory::InMemoryCatalogue;
use superheroes::outbound::persistence::DbPool;

/// Store the repositories are built over.
#[derive(Clone)]
pub enum StoreBackend {
    Postgres(DbPool),
    Memory(InMemoryCatalogue),
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) store: StoreBackend,
}

impl ServerConfig {
    /// Bind to `host:port` over an empty in-memory store.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            store: StoreBackend::Memory(InMemoryCatalogue::new()),
        }
    }

    /// Use PostgreSQL repositories backed by the pool.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.store = StoreBackend::Postgres(pool);
        self
    }

    #[must_use]
    pub fn store(&self) -> &StoreBackend {
        &self.store
    }
}
