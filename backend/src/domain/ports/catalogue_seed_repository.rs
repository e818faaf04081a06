//! Port for loading the starter catalogue of heroes and powers.

use async_trait::async_trait;

use crate::domain::SeedCatalogue;

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue seeding adapters.
    pub enum CatalogueSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "catalogue seed connection failed: {message}",
        /// Insert failed; the store is left untouched.
        Query { message: String } => "catalogue seed query failed: {message}",
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The catalogue was written.
    Applied,
    /// Heroes already existed, nothing was written.
    AlreadySeeded,
}

/// Port writing a [`SeedCatalogue`] into an empty store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueSeedRepository: Send + Sync {
    /// Insert the catalogue atomically unless any hero already exists.
    async fn seed(
        &self,
        catalogue: &SeedCatalogue,
    ) -> Result<SeedingResult, CatalogueSeedRepositoryError>;
}
