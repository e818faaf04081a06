//! Power services implementing the query and command driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    PowerRepository, PowerRepositoryError, PowersCommand, PowersQuery, UpdatePowerRequest,
};
use crate::domain::{Error, Power, PowerId, ValidationError, validate_description};

pub(crate) fn map_power_repository_error(error: PowerRepositoryError) -> Error {
    match error {
        PowerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("power repository unavailable: {message}"))
        }
        PowerRepositoryError::Query { message } => {
            Error::internal(format!("power repository error: {message}"))
        }
    }
}

fn power_not_found() -> Error {
    Error::not_found("Power not found")
}

fn invalid_description(error: &ValidationError) -> Error {
    Error::invalid_request("Invalid request").with_details(json!({
        "field": "description",
        "reason": error.to_string(),
    }))
}

/// Power service over a [`PowerRepository`].
#[derive(Clone)]
pub struct PowersService<R> {
    power_repo: Arc<R>,
}

impl<R> PowersService<R> {
    /// Create a new service with the power repository.
    pub fn new(power_repo: Arc<R>) -> Self {
        Self { power_repo }
    }
}

#[async_trait]
impl<R> PowersQuery for PowersService<R>
where
    R: PowerRepository,
{
    async fn list_powers(&self) -> Result<Vec<Power>, Error> {
        self.power_repo
            .list_powers()
            .await
            .map_err(map_power_repository_error)
    }

    async fn get_power(&self, id: PowerId) -> Result<Power, Error> {
        self.power_repo
            .find_power(id)
            .await
            .map_err(map_power_repository_error)?
            .ok_or_else(power_not_found)
    }
}

#[async_trait]
impl<R> PowersCommand for PowersService<R>
where
    R: PowerRepository,
{
    async fn update_power(&self, request: UpdatePowerRequest) -> Result<Power, Error> {
        let UpdatePowerRequest {
            power_id,
            description,
        } = request;

        // Existence is checked before the body so unknown ids always yield 404.
        self.get_power(power_id).await?;

        let Some(description) = description else {
            return Err(Error::invalid_request("Invalid request").with_details(json!({
                "field": "description",
                "code": "missing_field",
            })));
        };
        validate_description(&description).map_err(|error| invalid_description(&error))?;

        debug!(power_id = %power_id, "updating power description");
        self.power_repo
            .update_description(power_id, &description)
            .await
            .map_err(map_power_repository_error)?
            .ok_or_else(power_not_found)
    }
}

#[cfg(test)]
#[path = "powers_service_tests.rs"]
mod tests;
