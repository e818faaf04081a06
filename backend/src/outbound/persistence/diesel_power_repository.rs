//! PostgreSQL-backed `PowerRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PowerRepository, PowerRepositoryError};
use crate::domain::{Power, PowerId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::PowerRow;
use super::pool::{DbPool, PoolError};
use super::schema::powers;

/// Diesel implementation of the power repository port.
#[derive(Clone)]
pub struct DieselPowerRepository {
    pool: DbPool,
}

impl DieselPowerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PowerRepositoryError {
    map_basic_pool_error(error, PowerRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PowerRepositoryError {
    map_basic_diesel_error(
        error,
        PowerRepositoryError::query,
        PowerRepositoryError::connection,
    )
}

#[async_trait]
impl PowerRepository for DieselPowerRepository {
    async fn list_powers(&self) -> Result<Vec<Power>, PowerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PowerRow> = powers::table
            .select(PowerRow::as_select())
            .order(powers::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Power::from).collect())
    }

    async fn find_power(&self, id: PowerId) -> Result<Option<Power>, PowerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PowerRow> = powers::table
            .find(id.get())
            .select(PowerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Power::from))
    }

    async fn update_description(
        &self,
        id: PowerId,
        description: &str,
    ) -> Result<Option<Power>, PowerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<PowerRow> = diesel::update(powers::table.find(id.get()))
            .set(powers::description.eq(description))
            .returning(PowerRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Power::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[rstest]
    fn closed_connections_map_to_connection_errors() {
        let error = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("closed".to_owned()),
        ));
        assert!(matches!(error, PowerRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn check_violations_map_to_query_errors() {
        let error = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("value too long".to_owned()),
        ));
        assert!(matches!(error, PowerRepositoryError::Query { .. }));
    }
}
