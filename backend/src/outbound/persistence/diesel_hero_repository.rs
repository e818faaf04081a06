//! PostgreSQL-backed `HeroRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HeroRepository, HeroRepositoryError};
use crate::domain::{Hero, HeroId, Power};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{HeroRow, PowerRow};
use super::pool::{DbPool, PoolError};
use super::schema::{hero_powers, heroes, powers};

/// Diesel implementation of the hero repository port.
#[derive(Clone)]
pub struct DieselHeroRepository {
    pool: DbPool,
}

impl DieselHeroRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HeroRepositoryError {
    map_basic_pool_error(error, HeroRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HeroRepositoryError {
    map_basic_diesel_error(
        error,
        HeroRepositoryError::query,
        HeroRepositoryError::connection,
    )
}

#[async_trait]
impl HeroRepository for DieselHeroRepository {
    async fn list_heroes(&self) -> Result<Vec<Hero>, HeroRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HeroRow> = heroes::table
            .select(HeroRow::as_select())
            .order(heroes::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Hero::from).collect())
    }

    async fn find_hero(&self, id: HeroId) -> Result<Option<Hero>, HeroRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<HeroRow> = heroes::table
            .find(id.get())
            .select(HeroRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Hero::from))
    }

    async fn list_powers_for_hero(&self, id: HeroId) -> Result<Vec<Power>, HeroRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<PowerRow> = powers::table
            .inner_join(hero_powers::table)
            .filter(hero_powers::hero_id.eq(id.get()))
            .select(PowerRow::as_select())
            .distinct()
            .order(powers::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Power::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_failures_map_to_connection_errors() {
        let error = map_pool_error(PoolError::checkout("timed out"));
        assert!(matches!(error, HeroRepositoryError::Connection { message } if message == "timed out"));
    }

    #[rstest]
    fn missing_rows_map_to_query_errors() {
        let error = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(error, HeroRepositoryError::Query { .. }));
    }
}
