//! PostgreSQL-backed catalogue seeding adapter.
//!
//! Heroes, powers and their links are inserted in one transaction, and only
//! when the `heroes` table is empty.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::SeedCatalogue;
use crate::domain::ports::{
    CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedingResult,
};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewHeroPowerRow, NewHeroRow, NewPowerRow};
use super::pool::{DbPool, PoolError};
use super::schema::{hero_powers, heroes, powers};

/// Diesel implementation of the catalogue seeding port.
#[derive(Clone)]
pub struct DieselCatalogueSeedRepository {
    pool: DbPool,
}

impl DieselCatalogueSeedRepository {
    /// Create a seeding repository over the given pool.
    ///
    /// ```rust,no_run
    /// use superheroes::outbound::persistence::{
    ///     DbPool, DieselCatalogueSeedRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/superheroes")).await?;
    /// let repository = DieselCatalogueSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CatalogueSeedRepositoryError {
    map_basic_pool_error(error, CatalogueSeedRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> CatalogueSeedRepositoryError {
    map_basic_diesel_error(
        error,
        CatalogueSeedRepositoryError::query,
        CatalogueSeedRepositoryError::connection,
    )
}

/// Resolve seed link indices against the ids returned by the inserts.
fn link_rows(catalogue: &SeedCatalogue, hero_ids: &[i32], power_ids: &[i32]) -> Vec<NewHeroPowerRow> {
    catalogue
        .hero_powers
        .iter()
        .filter_map(|link| {
            Some(NewHeroPowerRow {
                hero_id: *hero_ids.get(link.hero_index)?,
                power_id: *power_ids.get(link.power_index)?,
                strength: link.strength.to_string(),
            })
        })
        .collect()
}

#[async_trait]
impl CatalogueSeedRepository for DieselCatalogueSeedRepository {
    async fn seed(
        &self,
        catalogue: &SeedCatalogue,
    ) -> Result<SeedingResult, CatalogueSeedRepositoryError> {
        let hero_rows: Vec<NewHeroRow<'_>> = catalogue
            .heroes
            .iter()
            .map(|hero| NewHeroRow {
                name: hero.name,
                super_name: hero.super_name,
            })
            .collect();
        let power_rows: Vec<NewPowerRow<'_>> = catalogue
            .powers
            .iter()
            .map(|power| NewPowerRow {
                name: power.name,
                description: power.description,
            })
            .collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction(|conn| {
            async move {
                let existing: Option<i32> = heroes::table
                    .select(heroes::id)
                    .first(conn)
                    .await
                    .optional()?;
                if existing.is_some() {
                    return Ok(SeedingResult::AlreadySeeded);
                }

                let hero_ids: Vec<i32> = diesel::insert_into(heroes::table)
                    .values(&hero_rows)
                    .returning(heroes::id)
                    .get_results(conn)
                    .await?;
                let power_ids: Vec<i32> = diesel::insert_into(powers::table)
                    .values(&power_rows)
                    .returning(powers::id)
                    .get_results(conn)
                    .await?;

                let links = link_rows(catalogue, &hero_ids, &power_ids);
                if !links.is_empty() {
                    diesel::insert_into(hero_powers::table)
                        .values(&links)
                        .execute(conn)
                        .await?;
                }

                Ok(SeedingResult::Applied)
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn links_resolve_against_inserted_ids() {
        let catalogue = SeedCatalogue::standard();
        let rows = link_rows(&catalogue, &[10, 11, 12, 13], &[20, 21, 22, 23]);

        assert_eq!(rows.len(), 4);
        let first = rows.as_slice().first().expect("first link");
        assert_eq!(first.hero_id, 10);
        assert_eq!(first.power_id, 23);
        assert_eq!(first.strength, "7");
    }

    #[rstest]
    fn links_with_unknown_indices_are_skipped() {
        let catalogue = SeedCatalogue::standard();
        let rows = link_rows(&catalogue, &[10], &[20, 21, 22, 23]);
        assert_eq!(rows.len(), 1);
    }
}
