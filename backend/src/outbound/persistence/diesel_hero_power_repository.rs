//! PostgreSQL-backed `HeroPowerRepository`.
//!
//! Strength is written as text and parsed back from the `RETURNING` row, so a
//! value the column mangles surfaces as a query error instead of a bogus
//! integer.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{HeroPowerRepository, HeroPowerRepositoryError};
use crate::domain::{HeroId, HeroPower, NewHeroPower, PowerId, Strength};

use super::diesel_basic_error_mapping::{
    is_foreign_key_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{HeroPowerRow, NewHeroPowerRow};
use super::pool::{DbPool, PoolError};
use super::schema::hero_powers;

/// Diesel implementation of the hero-power repository port.
#[derive(Clone)]
pub struct DieselHeroPowerRepository {
    pool: DbPool,
}

impl DieselHeroPowerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HeroPowerRepositoryError {
    map_basic_pool_error(error, HeroPowerRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> HeroPowerRepositoryError {
    if is_foreign_key_violation(&error) {
        return HeroPowerRepositoryError::missing_reference("hero or power row missing");
    }
    map_basic_diesel_error(
        error,
        HeroPowerRepositoryError::query,
        HeroPowerRepositoryError::connection,
    )
}

fn row_to_hero_power(row: HeroPowerRow) -> Result<HeroPower, HeroPowerRepositoryError> {
    let strength: Strength = row.strength.parse().map_err(|err| {
        HeroPowerRepositoryError::query(format!("stored strength {:?}: {err}", row.strength))
    })?;
    Ok(HeroPower {
        hero_id: HeroId::new(row.hero_id),
        power_id: PowerId::new(row.power_id),
        strength,
    })
}

#[async_trait]
impl HeroPowerRepository for DieselHeroPowerRepository {
    async fn create(
        &self,
        hero_power: &NewHeroPower,
    ) -> Result<HeroPower, HeroPowerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewHeroPowerRow {
            hero_id: hero_power.hero_id.get(),
            power_id: hero_power.power_id.get(),
            strength: hero_power.strength.to_string(),
        };
        let row: HeroPowerRow = diesel::insert_into(hero_powers::table)
            .values(&new_row)
            .returning(HeroPowerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_hero_power(row)
    }
}
