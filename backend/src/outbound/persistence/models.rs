//! Internal Diesel row structs. Never exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Hero, HeroId, Power, PowerId};

use super::schema::{hero_powers, heroes, powers};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = heroes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HeroRow {
    pub id: i32,
    pub name: String,
    pub super_name: String,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Hero::new(HeroId::new(row.id), row.name, row.super_name)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = heroes)]
pub(crate) struct NewHeroRow<'a> {
    pub name: &'a str,
    pub super_name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = powers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PowerRow {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<PowerRow> for Power {
    fn from(row: PowerRow) -> Self {
        Power::new(PowerId::new(row.id), row.name, row.description)
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = powers)]
pub(crate) struct NewPowerRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hero_powers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HeroPowerRow {
    #[expect(dead_code, reason = "surrogate key is not part of the domain association")]
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = hero_powers)]
pub(crate) struct NewHeroPowerRow {
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: String,
}
