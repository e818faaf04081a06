//! In-process catalogue store implementing every repository port.
//!
//! The server falls back to this adapter when no database URL is configured,
//! and the HTTP tests drive the full service stack through it. Tables sit
//! behind a single mutex; a poisoned lock is recovered rather than surfaced
//! because every mutation leaves the tables consistent before returning.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CatalogueSeedRepository, CatalogueSeedRepositoryError, HeroPowerRepository,
    HeroPowerRepositoryError, HeroRepository, HeroRepositoryError, PowerRepository,
    PowerRepositoryError, SeedingResult,
};
use crate::domain::{
    Hero, HeroId, HeroPower, NewHeroPower, Power, PowerId, SeedCatalogue, Strength,
};

#[derive(Debug, Default)]
struct Tables {
    heroes: BTreeMap<HeroId, Hero>,
    powers: BTreeMap<PowerId, Power>,
    hero_powers: Vec<HeroPower>,
    last_hero_id: i32,
    last_power_id: i32,
}

impl Tables {
    fn insert_hero(&mut self, name: &str, super_name: &str) -> Hero {
        self.last_hero_id += 1;
        let hero = Hero::new(HeroId::new(self.last_hero_id), name, super_name);
        self.heroes.insert(hero.id(), hero.clone());
        hero
    }

    fn insert_power(&mut self, name: &str, description: &str) -> Power {
        self.last_power_id += 1;
        let power = Power::new(PowerId::new(self.last_power_id), name, description);
        self.powers.insert(power.id(), power.clone());
        power
    }
}

/// Shared, cloneable in-memory catalogue.
///
/// # Examples
/// ```
/// use superheroes::domain::SeedCatalogue;
/// use superheroes::outbound::memory::InMemoryCatalogue;
///
/// let store = InMemoryCatalogue::seeded(&SeedCatalogue::standard());
/// assert_eq!(store.hero_power_count(), 4);
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogue {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryCatalogue {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with the given catalogue.
    #[must_use]
    pub fn seeded(catalogue: &SeedCatalogue) -> Self {
        let store = Self::new();
        store.load(catalogue);
        store
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a hero, assigning the next identifier.
    pub fn insert_hero(&self, name: &str, super_name: &str) -> Hero {
        self.lock().insert_hero(name, super_name)
    }

    /// Insert a power as-is. No validation is applied, mirroring rows
    /// written outside the API.
    pub fn insert_power(&self, name: &str, description: &str) -> Power {
        self.lock().insert_power(name, description)
    }

    /// Number of stored hero-power associations.
    #[must_use]
    pub fn hero_power_count(&self) -> usize {
        self.lock().hero_powers.len()
    }

    fn load(&self, catalogue: &SeedCatalogue) -> bool {
        let mut tables = self.lock();
        if !tables.heroes.is_empty() {
            return false;
        }
        let heroes: Vec<HeroId> = catalogue
            .heroes
            .iter()
            .map(|seed| tables.insert_hero(seed.name, seed.super_name).id())
            .collect();
        let powers: Vec<PowerId> = catalogue
            .powers
            .iter()
            .map(|seed| tables.insert_power(seed.name, seed.description).id())
            .collect();
        let links: Vec<HeroPower> = catalogue
            .hero_powers
            .iter()
            .filter_map(|link| {
                Some(HeroPower {
                    hero_id: *heroes.get(link.hero_index)?,
                    power_id: *powers.get(link.power_index)?,
                    strength: Strength::new_unchecked(link.strength),
                })
            })
            .collect();
        tables.hero_powers.extend(links);
        true
    }
}

#[async_trait]
impl HeroRepository for InMemoryCatalogue {
    async fn list_heroes(&self) -> Result<Vec<Hero>, HeroRepositoryError> {
        Ok(self.lock().heroes.values().cloned().collect())
    }

    async fn find_hero(&self, id: HeroId) -> Result<Option<Hero>, HeroRepositoryError> {
        Ok(self.lock().heroes.get(&id).cloned())
    }

    async fn list_powers_for_hero(&self, id: HeroId) -> Result<Vec<Power>, HeroRepositoryError> {
        let tables = self.lock();
        let linked: BTreeMap<PowerId, Power> = tables
            .hero_powers
            .iter()
            .filter(|link| link.hero_id == id)
            .filter_map(|link| {
                tables
                    .powers
                    .get(&link.power_id)
                    .map(|power| (power.id(), power.clone()))
            })
            .collect();
        Ok(linked.into_values().collect())
    }
}

#[async_trait]
impl PowerRepository for InMemoryCatalogue {
    async fn list_powers(&self) -> Result<Vec<Power>, PowerRepositoryError> {
        Ok(self.lock().powers.values().cloned().collect())
    }

    async fn find_power(&self, id: PowerId) -> Result<Option<Power>, PowerRepositoryError> {
        Ok(self.lock().powers.get(&id).cloned())
    }

    async fn update_description(
        &self,
        id: PowerId,
        description: &str,
    ) -> Result<Option<Power>, PowerRepositoryError> {
        let mut tables = self.lock();
        let Some(power) = tables.powers.get_mut(&id) else {
            return Ok(None);
        };
        *power = power.clone().with_description(description);
        Ok(Some(power.clone()))
    }
}

#[async_trait]
impl HeroPowerRepository for InMemoryCatalogue {
    async fn create(
        &self,
        hero_power: &NewHeroPower,
    ) -> Result<HeroPower, HeroPowerRepositoryError> {
        let mut tables = self.lock();
        if !tables.heroes.contains_key(&hero_power.hero_id)
            || !tables.powers.contains_key(&hero_power.power_id)
        {
            return Err(HeroPowerRepositoryError::missing_reference(format!(
                "hero {} / power {}",
                hero_power.hero_id, hero_power.power_id
            )));
        }
        let stored = HeroPower::from(*hero_power);
        tables.hero_powers.push(stored);
        Ok(stored)
    }
}

#[async_trait]
impl CatalogueSeedRepository for InMemoryCatalogue {
    async fn seed(
        &self,
        catalogue: &SeedCatalogue,
    ) -> Result<SeedingResult, CatalogueSeedRepositoryError> {
        if self.load(catalogue) {
            Ok(SeedingResult::Applied)
        } else {
            Ok(SeedingResult::AlreadySeeded)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Behavioural coverage for the in-memory adapter.

    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryCatalogue {
        InMemoryCatalogue::seeded(&SeedCatalogue::standard())
    }

    #[rstest]
    #[tokio::test]
    async fn lists_are_ordered_by_id(store: InMemoryCatalogue) {
        let heroes = store.list_heroes().await.expect("heroes");
        let ids: Vec<i32> = heroes.iter().map(|hero| hero.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        let powers = store.list_powers().await.expect("powers");
        assert_eq!(powers.first().map(Power::name), Some("super strength"));
    }

    #[rstest]
    #[tokio::test]
    async fn powers_for_hero_are_distinct(store: InMemoryCatalogue) {
        let hero_id = HeroId::new(1);
        let strength: Strength = "3".parse().expect("strength");
        for _ in 0..2 {
            store
                .create(&NewHeroPower {
                    hero_id,
                    power_id: PowerId::new(1),
                    strength,
                })
                .await
                .expect("link stored");
        }

        let powers = store.list_powers_for_hero(hero_id).await.expect("powers");
        let ids: Vec<i32> = powers.iter().map(|power| power.id().get()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_missing_reference(store: InMemoryCatalogue) {
        let strength: Strength = "3".parse().expect("strength");
        let error = store
            .create(&NewHeroPower {
                hero_id: HeroId::new(77),
                power_id: PowerId::new(1),
                strength,
            })
            .await
            .expect_err("missing hero");
        assert!(matches!(
            error,
            HeroPowerRepositoryError::MissingReference { .. }
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn update_description_returns_none_for_unknown_power(store: InMemoryCatalogue) {
        let updated = store
            .update_description(PowerId::new(99), "anything")
            .await
            .expect("update runs");
        assert!(updated.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_twice_reports_already_seeded(store: InMemoryCatalogue) {
        let result = store
            .seed(&SeedCatalogue::standard())
            .await
            .expect("seed runs");
        assert_eq!(result, SeedingResult::AlreadySeeded);
        assert_eq!(store.hero_power_count(), 4);
    }
}
