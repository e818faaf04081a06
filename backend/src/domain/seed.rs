//! Starter catalogue of heroes and powers, and the service that loads it.

use std::sync::Arc;

use tracing::info;

use crate::domain::Error;
use crate::domain::ports::{CatalogueSeedRepository, CatalogueSeedRepositoryError, SeedingResult};

/// Hero entry in a seed catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedHero {
    pub name: &'static str,
    pub super_name: &'static str,
}

/// Power entry in a seed catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPower {
    pub name: &'static str,
    pub description: &'static str,
}

/// Association entry referencing heroes and powers by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHeroPower {
    pub hero_index: usize,
    pub power_index: usize,
    pub strength: i64,
}

/// A self-consistent set of heroes, powers, and links between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCatalogue {
    pub heroes: Vec<SeedHero>,
    pub powers: Vec<SeedPower>,
    pub hero_powers: Vec<SeedHeroPower>,
}

impl SeedCatalogue {
    /// The catalogue shipped with the service.
    ///
    /// # Examples
    /// ```
    /// use superheroes::domain::SeedCatalogue;
    ///
    /// let catalogue = SeedCatalogue::standard();
    /// assert_eq!(catalogue.heroes.len(), 4);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self {
            heroes: vec![
                SeedHero {
                    name: "Kamala Khan",
                    super_name: "Ms. Marvel",
                },
                SeedHero {
                    name: "Doreen Green",
                    super_name: "Squirrel Girl",
                },
                SeedHero {
                    name: "Gwen Stacy",
                    super_name: "Spider-Gwen",
                },
                SeedHero {
                    name: "Janet Van Dyne",
                    super_name: "The Wasp",
                },
            ],
            powers: vec![
                SeedPower {
                    name: "super strength",
                    description: "gives the wielder super-human strengths",
                },
                SeedPower {
                    name: "flight",
                    description: "gives the wielder the ability to fly through the skies at supersonic speed",
                },
                SeedPower {
                    name: "super human senses",
                    description: "allows the wielder to use her senses at a super-human level",
                },
                SeedPower {
                    name: "elasticity",
                    description: "can stretch the human body to extreme lengths",
                },
            ],
            hero_powers: vec![
                SeedHeroPower {
                    hero_index: 0,
                    power_index: 3,
                    strength: 7,
                },
                SeedHeroPower {
                    hero_index: 1,
                    power_index: 0,
                    strength: 5,
                },
                SeedHeroPower {
                    hero_index: 2,
                    power_index: 2,
                    strength: 8,
                },
                SeedHeroPower {
                    hero_index: 3,
                    power_index: 1,
                    strength: 6,
                },
            ],
        }
    }

    /// Check that every association points inside the hero and power lists.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.hero_powers.iter().all(|link| {
            link.hero_index < self.heroes.len() && link.power_index < self.powers.len()
        })
    }
}

/// Loads a [`SeedCatalogue`] through a [`CatalogueSeedRepository`].
#[derive(Clone)]
pub struct CatalogueSeeder<R> {
    repository: Arc<R>,
}

impl<R> CatalogueSeeder<R>
where
    R: CatalogueSeedRepository,
{
    /// Create a seeder over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Seed the catalogue, reporting whether anything was written.
    ///
    /// # Errors
    /// Returns [`Error`] with `invalid_request` when the catalogue references
    /// positions outside its lists, or the mapped repository failure.
    pub async fn seed(&self, catalogue: &SeedCatalogue) -> Result<SeedingResult, Error> {
        if !catalogue.is_consistent() {
            return Err(Error::invalid_request(
                "seed catalogue links reference unknown heroes or powers",
            ));
        }

        let result = self
            .repository
            .seed(catalogue)
            .await
            .map_err(|error| match error {
                CatalogueSeedRepositoryError::Connection { message } => {
                    Error::service_unavailable(format!("catalogue store unavailable: {message}"))
                }
                CatalogueSeedRepositoryError::Query { message } => {
                    Error::internal(format!("catalogue seed failed: {message}"))
                }
            })?;

        match result {
            SeedingResult::Applied => info!(
                heroes = catalogue.heroes.len(),
                powers = catalogue.powers.len(),
                hero_powers = catalogue.hero_powers.len(),
                "catalogue seed applied"
            ),
            SeedingResult::AlreadySeeded => info!("catalogue already seeded; skipping"),
        }
        Ok(result)
    }
}
