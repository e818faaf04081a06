//! Hero aggregate and identifier.

use std::fmt;

use super::Power;

/// Stable hero identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeroId(i32);

impl HeroId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for HeroId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named character. Heroes are read-only through the API.
///
/// # Examples
/// ```
/// use superheroes::domain::{Hero, HeroId};
///
/// let hero = Hero::new(HeroId::new(1), "Kamala Khan", "Ms. Marvel");
/// assert_eq!(hero.super_name(), "Ms. Marvel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    id: HeroId,
    name: String,
    super_name: String,
}

impl Hero {
    /// Build a hero from stored fields.
    pub fn new(id: HeroId, name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            super_name: super_name.into(),
        }
    }

    /// Store identifier.
    #[must_use]
    pub fn id(&self) -> HeroId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Super-hero alias.
    #[must_use]
    pub fn super_name(&self) -> &str {
        self.super_name.as_str()
    }
}

/// A hero together with the powers linked to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroDetail {
    /// The hero itself.
    pub hero: Hero,
    /// Distinct powers linked through hero-power associations, ordered by id.
    pub powers: Vec<Power>,
}
