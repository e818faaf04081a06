//! Hero-power association carrying a strength value.

use std::fmt;
use std::str::FromStr;

use super::{HeroId, PowerId};

/// Integer strength of a hero's grip on a power.
///
/// Construct through [`validate_strength`](super::validate_strength) for
/// client input; stored values are parsed with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength(i64);

impl Strength {
    pub(crate) const fn new_unchecked(value: i64) -> Self {
        Self(value)
    }

    /// Return the integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Strength {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self)
    }
}

/// Insert payload for a new association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewHeroPower {
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub strength: Strength,
}

/// Persisted association between one hero and one power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroPower {
    pub hero_id: HeroId,
    pub power_id: PowerId,
    pub strength: Strength,
}

impl From<NewHeroPower> for HeroPower {
    fn from(value: NewHeroPower) -> Self {
        let NewHeroPower {
            hero_id,
            power_id,
            strength,
        } = value;
        Self {
            hero_id,
            power_id,
            strength,
        }
    }
}
