//! Power aggregate and identifier.

use std::fmt;

/// Stable power identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowerId(i32);

impl PowerId {
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

impl From<i32> for PowerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named ability with a textual description.
///
/// The description is carried as stored. Rows seeded outside the API are not
/// guaranteed to satisfy [`validate_description`](super::validate_description),
/// which is why hero-power creation re-checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Power {
    id: PowerId,
    name: String,
    description: String,
}

impl Power {
    /// Build a power from stored fields.
    pub fn new(id: PowerId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Store identifier.
    #[must_use]
    pub fn id(&self) -> PowerId {
        self.id
    }

    /// Power name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Return a copy carrying a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
