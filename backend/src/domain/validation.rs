//! Scalar validators for power descriptions and hero-power strengths.

use std::fmt;

use super::Strength;

/// Maximum number of characters a power description may hold.
pub const DESCRIPTION_MAX_CHARS: usize = 255;

/// Reasons a validator rejected its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingStrength,
    EmptyDescription,
    DescriptionTooLong { max: usize, actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStrength => write!(f, "strength must be a non-zero integer"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::DescriptionTooLong { max, actual } => write!(
                f,
                "description must be at most {max} characters (got {actual})"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Accept a strength when it is present and non-zero.
///
/// Callers are responsible for rejecting non-integer wire values before the
/// strength reaches this check. Zero counts as absent.
///
/// # Examples
/// ```
/// use superheroes::domain::{ValidationError, validate_strength};
///
/// assert_eq!(validate_strength(Some(7)).map(|s| s.get()), Ok(7));
/// assert_eq!(validate_strength(Some(0)), Err(ValidationError::MissingStrength));
/// assert_eq!(validate_strength(None), Err(ValidationError::MissingStrength));
/// ```
pub fn validate_strength(strength: Option<i64>) -> Result<Strength, ValidationError> {
    match strength {
        Some(value) if value != 0 => Ok(Strength::new_unchecked(value)),
        _ => Err(ValidationError::MissingStrength),
    }
}

/// Accept a description when it is non-empty and at most
/// [`DESCRIPTION_MAX_CHARS`] characters long.
///
/// # Examples
/// ```
/// use superheroes::domain::validate_description;
///
/// assert!(validate_description("Fly through the skies").is_ok());
/// assert!(validate_description("").is_err());
/// assert!(validate_description(&"x".repeat(256)).is_err());
/// ```
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let actual = description.chars().count();
    if actual > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong {
            max: DESCRIPTION_MAX_CHARS,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Boundary coverage for both validators.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1))]
    #[case(Some(-3))]
    #[case(Some(i64::MAX))]
    fn strength_accepts_non_zero_integers(#[case] strength: Option<i64>) {
        let accepted = validate_strength(strength).expect("strength accepted");
        assert_eq!(Some(accepted.get()), strength);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(0))]
    fn strength_rejects_missing_or_zero(#[case] strength: Option<i64>) {
        assert_eq!(
            validate_strength(strength),
            Err(ValidationError::MissingStrength)
        );
    }

    #[rstest]
    fn description_accepts_exactly_max_chars() {
        let description = "a".repeat(DESCRIPTION_MAX_CHARS);
        assert!(validate_description(&description).is_ok());
    }

    #[rstest]
    fn description_rejects_one_past_max() {
        let description = "a".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert_eq!(
            validate_description(&description),
            Err(ValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX_CHARS,
                actual: DESCRIPTION_MAX_CHARS + 1,
            })
        );
    }

    #[rstest]
    fn description_counts_characters_not_bytes() {
        // 255 two-byte characters stay within the limit.
        let description = "é".repeat(DESCRIPTION_MAX_CHARS);
        assert!(validate_description(&description).is_ok());
    }

    #[rstest]
    fn description_rejects_empty() {
        assert_eq!(
            validate_description(""),
            Err(ValidationError::EmptyDescription)
        );
    }
}
