//! The error type shared by every fallible operation in this crate. Errors are plain values: nothing
//! is mutated before one is returned, so a caller can always fix the argument and try again.

use thiserror::Error;

use crate::family::Family;

/// Everything that can go wrong when asking for colours or colour names. Each variant carries the
/// offending value so that the message can say what was wrong with it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColourError {
    /// A family list named a family twice, or named one the registry has no table for.
    #[error("bad colour family: {family:?} ({reason})")]
    BadFamily {
        /// The family text or label that was rejected.
        family: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The colour name is not in the family it was looked up in.
    #[error("bad colour name: {0:?}")]
    BadColourName(String),
    /// A count was out of range: below zero everywhere, and zero where at least one colour must be
    /// produced.
    #[error("bad colour count: {0}")]
    BadColourCount(isize),
    /// A search radius outside `[0, sqrt(3) * 255)`.
    #[error("bad colour proximity: expecting 0 <= {0} < {max}", max = crate::consts::MAX_PROXIMITY)]
    BadColourProximity(f64),
    /// The CGA palette only has sixteen entries.
    #[error("bad CGA colour index: {0}")]
    BadCgaIndex(usize),
    /// The string is not a `#rrggbb` or `#rrggbbaa` hex code.
    #[error("bad hex code: {0:?}")]
    BadHexCode(String),
    /// Two colours differ by more than the allowed precision in at least one channel.
    #[error("the colours differ: {0}")]
    ColoursDiffer(String),
}

impl ColourError {
    pub(crate) fn duplicate_family(family: Family, positions: &[usize]) -> ColourError {
        ColourError::BadFamily {
            family: family.label().to_string(),
            reason: format!("appears {} times, at positions {:?}", positions.len(), positions),
        }
    }

    pub(crate) fn unknown_family(family: Family) -> ColourError {
        ColourError::BadFamily {
            family: family.label().to_string(),
            reason: "no colour table is registered for it".to_string(),
        }
    }

    pub(crate) fn unrecognised_family(text: &str) -> ColourError {
        ColourError::BadFamily {
            family: text.to_string(),
            reason: "not a recognised colour family".to_string(),
        }
    }

    /// Returns `true` for the [`ColourError::BadFamily`] variant, whatever its payload.
    pub fn is_bad_family(&self) -> bool {
        match *self {
            ColourError::BadFamily { .. } => true,
            _ => false,
        }
    }
}

/// Shorthand for results whose error is a [`ColourError`].
pub type Result<T> = ::std::result::Result<T, ColourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_value() {
        let err = ColourError::BadColourName("No-Such-Colour".to_string());
        assert_eq!(err.to_string(), "bad colour name: \"No-Such-Colour\"");
        assert_eq!(ColourError::BadColourCount(-1).to_string(), "bad colour count: -1");
        assert_eq!(ColourError::BadCgaIndex(99).to_string(), "bad CGA colour index: 99");
        assert!(ColourError::BadColourProximity(-0.5)
            .to_string()
            .starts_with("bad colour proximity: expecting 0 <= -0.5 < 441.67"));
    }

    #[test]
    fn test_family_errors() {
        let dup = ColourError::duplicate_family(Family::Web, &[0, 2]);
        assert!(dup.is_bad_family());
        assert_eq!(
            dup.to_string(),
            "bad colour family: \"Web\" (appears 2 times, at positions [0, 2])"
        );
        assert!(ColourError::unrecognised_family("Mauve").is_bad_family());
        assert!(!ColourError::BadColourCount(0).is_bad_family());
    }
}
