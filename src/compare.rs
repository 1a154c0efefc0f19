//! Tolerant comparison of colours. Conversions through HSL or HSV can move a channel by one, so
//! exact equality is often the wrong question; these functions ask "close enough?" instead.

use crate::colour::RGBAColour;
use crate::error::{ColourError, Result};
use crate::search::distance;

/// Describes the channel if `p1` and `p2` differ by more than `precision`.
fn compare_channel(p1: u8, p2: u8, precision: u8, name: &str) -> Option<String> {
    let diff = (i16::from(p1) - i16::from(p2)).abs();
    if diff > i16::from(precision) {
        Some(format!(
            "c1.{}({:#04x}) and c2.{}({:#04x}) differ by more than {}",
            name, p1, name, p2, precision
        ))
    } else {
        None
    }
}

/// Checks that every channel of `c1`, alpha included, is within `precision` of the same channel of
/// `c2`. A precision of 0 asks for an exact match.
///
/// # Errors
/// [`ColourError::ColoursDiffer`] listing each channel that is too far apart.
pub fn compare(c1: RGBAColour, c2: RGBAColour, precision: u8) -> Result<()> {
    let problems: Vec<String> = [
        (c1.r, c2.r, "R"),
        (c1.g, c2.g, "G"),
        (c1.b, c2.b, "B"),
        (c1.a, c2.a, "A"),
    ]
    .iter()
    .filter_map(|&(p1, p2, name)| compare_channel(p1, p2, precision, name))
    .collect();

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ColourError::ColoursDiffer(problems.join(", ")))
    }
}

/// Returns `true` if the Euclidean distance between the two colours is less than `limit`. Alpha is
/// ignored.
pub fn within_dist(c1: RGBAColour, c2: RGBAColour, limit: f64) -> bool {
    f64::from(distance(c1, c2)) < limit * limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        let c = RGBAColour::new(10, 20, 30, 255);
        assert_eq!(compare(c, c, 0), Ok(()));
        assert_eq!(compare(c, RGBAColour::new(11, 19, 30, 254), 1), Ok(()));
        assert_eq!(
            compare(c, RGBAColour::new(12, 20, 30, 255), 1),
            Err(ColourError::ColoursDiffer(
                "c1.R(0x0a) and c2.R(0x0c) differ by more than 1".to_string()
            ))
        );
        match compare(c, RGBAColour::new(0, 20, 30, 0), 3) {
            Err(ColourError::ColoursDiffer(msg)) => {
                assert!(msg.contains("c1.R"));
                assert!(msg.contains("c1.A"));
                assert!(!msg.contains("c1.G"));
            }
            other => panic!("expected a difference, got {:?}", other),
        }
    }

    #[test]
    fn test_within_dist() {
        let a = RGBAColour::opaque(0, 0, 0);
        let b = RGBAColour::opaque(3, 4, 0);
        assert!(within_dist(a, b, 5.1));
        assert!(!within_dist(a, b, 5.0));
        assert!(within_dist(a, RGBAColour::new(0, 0, 0, 0), 0.5));
    }
}
