//! A very coarse classification of colours: which of the six primary and secondary hues a colour is
//! near, or whether it is close enough to black, white or grey that hue stops mattering. This is
//! what [`contrast`](crate::contrast::contrast) uses to decide how hard to push a colour towards
//! black or white.

use std::fmt;

use crate::colour::RGBAColour;
use crate::colours::to_hsl_and_hsv;
use crate::consts::{
    GREY_THRESHOLD, HUE_BAND, HUE_BLUE, HUE_CYAN, HUE_GREEN, HUE_MAGENTA, HUE_RED, HUE_YELLOW,
    LUM_THRESHOLD_BLACK, LUM_THRESHOLD_WHITE, MAX_HUE,
};

/// The bucket a colour roughly falls into.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoughColour {
    /// Hue within 30 degrees of 0.
    Red,
    /// Hue within 30 degrees of 120.
    Green,
    /// Hue within 30 degrees of 240.
    Blue,
    /// Hue within 30 degrees of 180.
    Cyan,
    /// Hue within 30 degrees of 300.
    Magenta,
    /// Hue within 30 degrees of 60.
    Yellow,
    /// Too dark for hue to matter.
    Black,
    /// Too unsaturated for hue to matter.
    Grey,
    /// Too light for hue to matter.
    White,
    /// Saturated, but exactly on a boundary between two hue bands.
    Other,
}

/// The hue buckets in the order they are tried, each with its base hue.
const HUE_BUCKETS: [(RoughColour, f64); 6] = [
    (RoughColour::Red, HUE_RED),
    (RoughColour::Green, HUE_GREEN),
    (RoughColour::Blue, HUE_BLUE),
    (RoughColour::Cyan, HUE_CYAN),
    (RoughColour::Magenta, HUE_MAGENTA),
    (RoughColour::Yellow, HUE_YELLOW),
];

impl RoughColour {
    /// Every bucket.
    pub const ALL: [RoughColour; 10] = [
        RoughColour::Red,
        RoughColour::Green,
        RoughColour::Blue,
        RoughColour::Cyan,
        RoughColour::Magenta,
        RoughColour::Yellow,
        RoughColour::Black,
        RoughColour::Grey,
        RoughColour::White,
        RoughColour::Other,
    ];
}

impl fmt::Display for RoughColour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Whether `hue` lies strictly within [`HUE_BAND`] degrees of `base`, going the short way round the
/// circle.
fn near_hue(hue: f64, base: f64) -> bool {
    let diff = (hue - base).rem_euclid(MAX_HUE);
    diff.min(MAX_HUE - diff) < HUE_BAND
}

/// Puts a colour in a [`RoughColour`] bucket. Lightness is checked first, then saturation, then hue.
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// assert_eq!(roughly(RGBAColour::opaque(0xff, 0x40, 0x00)), RoughColour::Red);
/// assert_eq!(roughly(RGBAColour::opaque(0x80, 0x80, 0x80)), RoughColour::Grey);
/// ```
pub fn roughly(c: RGBAColour) -> RoughColour {
    let (hsl, _) = to_hsl_and_hsv(c);
    if hsl.l < LUM_THRESHOLD_BLACK {
        return RoughColour::Black;
    }
    if hsl.l > LUM_THRESHOLD_WHITE {
        return RoughColour::White;
    }
    if hsl.s < GREY_THRESHOLD {
        return RoughColour::Grey;
    }
    HUE_BUCKETS
        .iter()
        .find(|&&(_, base)| near_hue(hsl.h, base))
        .map(|&(rc, _)| rc)
        .unwrap_or(RoughColour::Other)
}
