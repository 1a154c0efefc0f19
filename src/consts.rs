//! This file collects the tuning constants used across the crate: limits on searches and colour
//! generation, the thresholds that sort a colour into a rough bucket, and the table that decides how
//! far a contrasting colour is pushed towards black or white. Keeping them together makes it easy to
//! see, and to check, every number that shapes an answer.

use std::collections::HashMap;

use crate::rough::RoughColour;

/// The largest possible distance between two colours in the RGB cube: 255 times the square root of
/// 3. A search radius this large or larger would match every colour, so it is rejected.
// f64::sqrt is not a const fn, hence the literal
pub const MAX_PROXIMITY: f64 = 441.67295593006367;

/// How many times random generation may draw an already-produced colour for one slot before giving
/// up on the rest of the list.
pub const MAX_ATTEMPTS: usize = 3;

/// The angle between a primary and the neighbouring secondary colour on the hue circle.
pub const COLOUR_INTERVAL: f64 = 60.0;

/// The hue circle is measured in degrees.
pub const MAX_HUE: f64 = 360.0;

/// Base hue of red, in degrees.
pub const HUE_RED: f64 = 0.0;
/// Yellow.
pub const HUE_YELLOW: f64 = COLOUR_INTERVAL;
/// Green.
pub const HUE_GREEN: f64 = 2.0 * COLOUR_INTERVAL;
/// Cyan.
pub const HUE_CYAN: f64 = 3.0 * COLOUR_INTERVAL;
/// Blue.
pub const HUE_BLUE: f64 = 4.0 * COLOUR_INTERVAL;
/// Magenta.
pub const HUE_MAGENTA: f64 = 5.0 * COLOUR_INTERVAL;

/// Half the width of the hue band that counts as "roughly" one of the six named hues.
pub const HUE_BAND: f64 = COLOUR_INTERVAL / 2.0;

/// Luminance this close to 0 or 1 is treated as black or white whatever the hue.
pub const BW_THRESHOLD: f64 = 0.025;
/// Luminance below this is black.
pub const LUM_THRESHOLD_BLACK: f64 = BW_THRESHOLD;
/// Luminance above this is white.
pub const LUM_THRESHOLD_WHITE: f64 = 1.0 - BW_THRESHOLD;

/// HSL saturation below this reads as grey.
pub const GREY_THRESHOLD: f64 = 0.125;

/// How a contrasting colour is chosen for one rough bucket. If the original luminance is below
/// `threshold` the contrast is made light (`1 - adjustment`), otherwise dark (`adjustment`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContrastAdjustment {
    /// The luminance that separates "make it lighter" from "make it darker".
    pub threshold: f64,
    /// The distance of the resulting luminance from the nearer extreme.
    pub adjustment: f64,
}

impl ContrastAdjustment {
    fn new(threshold: f64, adjustment: f64) -> ContrastAdjustment {
        ContrastAdjustment {
            threshold,
            adjustment,
        }
    }
}

lazy_static! {
    /// The per-bucket contrast table. Yellows and greens look light well below 50% luminance, so
    /// they flip to dark earlier; blues and reds look dark well above it.
    pub static ref CONTRAST_ADJUSTMENTS: HashMap<RoughColour, ContrastAdjustment> = hashmap! {
        RoughColour::Red => ContrastAdjustment::new(0.60, 0.15),
        RoughColour::Green => ContrastAdjustment::new(0.40, 0.15),
        RoughColour::Blue => ContrastAdjustment::new(0.65, 0.20),
        RoughColour::Cyan => ContrastAdjustment::new(0.40, 0.15),
        RoughColour::Magenta => ContrastAdjustment::new(0.55, 0.20),
        RoughColour::Yellow => ContrastAdjustment::new(0.35, 0.15),
        RoughColour::Black => ContrastAdjustment::new(0.50, 0.05),
        RoughColour::Grey => ContrastAdjustment::new(0.50, 0.10),
        RoughColour::White => ContrastAdjustment::new(0.50, 0.05),
        RoughColour::Other => ContrastAdjustment::new(0.50, 0.15),
    };
}
