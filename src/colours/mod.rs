//! This module contains the cylindrical colour spaces, [`HSLColour`] and [`HSVColour`], and the
//! conversion from RGB into both. For convenience, each type is imported into this module's namespace
//! directly.
//!
//! HSL and HSV share their hue and are computed from the same intermediate values, so the forward
//! conversion produces both at once.

pub mod hslcolour;
pub mod hsvcolour;

pub use self::hslcolour::HSLColour;
pub use self::hsvcolour::HSVColour;

use crate::colour::RGBAColour;
use crate::consts::{COLOUR_INTERVAL, HUE_BLUE, HUE_GREEN, HUE_RED, MAX_HUE};

/// The red, green and blue channels scaled to `[0, 1]`.
fn rgb_normalised(c: RGBAColour) -> (f64, f64, f64) {
    let max = f64::from(u8::max_value());
    (f64::from(c.r) / max, f64::from(c.g) / max, f64::from(c.b) / max)
}

/// Converts an RGB colour into its HSL and HSV forms. Alpha takes no part. The conversion is lossy:
/// see [`HSLColour::to_rgba`] for the way back.
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// let (hsl, hsv) = to_hsl_and_hsv(RGBAColour::opaque(0, 0x80, 0));
/// assert_eq!(hsl.h, 120.0);
/// assert_eq!(hsv.s, 1.0);
/// ```
pub fn to_hsl_and_hsv(c: RGBAColour) -> (HSLColour, HSVColour) {
    let (r, g, b) = rgb_normalised(c);
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    // a very rough estimate of the actual colour attribute: on the hexagon it is the "radius"
    let chroma = max_c - min_c;
    let value = max_c;
    let luminance = (max_c + min_c) / 2.0;

    // each of R, G and B owns a third of the hexagon; the other two channels decide how far round
    // from that channel's base hue the colour sits
    let sectors = MAX_HUE / COLOUR_INTERVAL;
    let sector_position = if chroma == 0.0 {
        // could be anything, undefined really, just 0 for grey
        0.0
    } else if value == r {
        ((g - b) / chroma) % sectors + HUE_RED / COLOUR_INTERVAL
    } else if value == g {
        ((b - r) / chroma) % sectors + HUE_GREEN / COLOUR_INTERVAL
    } else {
        ((r - g) / chroma) % sectors + HUE_BLUE / COLOUR_INTERVAL
    };
    let mut hue = sector_position * COLOUR_INTERVAL;
    if hue < 0.0 {
        hue += MAX_HUE;
    }

    let saturation_hsv = if value == 0.0 { 0.0 } else { chroma / value };
    let saturation_hsl = if luminance == 0.0 || luminance == 1.0 {
        // this would be a divide by 0 otherwise, and the colour is black or white anyway
        0.0
    } else {
        (value - luminance) / luminance.min(1.0 - luminance)
    };

    (
        HSLColour {
            h: hue,
            s: saturation_hsl,
            l: luminance,
        },
        HSVColour {
            h: hue,
            s: saturation_hsv,
            v: value,
        },
    )
}

impl From<RGBAColour> for HSLColour {
    fn from(c: RGBAColour) -> HSLColour {
        to_hsl_and_hsv(c).0
    }
}

impl From<RGBAColour> for HSVColour {
    fn from(c: RGBAColour) -> HSVColour {
        to_hsl_and_hsv(c).1
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::compare::compare;
    use float_cmp::approx_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_known_conversions() {
        let (hsl, hsv) = to_hsl_and_hsv(RGBAColour::opaque(0xff, 0x80, 0x00));
        assert!(approx_eq!(f64, hsl.h, 30.117647058823529, epsilon = 1e-9));
        assert!(approx_eq!(f64, hsl.s, 1.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, hsl.l, 0.5, epsilon = 1e-9));
        assert!(approx_eq!(f64, hsv.v, 1.0, epsilon = 1e-9));

        // magenta-ish reds have G < B and need the negative hue shifted round
        let (hsl, _) = to_hsl_and_hsv(RGBAColour::opaque(0xff, 0x00, 0x80));
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    #[test]
    fn test_black_white_and_grey() {
        let (hsl, hsv) = to_hsl_and_hsv(RGBAColour::opaque(0, 0, 0));
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 0.0, 0.0));
        assert_eq!((hsv.s, hsv.v), (0.0, 0.0));
        let (hsl, _) = to_hsl_and_hsv(RGBAColour::opaque(255, 255, 255));
        assert_eq!((hsl.s, hsl.l), (0.0, 1.0));
        let (hsl, hsv) = to_hsl_and_hsv(RGBAColour::opaque(0x80, 0x80, 0x80));
        assert_eq!((hsl.h, hsl.s, hsv.s), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_always_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let c = RGBAColour::opaque(rng.gen(), rng.gen(), rng.gen());
            let (hsl, hsv) = to_hsl_and_hsv(c);
            assert!(hsl.h >= 0.0 && hsl.h < 360.0, "{} has hue {}", c, hsl.h);
            assert!(hsl.s >= 0.0 && hsl.s <= 1.0 + 1e-9);
            assert!(hsv.s >= 0.0 && hsv.s <= 1.0);
        }
    }

    #[test]
    fn test_round_trip_within_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut samples: Vec<RGBAColour> = (0..2000)
            .map(|_| RGBAColour::opaque(rng.gen(), rng.gen(), rng.gen()))
            .collect();
        samples.extend(
            [(0, 0, 0), (255, 255, 255), (1, 0, 0), (254, 255, 255), (0, 0, 0xee)]
                .iter()
                .map(|&rgb| RGBAColour::from(rgb)),
        );
        for c in samples {
            let (hsl, _) = to_hsl_and_hsv(c);
            let back = hsl.to_rgba();
            assert!(compare(back, c, 1).is_ok(), "{} came back as {}", c, back);
        }
    }
}
