//! Picking a colour that stands out against another, for example a text colour for a background.
//! The hue is turned round to the opposite side of the circle and the lightness is pushed towards
//! whichever extreme is further away. How far it is pushed, and where the switch between "lighter"
//! and "darker" falls, depends on the rough colour of the original: see
//! [`CONTRAST_ADJUSTMENTS`](crate::consts::CONTRAST_ADJUSTMENTS).

use crate::colour::RGBAColour;
use crate::colours::to_hsl_and_hsv;
use crate::consts::{CONTRAST_ADJUSTMENTS, MAX_HUE};
use crate::rough::roughly;

/// Returns a colour with high contrast to `c`, keeping `c`'s alpha. This is not an involution:
/// the contrast of the contrast is usually not the original colour.
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// let red = RGBAColour::opaque(0xff, 0, 0);
/// let c = contrast(red);
/// assert_ne!(c, red);
/// // a light cyan
/// assert!(c.g > 0xc0 && c.b > 0xc0 && c.r < c.g);
/// ```
pub fn contrast(c: RGBAColour) -> RGBAColour {
    let (mut hsl, _) = to_hsl_and_hsv(c);
    hsl.h = (hsl.h + MAX_HUE / 2.0).rem_euclid(MAX_HUE);

    let bucket = roughly(c);
    let adj = CONTRAST_ADJUSTMENTS[&bucket];
    hsl.l = if hsl.l < adj.threshold {
        1.0 - adj.adjustment
    } else {
        adj.adjustment
    };

    let mut out = hsl.to_rgba();
    out.a = c.a;
    out
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::rough::RoughColour;
    use float_cmp::approx_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_contrast_differs_for_non_grey() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut checked = 0;
        for _ in 0..1000 {
            let c = RGBAColour::opaque(rng.gen(), rng.gen(), rng.gen());
            if roughly(c) == RoughColour::Grey {
                continue;
            }
            checked += 1;
            assert_ne!(contrast(c), c, "{}", c);
        }
        assert!(checked > 500);
    }

    #[test]
    fn test_lightness_goes_to_the_far_side() {
        // dark blue goes light, pale yellow goes dark
        let (hsl, _) = to_hsl_and_hsv(contrast(RGBAColour::opaque(0, 0, 0x80)));
        assert!(approx_eq!(f64, hsl.l, 0.8, epsilon = 0.005), "{}", hsl);
        let (hsl, _) = to_hsl_and_hsv(contrast(RGBAColour::opaque(0xff, 0xff, 0x80)));
        assert!(approx_eq!(f64, hsl.l, 0.15, epsilon = 0.005), "{}", hsl);
    }

    #[test]
    fn test_black_and_white() {
        let white_ish = contrast(RGBAColour::opaque(0, 0, 0));
        assert_eq!(white_ish, RGBAColour::opaque(0xf2, 0xf2, 0xf2));
        let black_ish = contrast(RGBAColour::opaque(0xff, 0xff, 0xff));
        assert_eq!(black_ish, RGBAColour::opaque(0x0d, 0x0d, 0x0d));
    }

    #[test]
    fn test_alpha_is_kept() {
        assert_eq!(contrast(RGBAColour::new(0xff, 0, 0, 0x33)).a, 0x33);
    }

    #[test]
    fn test_hue_is_opposite() {
        let (before, _) = to_hsl_and_hsv(RGBAColour::opaque(0xff, 0, 0));
        let (after, _) = to_hsl_and_hsv(contrast(RGBAColour::opaque(0xff, 0, 0)));
        assert!(approx_eq!(f64, before.h, 0.0, epsilon = 1e-9));
        assert!(approx_eq!(f64, after.h, 180.0, epsilon = 1.0), "{}", after);
    }
}
