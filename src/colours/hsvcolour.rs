//! This file implements HSV, a cousin of HSL. The difference is in the vertical axis: value runs from
//! black to the fully saturated colour instead of from black to white. That makes value a poor stand-in
//! for lightness (dark purple and white have the same value), but it makes hue and saturation
//! somewhat more meaningful than in HSL.

use float_cmp::approx_eq;

use crate::colour::RGBAColour;
use crate::colours::hslcolour::{hue_to_rgb, scale_channel};

/// A colour as hue, saturation and value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColour {
    /// The hue, an angle in degrees in `[0, 360)`. Exactly the same as the hue of the HSL form.
    pub h: f64,
    /// The saturation: chroma relative to value, in `[0, 1]`.
    pub s: f64,
    /// The value: the largest of the normalised R, G and B, in `[0, 1]`.
    pub v: f64,
}

impl HSVColour {
    /// Converts back to RGB, fully opaque.
    pub fn to_rgba(&self) -> RGBAColour {
        let chroma = self.s * self.v;
        let (r1, g1, b1) = hue_to_rgb(self.h, chroma);
        let offset = self.v - chroma;
        RGBAColour::opaque(
            scale_channel(r1 + offset),
            scale_channel(g1 + offset),
            scale_channel(b1 + offset),
        )
    }

    /// Returns `true` if every component is within floating-point noise of `other`'s.
    pub fn approx_equal(&self, other: &HSVColour) -> bool {
        approx_eq!(f64, self.h, other.h, epsilon = 1e-9)
            && approx_eq!(f64, self.s, other.s, epsilon = 1e-9)
            && approx_eq!(f64, self.v, other.v, epsilon = 1e-9)
    }
}

impl From<HSVColour> for RGBAColour {
    fn from(hsv: HSVColour) -> RGBAColour {
        hsv.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colours::to_hsl_and_hsv;

    #[test]
    fn test_hsv_rgb_conversion() {
        let (_, red_hsv) = to_hsl_and_hsv(RGBAColour::opaque(255, 0, 0));
        assert!(red_hsv.approx_equal(&HSVColour {
            h: 0.0,
            s: 1.0,
            v: 1.0
        }));
        let rose = HSVColour {
            h: 0.0,
            s: 0.5,
            v: 0.8,
        };
        assert_eq!(rose.to_rgba().to_hex_code(), "#CC6666");
    }

    #[test]
    fn test_round_trip_through_hsv() {
        for &(r, g, b) in [(12, 200, 99), (255, 255, 0), (1, 2, 3), (128, 0, 255)].iter() {
            let c = RGBAColour::opaque(r, g, b);
            let (_, hsv) = to_hsl_and_hsv(c);
            assert!(crate::compare::compare(hsv.to_rgba(), c, 1).is_ok(), "{}", c);
        }
    }
}
