//! This file implements HSL: a simple transformation of RGB into a cylinder, with hue as the angle,
//! saturation as the distance from the grey axis, and lightness (luminance) running from black
//! through fully saturated at the middle to white at the top. It has all the perceptual problems of
//! RGB, but it is cheap, it is what people mean when they say "rotate the hue", and it is the space
//! the derived-colour functions in this crate do their arithmetic in.
//!
//! The transformation is hexagonal rather than circular: points are placed on a hexagon which is then
//! stretched into a circle, so there are no trigonometric functions anywhere. Grey has no meaningful
//! hue and is given a hue of 0.
//!
//! Converting RGB to HSL and back is lossy because RGB channels are integers. The round trip is
//! guaranteed to land within 1 of the original in each of R, G and B.

use std::fmt;

use float_cmp::approx_eq;

use crate::colour::RGBAColour;
use crate::consts::{COLOUR_INTERVAL, MAX_HUE};

/// A colour as hue, saturation and lightness.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColour {
    /// The hue, an angle in degrees in `[0, 360)`. 0 is red, 120 green and 240 blue, with yellow,
    /// cyan and magenta in between.
    pub h: f64,
    /// The saturation, in `[0, 1]`. The lower it is, the greyer the colour.
    pub s: f64,
    /// The lightness, in `[0, 1]`. For any hue and saturation, 0 is black and 1 is white.
    pub l: f64,
}

impl HSLColour {
    /// Converts back to RGB. The result is always fully opaque: HSL has no alpha, so whatever alpha
    /// the colour started with is not recovered here.
    ///
    /// # Example
    /// ```
    /// # use colourmatch::prelude::*;
    /// let lavender = HSLColour { h: 245.0, s: 0.5, l: 0.6 };
    /// assert_eq!(lavender.to_rgba().to_hex_code(), "#6E66CC");
    /// ```
    pub fn to_rgba(&self) -> RGBAColour {
        // first get back chroma
        let chroma = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let (r1, g1, b1) = hue_to_rgb(self.h, chroma);
        // now we add the right value to each component to get the correct lightness and scale back
        // to 0-255
        let offset = self.l - chroma / 2.0;
        RGBAColour::opaque(
            scale_channel(r1 + offset),
            scale_channel(g1 + offset),
            scale_channel(b1 + offset),
        )
    }

    /// Returns `true` if every component is within floating-point noise of `other`'s.
    pub fn approx_equal(&self, other: &HSLColour) -> bool {
        approx_eq!(f64, self.h, other.h, epsilon = 1e-9)
            && approx_eq!(f64, self.s, other.s, epsilon = 1e-9)
            && approx_eq!(f64, self.l, other.l, epsilon = 1e-9)
    }
}

impl From<HSLColour> for RGBAColour {
    fn from(hsl: HSLColour) -> RGBAColour {
        hsl.to_rgba()
    }
}

impl fmt::Display for HSLColour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{H:{:3.0} S:{:0.3} L:{:0.3}}}", self.h, self.s, self.l)
    }
}

/// Places a chroma on the hexagon: returns the (R, G, B) point with 0 lightness offset that has the
/// given hue. One component is the chroma, one is 0 and the middle one, `x`, slides between them as
/// the hue moves across a 60-degree sector. Shared with HSV, which only differs in how chroma and
/// the offset are found.
pub(crate) fn hue_to_rgb(hue: f64, chroma: f64) -> (f64, f64, f64) {
    let h = hue.rem_euclid(MAX_HUE) / COLOUR_INTERVAL;
    // intermediate value is the second-largest RGB value, where C is the largest because the
    // smallest is 0: call this x
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    // now split based on which line of the hexagon we're on, i.e., which are the two largest
    // components
    if h <= 1.0 {
        (chroma, x, 0.0)
    } else if h <= 2.0 {
        (x, chroma, 0.0)
    } else if h <= 3.0 {
        (0.0, chroma, x)
    } else if h <= 4.0 {
        (0.0, x, chroma)
    } else if h <= 5.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

/// Scales a [0, 1] channel to 0-255, rounding to nearest. Anything pushed slightly out of range by
/// floating-point error is clamped.
pub(crate) fn scale_channel(v: f64) -> u8 {
    let scaled = (v * f64::from(u8::max_value())).round();
    if scaled <= 0.0 {
        0
    } else if scaled >= 255.0 {
        255
    } else {
        scaled as u8
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colours::to_hsl_and_hsv;

    #[test]
    fn test_hsl_rgb_conversion() {
        let (red_hsl, _) = to_hsl_and_hsv(RGBAColour::opaque(255, 0, 0));
        assert!(red_hsl.approx_equal(&HSLColour {
            h: 0.0,
            s: 1.0,
            l: 0.5
        }));
        let lavender_hsl = HSLColour {
            h: 245.0,
            s: 0.5,
            l: 0.6,
        };
        assert_eq!(lavender_hsl.to_rgba().to_hex_code(), "#6E66CC");
    }

    #[test]
    fn test_alpha_is_forced_opaque() {
        let (hsl, _) = to_hsl_and_hsv(RGBAColour::new(10, 200, 30, 0x40));
        assert_eq!(hsl.to_rgba().a, 0xff);
    }

    #[test]
    fn test_sector_boundaries() {
        // the six primaries and secondaries, at full saturation and half lightness
        let cases = [
            (0.0, "#FF0000"),
            (60.0, "#FFFF00"),
            (120.0, "#00FF00"),
            (180.0, "#00FFFF"),
            (240.0, "#0000FF"),
            (300.0, "#FF00FF"),
            (360.0, "#FF0000"),
            (-120.0, "#0000FF"),
        ];
        for &(h, hex) in cases.iter() {
            let c = HSLColour { h, s: 1.0, l: 0.5 }.to_rgba();
            assert_eq!(c.to_hex_code(), hex, "hue {}", h);
        }
    }

    #[test]
    fn test_greys_and_extremes() {
        assert_eq!(HSLColour { h: 77.0, s: 0.0, l: 0.0 }.to_rgba(), RGBAColour::opaque(0, 0, 0));
        assert_eq!(
            HSLColour { h: 200.0, s: 1.0, l: 1.0 }.to_rgba(),
            RGBAColour::opaque(255, 255, 255)
        );
        assert_eq!(
            HSLColour { h: 0.0, s: 0.0, l: 0.5 }.to_rgba(),
            RGBAColour::opaque(128, 128, 128)
        );
    }

    #[test]
    fn test_display() {
        let hsl = HSLColour {
            h: 120.0,
            s: 0.5,
            l: 0.25,
        };
        assert_eq!(hsl.to_string(), "{H:120 S:0.500 L:0.250}");
    }
}
