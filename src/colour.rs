//! This file defines [`RGBAColour`], the value every other part of the crate works on: four 8-bit
//! channels and nothing else. It has no identity beyond its channels, so two colours are the same
//! exactly when all four channels are equal.
//!
//! The alpha channel rides along for callers that need it, but it is ignored when colours are
//! compared by distance, indexed, or named: a half-transparent red is still "red".

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{ColourError, Result};

/// A colour as four 8-bit channels: red, green, blue and alpha (255 is fully opaque).
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// let teal = RGBAColour::from_hex_code("#008080").unwrap();
/// assert_eq!(teal, RGBAColour::opaque(0, 0x80, 0x80));
/// assert_eq!(teal.to_hex_code(), "#008080");
/// // anything with no name is printed channel by channel
/// assert_eq!(RGBAColour::new(1, 2, 3, 0xff).to_string(), "RGBA{R:0x01, G:0x02, B:0x03, A:0xff}");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RGBAColour {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
    /// The alpha channel: 0 is fully transparent, 255 fully opaque.
    pub a: u8,
}

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})?$")
            .expect("hex code pattern is valid");
}

impl RGBAColour {
    /// A colour from all four channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> RGBAColour {
        RGBAColour { r, g, b, a }
    }

    /// A fully opaque colour. Every colour in the name tables is one of these.
    pub fn opaque(r: u8, g: u8, b: u8) -> RGBAColour {
        RGBAColour::new(r, g, b, u8::max_value())
    }

    /// Packs red, green and blue into one integer, `0xRRGGBB`. Alpha is left out on purpose, so a
    /// colour and its translucent twin share a key.
    pub fn packed_key(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// The opaque colour with the given packed key. Anything above `0xFFFFFF` is ignored.
    pub fn from_packed_key(key: u32) -> RGBAColour {
        RGBAColour::opaque((key >> 16) as u8, (key >> 8) as u8, key as u8)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (either case). Without an alpha pair the colour is opaque.
    pub fn from_hex_code(hex: &str) -> Result<RGBAColour> {
        let caps = HEX_CODE
            .captures(hex)
            .ok_or_else(|| ColourError::BadHexCode(hex.to_string()))?;
        // the pattern only lets two hex digits through per group, so these parses can't overflow
        let channel = |i: usize| {
            caps.get(i)
                .map(|m| u8::from_str_radix(m.as_str(), 16))
                .unwrap_or(Ok(u8::max_value()))
                .map_err(|_| ColourError::BadHexCode(hex.to_string()))
        };
        Ok(RGBAColour::new(channel(1)?, channel(2)?, channel(3)?, channel(4)?))
    }

    /// The `#RRGGBB` form of this colour, with an alpha pair appended only when the colour is not
    /// fully opaque.
    pub fn to_hex_code(&self) -> String {
        if self.a == u8::max_value() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<(u8, u8, u8)> for RGBAColour {
    fn from(rgb: (u8, u8, u8)) -> RGBAColour {
        RGBAColour::opaque(rgb.0, rgb.1, rgb.2)
    }
}

impl From<[u8; 3]> for RGBAColour {
    fn from(rgb: [u8; 3]) -> RGBAColour {
        RGBAColour::opaque(rgb[0], rgb[1], rgb[2])
    }
}

impl FromStr for RGBAColour {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<RGBAColour> {
        RGBAColour::from_hex_code(s.trim())
    }
}

/// The structured rendering used when a colour has no name.
impl fmt::Display for RGBAColour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RGBA{{R:{:#04x}, G:{:#04x}, B:{:#04x}, A:{:#04x}}}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let c = RGBAColour::from_hex_code("#1a2B3c").unwrap();
        assert_eq!(c, RGBAColour::new(0x1a, 0x2b, 0x3c, 0xff));
        let c = RGBAColour::from_hex_code("#1a2b3c80").unwrap();
        assert_eq!(c.a, 0x80);
        assert_eq!(c.to_hex_code(), "#1A2B3C80");
        assert_eq!("  #ffffff ".parse::<RGBAColour>().unwrap(), RGBAColour::opaque(255, 255, 255));
        // errors
        for bad in &["", "ffffff", "#fff", "#fffffff", "#gg0000", "#00000000ff"] {
            assert_eq!(
                RGBAColour::from_hex_code(bad),
                Err(ColourError::BadHexCode(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_packed_key_ignores_alpha() {
        let solid = RGBAColour::new(0x12, 0x34, 0x56, 0xff);
        let ghost = RGBAColour::new(0x12, 0x34, 0x56, 0x00);
        assert_eq!(solid.packed_key(), 0x123456);
        assert_eq!(solid.packed_key(), ghost.packed_key());
        assert_eq!(RGBAColour::from_packed_key(0x123456), solid);
    }

    #[test]
    fn test_display_fallback() {
        assert_eq!(
            RGBAColour::new(0x01, 0x02, 0x03, 0xff).to_string(),
            "RGBA{R:0x01, G:0x02, B:0x03, A:0xff}"
        );
        assert_eq!(
            RGBAColour::new(0xab, 0, 0x10, 0).to_string(),
            "RGBA{R:0xab, G:0x00, B:0x10, A:0x00}"
        );
    }
}
