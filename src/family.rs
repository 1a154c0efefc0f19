//! This file defines [`Family`], the closed set of colour-name collections the crate knows about,
//! together with the metadata attached to each: a short label for display, a description, and the
//! literal name of the variant. Because the set is an enum, an unknown family can only arise from
//! text, and every text-to-family conversion here returns an error rather than panicking.

use std::fmt;
use std::str::FromStr;

use crate::colour::RGBAColour;
use crate::error::{ColourError, Result};
use crate::tables;

/// A collection of colour names. Each family is an independent naming scheme: the same colour may
/// be called different things in different families, and a family may have several names
/// (synonyms) for one colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Family {
    /// The sixteen HTML 4.01 colour names.
    Web,
    /// The CGA palette: the Web colours under the names IBM gave them.
    Cga,
    /// The colour keywords supported by every browser.
    Html,
    /// The X11 `rgb.txt` names.
    X11,
    /// Pantone colours of the year.
    Pantone,
    /// Farrow & Ball paint colours. Only searched when asked for.
    FarrowAndBall,
    /// Crayola crayon colours. Only searched when asked for.
    Crayola,
}

impl Family {
    /// Every family, in declaration order.
    pub const ALL: [Family; 7] = [
        Family::Web,
        Family::Cga,
        Family::Html,
        Family::X11,
        Family::Pantone,
        Family::FarrowAndBall,
        Family::Crayola,
    ];

    /// The families searched when no family list is given, in search order.
    pub const STANDARD: [Family; 5] = [
        Family::Web,
        Family::Cga,
        Family::Html,
        Family::X11,
        Family::Pantone,
    ];

    /// The families that are never searched unless a caller names them.
    pub const OPT_IN: [Family; 2] = [Family::FarrowAndBall, Family::Crayola];

    /// The short display label, as used in composite descriptions such as `silver (Web and HTML)`.
    pub fn label(self) -> &'static str {
        match self {
            Family::Web => "Web",
            Family::Cga => "CGA",
            Family::Html => "HTML",
            Family::X11 => "X11",
            Family::Pantone => "Pantone",
            Family::FarrowAndBall => "FarrowAndBall",
            Family::Crayola => "Crayola",
        }
    }

    /// The label in lower case, the form used when families are typed in by people.
    pub fn name(self) -> String {
        self.label().to_lowercase()
    }

    /// The name of the constant this family was known by in older releases, e.g. `"WebColours"`.
    pub fn literal(self) -> &'static str {
        match self {
            Family::Web => "WebColours",
            Family::Cga => "CGAColours",
            Family::Html => "HTMLColours",
            Family::X11 => "X11Colours",
            Family::Pantone => "PantoneColours",
            Family::FarrowAndBall => "FarrowAndBallColours",
            Family::Crayola => "CrayolaColours",
        }
    }

    /// A sentence saying where the names come from.
    pub fn description(self) -> &'static str {
        match self {
            Family::Web => "colour names as defined in the HTML 4.01 specification",
            Family::Cga => "CGA colours - the Web colours but with different names",
            Family::Html => "HTML colours - colours supported by all browsers",
            Family::X11 => "colour names from the X11 rgb.txt file",
            Family::Pantone => "Pantone colours of the year",
            Family::FarrowAndBall => "Farrow And Ball paint colours",
            Family::Crayola => "colour names from the Crayola crayon range",
        }
    }

    /// Whether this family is part of the default search order.
    pub fn is_standard(self) -> bool {
        Family::STANDARD.contains(&self)
    }

    /// Looks a family up by its literal, the inverse of [`Family::literal`].
    ///
    /// # Errors
    /// [`ColourError::BadFamily`] if no family has that literal.
    pub fn from_literal(literal: &str) -> Result<Family> {
        Family::ALL
            .iter()
            .cloned()
            .find(|f| f.literal() == literal)
            .ok_or_else(|| ColourError::unrecognised_family(literal))
    }

    /// The CGA palette entry with the given colour number (0 to 15).
    ///
    /// # Errors
    /// [`ColourError::BadCgaIndex`] for any number past the end of the palette.
    pub fn cga_colour(index: usize) -> Result<RGBAColour> {
        tables::table(Family::Cga)
            .get(index)
            .map(|&(_, rgb)| RGBAColour::from(rgb))
            .ok_or(ColourError::BadCgaIndex(index))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the label or name in any case (`"X11"`, `"x11"`, `"farrowandball"`), or the literal.
impl FromStr for Family {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Family> {
        let wanted = s.trim().to_lowercase();
        Family::ALL
            .iter()
            .cloned()
            .find(|f| f.name() == wanted || f.literal().to_lowercase() == wanted)
            .ok_or_else(|| ColourError::unrecognised_family(s))
    }
}
