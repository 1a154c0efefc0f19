//! Colourmatch is a library for putting names to colours. Give it an RGB value and it will tell you
//! what the Web, CGA, HTML, X11 and Pantone naming schemes call it, find the nearest named colours
//! when nothing matches exactly, and describe the colour in a single line of English. Around that it
//! carries the colour arithmetic that naming needs: conversion to and from HSL and HSV, a rough
//! classification into hue buckets, contrasting colours, evenly spaced steps between two colours,
//! and sets of distinct random colours.
//!
//! Distances are plain Euclidean distances in the RGB cube. That is not how people see colour, but it
//! is what the name tables were drawn up against, and it makes every answer cheap and exactly
//! reproducible.
//!
//! # Example
//! ```
//! use colourmatch::prelude::*;
//!
//! assert_eq!(describe(RGBAColour::opaque(0x00, 0x64, 0x00)), "darkgreen");
//! assert_eq!(
//!     describe(RGBAColour::opaque(0x00, 0xff, 0x00)),
//!     "lime (Web and HTML) or green (CGA and X11)"
//! );
//!
//! let nearest = closest_n(RGBAColour::opaque(0x01, 0x02, 0x03), 1).unwrap();
//! assert_eq!(nearest[0].family, Family::X11);
//! assert_eq!(nearest[0].names, vec!["gray1", "grey1"]);
//! ```

#![doc(html_root_url = "https://docs.rs/colourmatch/1.0.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;

pub mod colour;
pub mod colours;
pub mod compare;
pub mod consts;
pub mod contrast;
pub mod error;
pub mod family;
pub mod generate;
pub mod index;
pub mod naming;
pub mod prelude;
pub mod registry;
pub mod rough;
pub mod search;
mod tables;
pub mod text;

pub use crate::colour::RGBAColour;
pub use crate::error::{ColourError, Result};
pub use crate::family::Family;
pub use crate::naming::describe;
pub use crate::search::{closest_n, closest_within, distance};
