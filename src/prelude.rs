//! This module brings the most common colourmatch functionality under a single namespace, to prevent
//! excessive imports: the colour types, families and the registry, the search and naming functions,
//! and the colour generators. The tuning constants in [`consts`](crate::consts) and the lower-level
//! helpers in [`naming`](crate::naming) and [`text`](crate::text) are not included.

pub use crate::colour::RGBAColour;
pub use crate::colours::{to_hsl_and_hsv, HSLColour, HSVColour};
pub use crate::compare::{compare, within_dist};
pub use crate::contrast::contrast;
pub use crate::error::{ColourError, Result};
pub use crate::family::Family;
pub use crate::generate::{make_colours, make_colours_between, make_colours_with};
pub use crate::index::{ExactIndex, IndexEntry};
pub use crate::naming::{describe, qualified_names, QualifiedName};
pub use crate::registry::{NamedColour, Registry};
pub use crate::rough::{roughly, RoughColour};
pub use crate::search::{closest_n, closest_within, distance, Candidate};
