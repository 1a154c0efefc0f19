//! The exact-match index: a hash map from a colour's packed key (`0xRRGGBB`) to every standard-family
//! name for that colour. Answering "does this colour have a name at all?" this way is a single
//! lookup instead of a scan over every table. Only the standard families are indexed, since the
//! opt-in families are only searched when a caller names them.

use std::collections::HashMap;

use crate::colour::RGBAColour;
use crate::family::Family;
use crate::registry::Registry;

/// One (key, family, name) triple out of an [`ExactIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The packed colour key, see [`RGBAColour::packed_key`].
    pub key: u32,
    /// The family the name is from.
    pub family: Family,
    /// The name.
    pub name: String,
}

/// A read-only map from packed colour key to the (family, name) pairs for that colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ExactIndex {
    names: HashMap<u32, Vec<(Family, String)>>,
}

lazy_static! {
    static ref BUILTIN_INDEX: ExactIndex = {
        let index = ExactIndex::build(Registry::builtin());
        tracing::debug!(keys = index.len(), "built the exact-match colour index");
        index
    };
}

impl ExactIndex {
    /// Indexes the standard families of `registry`. Standard families without a table are skipped.
    /// Within one key, pairs are in standard-family order and then table order.
    pub fn build(registry: &Registry) -> ExactIndex {
        let mut names: HashMap<u32, Vec<(Family, String)>> = HashMap::new();
        for &family in registry.standard_families() {
            for entry in registry.entries(family).unwrap_or(&[]) {
                names
                    .entry(entry.colour.packed_key())
                    .or_insert_with(Vec::new)
                    .push((family, entry.name.clone()));
            }
        }
        ExactIndex { names }
    }

    /// The index over the built-in registry, built on first use.
    pub fn builtin() -> &'static ExactIndex {
        &BUILTIN_INDEX
    }

    /// Every (family, name) pair for the colour with this packed key.
    pub fn lookup(&self, key: u32) -> Option<&[(Family, String)]> {
        self.names.get(&key).map(|v| v.as_slice())
    }

    /// [`ExactIndex::lookup`] by colour. Alpha is ignored.
    ///
    /// # Example
    /// ```
    /// # use colourmatch::prelude::*;
    /// let names = ExactIndex::builtin().lookup_colour(RGBAColour::new(0, 0, 0xee, 0)).unwrap();
    /// assert_eq!(names, &[(Family::X11, "blue2".to_string())][..]);
    /// ```
    pub fn lookup_colour(&self, colour: RGBAColour) -> Option<&[(Family, String)]> {
        self.lookup(colour.packed_key())
    }

    /// The number of distinct colours indexed.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing at all was indexed.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Every entry in the index, sorted by key, then family, then name.
    pub fn entries(&self) -> Vec<IndexEntry> {
        let mut entries: Vec<IndexEntry> = self
            .names
            .iter()
            .flat_map(|(&key, pairs)| {
                pairs.iter().map(move |(family, name)| IndexEntry {
                    key,
                    family: *family,
                    name: name.clone(),
                })
            })
            .collect();
        entries.sort();
        entries
    }
}
