//! This file implements the [`Registry`]: the set of name tables that searches, descriptions and the
//! exact-match index all read from. A registry is assembled once and never changes afterwards, which
//! is what lets the built-in one be shared between threads with no locking. The built-in registry is
//! constructed lazily on first use behind `lazy_static`'s once-guard; callers who want different
//! tables build their own with [`Registry::new`] and [`Registry::with_family`] and pass it in.

use std::collections::{BTreeMap, BTreeSet};

use crate::colour::RGBAColour;
use crate::error::{ColourError, Result};
use crate::family::Family;
use crate::tables;

/// One name for one colour in one family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColour {
    /// The family the name belongs to.
    pub family: Family,
    /// The name itself, e.g. `"dark green"`.
    pub name: String,
    /// The colour it names.
    pub colour: RGBAColour,
}

/// An immutable collection of colour-name tables, one per registered [`Family`], plus the order in
/// which families are searched by default.
#[derive(Debug, Clone, PartialEq)]
pub struct Registry {
    tables: BTreeMap<Family, Vec<NamedColour>>,
    standard: Vec<Family>,
}

lazy_static! {
    static ref BUILTIN: Registry = Registry::load_builtin();
}

impl Registry {
    /// The registry holding every built-in table, with [`Family::STANDARD`] as its default search
    /// order. Built once, on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    fn load_builtin() -> Registry {
        let registry = Family::ALL
            .iter()
            .fold(Registry::new(Family::STANDARD.to_vec()), |reg, &family| {
                let entries = tables::table(family)
                    .iter()
                    .map(|&(name, rgb)| (name, RGBAColour::from(rgb)));
                reg.with_family(family, entries)
            });
        tracing::debug!(
            families = registry.tables.len(),
            entries = registry.tables.values().map(Vec::len).sum::<usize>(),
            "built the colour-name registry"
        );
        registry
    }

    /// An empty registry that will search `standard` by default. Tables are added with
    /// [`Registry::with_family`].
    pub fn new(standard: Vec<Family>) -> Registry {
        Registry {
            tables: BTreeMap::new(),
            standard,
        }
    }

    /// Adds the names for one family, replacing any table the family already had. Entries keep the
    /// order they are given in.
    pub fn with_family<I, S>(mut self, family: Family, entries: I) -> Registry
    where
        I: IntoIterator<Item = (S, RGBAColour)>,
        S: Into<String>,
    {
        let table = entries
            .into_iter()
            .map(|(name, colour)| NamedColour {
                family,
                name: name.into(),
                colour,
            })
            .collect();
        self.tables.insert(family, table);
        self
    }

    /// Whether the registry has a table for `family`.
    pub fn contains(&self, family: Family) -> bool {
        self.tables.contains_key(&family)
    }

    /// Every family with a table, in declaration order.
    pub fn families(&self) -> Vec<Family> {
        self.tables.keys().cloned().collect()
    }

    /// The default search order.
    pub fn standard_families(&self) -> &[Family] {
        &self.standard
    }

    /// The registered families that are left out of the default search order.
    pub fn opt_in_families(&self) -> Vec<Family> {
        self.tables
            .keys()
            .cloned()
            .filter(|f| !self.standard.contains(f))
            .collect()
    }

    /// All the entries for one family.
    ///
    /// # Errors
    /// [`ColourError::BadFamily`] if the family has no table here.
    pub fn entries(&self, family: Family) -> Result<&[NamedColour]> {
        self.tables
            .get(&family)
            .map(|t| t.as_slice())
            .ok_or_else(|| ColourError::unknown_family(family))
    }

    /// Checks a caller-supplied family list: every family must have a table and none may appear
    /// twice. Nothing else in the crate looks at a family list before this has passed.
    ///
    /// # Errors
    /// [`ColourError::BadFamily`] describing the first problem found.
    pub fn check(&self, families: &[Family]) -> Result<()> {
        if let Some(&missing) = families.iter().find(|f| !self.contains(**f)) {
            return Err(ColourError::unknown_family(missing));
        }
        let mut positions: BTreeMap<Family, Vec<usize>> = BTreeMap::new();
        for (i, &f) in families.iter().enumerate() {
            positions.entry(f).or_insert_with(Vec::new).push(i);
        }
        match positions.iter().find(|&(_, idxs)| idxs.len() > 1) {
            Some((&f, idxs)) => Err(ColourError::duplicate_family(f, idxs)),
            None => Ok(()),
        }
    }

    /// The colour with the given name in `family`. If a family lists a name twice the first entry
    /// wins.
    ///
    /// # Errors
    /// [`ColourError::BadFamily`] for an unregistered family, [`ColourError::BadColourName`] if the
    /// name is not there.
    pub fn colour(&self, family: Family, name: &str) -> Result<RGBAColour> {
        self.entries(family)?
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.colour)
            .ok_or_else(|| ColourError::BadColourName(name.to_string()))
    }

    /// The colour with the given name in the first standard family that has it.
    ///
    /// # Errors
    /// [`ColourError::BadColourName`] if no standard family has the name.
    pub fn colour_in_standard(&self, name: &str) -> Result<RGBAColour> {
        self.standard
            .iter()
            .filter_map(|&f| self.colour(f, name).ok())
            .next()
            .ok_or_else(|| ColourError::BadColourName(name.to_string()))
    }

    /// The distinct names in `family`, sorted.
    ///
    /// # Errors
    /// [`ColourError::BadFamily`] if the family has no table here.
    pub fn colour_names(&self, family: Family) -> Result<Vec<String>> {
        let names: BTreeSet<&str> = self.entries(family)?.iter().map(|e| e.name.as_str()).collect();
        Ok(names.into_iter().map(String::from).collect())
    }

    /// The distinct colours across all of `families`, sorted by channel.
    ///
    /// # Errors
    /// [`ColourError::BadFamily`] as for [`Registry::check`].
    pub fn all_colours(&self, families: &[Family]) -> Result<Vec<RGBAColour>> {
        self.check(families)?;
        let mut colours = BTreeSet::new();
        for &f in families {
            colours.extend(self.entries(f)?.iter().map(|e| e.colour));
        }
        Ok(colours.into_iter().collect())
    }

    /// A map from family name (lower case) to a description that ends with the number of distinct
    /// colours in the family, suitable for listing the allowed values of a family option.
    pub fn allowed_families(&self) -> BTreeMap<String, String> {
        self.tables
            .iter()
            .map(|(&f, entries)| {
                let count = entries.iter().map(|e| e.colour).collect::<BTreeSet<_>>().len();
                (f.name(), format!("{} ({} colours)", f.description(), count))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_builtin_has_every_family() {
        let reg = Registry::builtin();
        assert_eq!(reg.families(), Family::ALL.to_vec());
        assert_eq!(reg.standard_families(), &Family::STANDARD[..]);
        assert_eq!(reg.opt_in_families(), Family::OPT_IN.to_vec());
        assert_eq!(reg.entries(Family::Web).unwrap().len(), 16);
        assert_eq!(reg.entries(Family::Cga).unwrap().len(), 16);
    }

    #[test]
    fn test_colour_by_name() {
        let reg = Registry::builtin();
        assert_eq!(reg.colour_in_standard("green"), Ok(RGBAColour::opaque(0, 0x80, 0)));
        assert_eq!(reg.colour_in_standard("lime"), Ok(RGBAColour::opaque(0, 0xff, 0)));
        assert_eq!(reg.colour(Family::Html, "lime"), Ok(RGBAColour::opaque(0, 0xff, 0)));
        assert_eq!(reg.colour(Family::Cga, "green"), Ok(RGBAColour::opaque(0, 0xff, 0)));
        assert_eq!(
            reg.colour(Family::Web, "No-Such-Colour"),
            Err(ColourError::BadColourName("No-Such-Colour".to_string()))
        );
        assert_eq!(
            reg.colour_in_standard("No-Such-Colour"),
            Err(ColourError::BadColourName("No-Such-Colour".to_string()))
        );
    }

    #[test]
    fn test_unregistered_family() {
        let reg = Registry::new(vec![Family::Web])
            .with_family(Family::Web, vec![("black", RGBAColour::opaque(0, 0, 0))]);
        assert!(reg.entries(Family::X11).unwrap_err().is_bad_family());
        assert!(reg.colour(Family::X11, "black").unwrap_err().is_bad_family());
        assert_eq!(reg.colour(Family::Web, "black"), Ok(RGBAColour::opaque(0, 0, 0)));
    }

    #[test]
    fn test_check() {
        let reg = Registry::builtin();
        assert_eq!(reg.check(&[]), Ok(()));
        assert_eq!(reg.check(&[Family::Web, Family::X11]), Ok(()));
        let err = reg.check(&[Family::Web, Family::X11, Family::Web]).unwrap_err();
        assert_eq!(err, ColourError::duplicate_family(Family::Web, &[0, 2]));
    }

    #[test]
    fn test_names_and_colours_are_distinct() {
        let reg = Registry::builtin();
        let names = reg.colour_names(Family::Html).unwrap();
        assert_eq!(names.len(), reg.entries(Family::Html).unwrap().len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));

        let colours = reg.all_colours(&[Family::Web, Family::Html]).unwrap();
        assert!(colours.len() <= 16 + reg.entries(Family::Html).unwrap().len());
        assert!(colours.windows(2).all(|w| w[0] < w[1]));
        // the Web colours are all HTML colours too
        assert_eq!(colours, reg.all_colours(&[Family::Html]).unwrap());
    }

    #[test]
    fn test_builtin_is_built_once_and_shared() {
        use crate::index::ExactIndex;
        use std::thread;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let reg = Registry::builtin();
                    let index = ExactIndex::builtin();
                    (
                        reg,
                        index,
                        reg.entries(Family::X11).unwrap().len(),
                        index.entries().len(),
                    )
                })
            })
            .collect();

        let reg = Registry::builtin();
        let index = ExactIndex::builtin();
        let x11_len = reg.entries(Family::X11).unwrap().len();
        let index_len = index.entries().len();
        for handle in handles {
            let (their_reg, their_index, seen_x11, seen_index) = handle.join().unwrap();
            assert!(std::ptr::eq(their_reg, reg));
            assert!(std::ptr::eq(their_index, index));
            assert_eq!(seen_x11, x11_len);
            assert_eq!(seen_index, index_len);
        }
    }

    #[test]
    fn test_allowed_families() {
        let allowed = Registry::builtin().allowed_families();
        assert_eq!(allowed.len(), Family::ALL.len());
        assert_eq!(
            allowed["web"],
            "colour names as defined in the HTML 4.01 specification (16 colours)"
        );
    }
}
