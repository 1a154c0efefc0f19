//! Turning search results into words. Within a family a colour may have several names (X11 calls
//! pure black `black`, `gray0` and `grey0`), so one is picked as the canonical name. Across families
//! the canonical names are then grouped, so that a colour every family agrees on gets a bare name
//! and a colour the families disagree on gets each name qualified by the families that use it:
//! `silver (Web and HTML) or light gray (CGA)`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::colour::RGBAColour;
use crate::error::Result;
use crate::family::Family;
use crate::index::ExactIndex;
use crate::registry::Registry;
use crate::search::Candidate;
use crate::text::{family_list, join};

/// A canonical name together with every family that gives it to the colour being described.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// The name.
    pub name: String,
    /// The families using it, shortest label first and then alphabetically.
    pub families: Vec<Family>,
}

fn has_digits(name: &str) -> bool {
    name.chars().any(|c| c.is_ascii_digit())
}

/// Picks between two names for the same colour: the shorter one, then the one without digits, then
/// the one that sorts first. The choice does not depend on argument order.
///
/// # Example
/// ```
/// # use colourmatch::naming::preferred_name;
/// assert_eq!(preferred_name("grey0", "black"), "black");
/// assert_eq!(preferred_name("grey1", "gray1"), "gray1");
/// assert_eq!(preferred_name("dark green", "darkgreen"), "darkgreen");
/// ```
pub fn preferred_name<'a>(a: &'a str, b: &'a str) -> &'a str {
    let order = a
        .len()
        .cmp(&b.len())
        .then(has_digits(a).cmp(&has_digits(b)))
        .then(a.cmp(b));
    match order {
        Ordering::Greater => b,
        _ => a,
    }
}

/// The preferred name out of a whole list of synonyms, or `None` for an empty list.
pub fn canonical_name<S: AsRef<str>>(names: &[S]) -> Option<&str> {
    names
        .iter()
        .map(|n| n.as_ref())
        .fold(None, |best, n| match best {
            None => Some(n),
            Some(b) => Some(preferred_name(b, n)),
        })
}

/// Groups the canonical names of `candidates` by name. Names used by more families come first, then
/// shorter names, then alphabetical order.
pub fn qualified_names(candidates: &[Candidate]) -> Vec<QualifiedName> {
    let mut by_name: BTreeMap<&str, Vec<Family>> = BTreeMap::new();
    for c in candidates {
        if let Some(name) = canonical_name(&c.names) {
            let families = by_name.entry(name).or_insert_with(Vec::new);
            if !families.contains(&c.family) {
                families.push(c.family);
            }
        }
    }

    let mut groups: Vec<QualifiedName> = by_name
        .into_iter()
        .map(|(name, mut families)| {
            families.sort_by(|a, b| {
                a.label()
                    .len()
                    .cmp(&b.label().len())
                    .then(a.label().cmp(b.label()))
            });
            QualifiedName {
                name: name.to_string(),
                families,
            }
        })
        .collect();
    groups.sort_by(|a, b| {
        b.families
            .len()
            .cmp(&a.families.len())
            .then(a.name.len().cmp(&b.name.len()))
            .then(a.name.cmp(&b.name))
    });
    groups
}

impl Registry {
    /// Describes `colour` using the exact matches in `families`.
    ///
    /// - No match gives the channel values, e.g. `RGBA{R:0x01, G:0x02, B:0x03, A:0xff}`.
    /// - If every matching family uses the same canonical name, that name is returned bare.
    /// - Otherwise each name is followed by the families that use it, and the alternatives are
    ///   joined with "or": `lime (Web and HTML) or green (CGA and X11)`.
    ///
    /// # Errors
    /// [`ColourError::BadFamily`](crate::error::ColourError::BadFamily) as for
    /// [`Registry::closest_within`].
    pub fn describe_in(&self, colour: RGBAColour, families: &[Family]) -> Result<String> {
        let candidates = self.closest_within(colour, families, 0.0)?;
        Ok(render(colour, &candidates))
    }

    /// [`Registry::describe_in`] over this registry's standard families.
    pub fn describe(&self, colour: RGBAColour) -> Result<String> {
        self.describe_in(colour, self.standard_families())
    }
}

fn render(colour: RGBAColour, candidates: &[Candidate]) -> String {
    let groups = qualified_names(candidates);
    match groups.len() {
        0 => colour.to_string(),
        1 => groups[0].name.clone(),
        _ => {
            let parts: Vec<String> = groups
                .iter()
                .map(|g| format!("{} ({})", g.name, family_list(&g.families)))
                .collect();
            join(&parts, ", ", " or ")
        }
    }
}

/// Describes `colour` using the built-in names of the standard families. Never fails and never
/// returns an empty string.
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// assert_eq!(describe(RGBAColour::opaque(0, 0, 0xee)), "blue2");
/// assert_eq!(
///     describe(RGBAColour::opaque(0xc0, 0xc0, 0xc0)),
///     "silver (Web and HTML) or light gray (CGA)"
/// );
/// ```
pub fn describe(colour: RGBAColour) -> String {
    // a miss in the index means there is nothing exact to find
    if ExactIndex::builtin().lookup_colour(colour).is_none() {
        return colour.to_string();
    }
    Registry::builtin()
        .describe(colour)
        .unwrap_or_else(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn candidate(family: Family, names: &[&str]) -> Candidate {
        Candidate {
            distance: 0,
            family,
            colour: RGBAColour::opaque(0, 0, 0),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_preferred_name_is_symmetric() {
        let pairs = [
            ("red", "red1"),
            ("gray1", "grey1"),
            ("navy", "navyblue"),
            ("abc", "ab1"),
            ("same", "same"),
        ];
        for &(a, b) in pairs.iter() {
            assert_eq!(preferred_name(a, b), preferred_name(b, a));
        }
        assert_eq!(preferred_name("abc", "ab1"), "abc");
    }

    #[test]
    fn test_canonical_name_folds_the_whole_list() {
        let none: [&str; 0] = [];
        assert_eq!(canonical_name(&none), None);
        assert_eq!(canonical_name(&["gray0", "grey0", "black"]), Some("black"));
        assert_eq!(canonical_name(&["navy blue", "navyblue", "navy"]), Some("navy"));
    }

    #[test]
    fn test_qualified_names_ordering() {
        let cands = vec![
            candidate(Family::Web, &["lime"]),
            candidate(Family::Cga, &["green"]),
            candidate(Family::Html, &["lime"]),
            candidate(Family::X11, &["green", "green1"]),
            candidate(Family::Pantone, &["greenery"]),
        ];
        let groups = qualified_names(&cands);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["lime", "green", "greenery"]);
        assert_eq!(groups[0].families, vec![Family::Web, Family::Html]);
        assert_eq!(groups[1].families, vec![Family::Cga, Family::X11]);
    }

    #[test]
    fn test_render() {
        let black = RGBAColour::opaque(0, 0, 0);
        assert_eq!(
            render(RGBAColour::opaque(1, 2, 3), &[]),
            "RGBA{R:0x01, G:0x02, B:0x03, A:0xff}"
        );
        assert_eq!(render(black, &[candidate(Family::X11, &["grey0", "black"])]), "black");
        assert_eq!(
            render(
                black,
                &[candidate(Family::Web, &["black"]), candidate(Family::X11, &["gray0", "black"])]
            ),
            "black"
        );
        assert_eq!(
            render(
                black,
                &[
                    candidate(Family::Web, &["a"]),
                    candidate(Family::Cga, &["b"]),
                    candidate(Family::Html, &["c"]),
                ]
            ),
            "a (Web), b (CGA) or c (HTML)"
        );
    }

    #[test]
    fn test_describe_in_checks_families() {
        let reg = Registry::builtin();
        let c = RGBAColour::opaque(0, 0, 0);
        assert!(reg
            .describe_in(c, &[Family::X11, Family::X11])
            .unwrap_err()
            .is_bad_family());
        assert_eq!(reg.describe_in(c, &[Family::Crayola]), Ok("black".to_string()));
    }

    #[test]
    fn test_describe_builtin() {
        let cases = [
            ((0x00, 0x00, 0xee), "blue2"),
            ((0x03, 0x03, 0x03), "gray1"),
            ((0x00, 0x00, 0x00), "black"),
            ((0x00, 0x64, 0x00), "darkgreen"),
            ((0xc0, 0xc0, 0xc0), "silver (Web and HTML) or light gray (CGA)"),
            ((0x00, 0xff, 0x00), "lime (Web and HTML) or green (CGA and X11)"),
            ((0x01, 0x02, 0x03), "RGBA{R:0x01, G:0x02, B:0x03, A:0xff}"),
        ];
        for &(rgb, expected) in cases.iter() {
            let c = RGBAColour::from(rgb);
            assert_eq!(describe(c), expected);
            // the index shortcut never changes the answer
            assert_eq!(Registry::builtin().describe(c), Ok(expected.to_string()));
        }
    }
}
