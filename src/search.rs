//! This file implements the search engine: how far apart two colours are, and which named colours
//! are nearest to a target. "Distance" here is Euclidean distance in the RGB cube, which is not
//! perceptually accurate in any sense, but it is what the name tables were built against and it is
//! cheap. It is kept squared throughout so that no square roots are taken while sorting; take the
//! square root of [`Candidate::distance`] yourself if you need the true length.
//!
//! Every search goes through the same pipeline: validate the family list, sort the entries of the
//! requested families by (family, colour), merge each run that names the same colour in the same
//! family into a single [`Candidate`], then order the candidates with one composite comparator.
//! The ordering is total, so the same question always gets the same answer.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::colour::RGBAColour;
use crate::consts::MAX_PROXIMITY;
use crate::error::{ColourError, Result};
use crate::family::Family;
use crate::registry::{NamedColour, Registry};

/// A search result: one colour from one family, how far it is from the colour searched for, and
/// every name that family has for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// The squared Euclidean distance from the search colour.
    pub distance: u32,
    /// The family the names come from.
    pub family: Family,
    /// The named colour.
    pub colour: RGBAColour,
    /// The family's names for the colour, never empty, in table order.
    pub names: Vec<String>,
}

/// The squared Euclidean distance between two colours in the RGB cube: the sum of the squared
/// differences of R, G and B. Alpha is ignored. Symmetric, and zero for any colour with itself.
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// let black = RGBAColour::opaque(0, 0, 0);
/// let grey = RGBAColour::opaque(3, 4, 0);
/// assert_eq!(distance(black, grey), 25);
/// assert_eq!(distance(grey, black), 25);
/// ```
pub fn distance(a: RGBAColour, b: RGBAColour) -> u32 {
    let sq = |x: u8, y: u8| {
        let d = i32::from(x) - i32::from(y);
        (d * d) as u32
    };
    sq(a.r, b.r) + sq(a.g, b.g) + sq(a.b, b.b)
}

impl RGBAColour {
    /// See [`distance`].
    pub fn distance(&self, other: &RGBAColour) -> u32 {
        distance(*self, *other)
    }
}

/// One table entry with the position of its family in the caller's list.
#[derive(Debug, Clone, Copy)]
struct RankedEntry<'r> {
    rank: usize,
    entry: &'r NamedColour,
}

/// A merged search result, still carrying its family rank for sorting.
#[derive(Debug)]
struct RankedCandidate {
    rank: usize,
    candidate: Candidate,
}

/// The composite search order: distance, then family rank, then red, green and blue.
fn compare_candidates(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    let (ca, cb) = (a.candidate.colour, b.candidate.colour);
    a.candidate
        .distance
        .cmp(&b.candidate.distance)
        .then(a.rank.cmp(&b.rank))
        .then(ca.r.cmp(&cb.r))
        .then(ca.g.cmp(&cb.g))
        .then(ca.b.cmp(&cb.b))
}

/// Merges runs of entries with the same (family, colour) into one candidate each. The input must be
/// sorted so that such entries are adjacent.
struct Grouped<I: Iterator> {
    target: RGBAColour,
    entries: Peekable<I>,
}

impl<'r, I> Iterator for Grouped<I>
where
    I: Iterator<Item = RankedEntry<'r>>,
{
    type Item = RankedCandidate;

    fn next(&mut self) -> Option<RankedCandidate> {
        let first = self.entries.next()?;
        let key = (first.entry.family, first.entry.colour);
        let mut names = vec![first.entry.name.clone()];
        while let Some(next) = self.entries.peek() {
            if (next.entry.family, next.entry.colour) != key {
                break;
            }
            names.push(next.entry.name.clone());
            self.entries.next();
        }
        Some(RankedCandidate {
            rank: first.rank,
            candidate: Candidate {
                distance: distance(self.target, key.1),
                family: key.0,
                colour: key.1,
                names,
            },
        })
    }
}

impl Registry {
    /// Every (family, colour) group of the given families as a candidate, in search order. The
    /// families must already have passed [`Registry::check`].
    fn ranked_candidates(&self, target: RGBAColour, families: &[Family]) -> Result<Vec<Candidate>> {
        let mut entries = Vec::new();
        for (rank, &family) in families.iter().enumerate() {
            entries.extend(self.entries(family)?.iter().map(|entry| RankedEntry { rank, entry }));
        }
        // stable, so synonyms keep their table order within a group
        entries.sort_by_key(|e| (e.rank, e.entry.colour));

        let mut grouped: Vec<RankedCandidate> = Grouped {
            target,
            entries: entries.into_iter().peekable(),
        }
        .collect();
        grouped.sort_by(compare_candidates);
        Ok(grouped.into_iter().map(|rc| rc.candidate).collect())
    }

    /// Returns the colours from `families` whose Euclidean distance from `target` is at most
    /// `radius`, nearest first. A radius of 0 gives exact matches only. Ties on distance go to the
    /// family that comes first in `families`, and then to the lower R, G and B values.
    ///
    /// # Errors
    /// - [`ColourError::BadFamily`] if a family is repeated or has no table, checked before
    ///   anything else;
    /// - [`ColourError::BadColourProximity`] if `radius` is negative, NaN, or at least
    ///   `sqrt(3) * 255`, where every colour would match.
    pub fn closest_within(
        &self,
        target: RGBAColour,
        families: &[Family],
        radius: f64,
    ) -> Result<Vec<Candidate>> {
        self.check(families)?;
        if !(radius >= 0.0 && radius < MAX_PROXIMITY) {
            return Err(ColourError::BadColourProximity(radius));
        }

        // compare squares so there are no square roots in the loop
        let limit = radius * radius;
        let candidates: Vec<Candidate> = self
            .ranked_candidates(target, families)?
            .into_iter()
            .take_while(|c| f64::from(c.distance) <= limit)
            .collect();

        tracing::trace!(
            colour = %target,
            radius,
            found = candidates.len(),
            "closest_within"
        );
        Ok(candidates)
    }

    /// Returns the `n` colours from `families` nearest to `target`, in the same order as
    /// [`Registry::closest_within`]. There are fewer than `n` only if the families hold fewer than
    /// `n` distinct colours.
    ///
    /// # Errors
    /// - [`ColourError::BadFamily`] as for [`Registry::closest_within`];
    /// - [`ColourError::BadColourCount`] if `n` is negative. Zero is allowed and finds nothing.
    pub fn closest_n(
        &self,
        target: RGBAColour,
        families: &[Family],
        n: isize,
    ) -> Result<Vec<Candidate>> {
        self.check(families)?;
        if n < 0 {
            return Err(ColourError::BadColourCount(n));
        }
        if n == 0 {
            return Ok(vec![]);
        }

        let mut candidates = self.ranked_candidates(target, families)?;
        candidates.truncate(n as usize);

        tracing::trace!(colour = %target, n, found = candidates.len(), "closest_n");
        Ok(candidates)
    }
}

/// [`Registry::closest_within`] over the built-in registry's standard families.
pub fn closest_within(target: RGBAColour, radius: f64) -> Result<Vec<Candidate>> {
    let registry = Registry::builtin();
    registry.closest_within(target, registry.standard_families(), radius)
}

/// [`Registry::closest_n`] over the built-in registry's standard families.
pub fn closest_n(target: RGBAColour, n: isize) -> Result<Vec<Candidate>> {
    let registry = Registry::builtin();
    registry.closest_n(target, registry.standard_families(), n)
}
