//! Making new colours: evenly spaced steps between two colours, and random sets of distinct colours.
//!
//! Steps between two colours are taken in HSL, not RGB. Interpolating in RGB runs through muddy greys
//! whenever the endpoints are far apart in hue, whereas HSL keeps the saturation up and walks round
//! the hue circle instead. Lightness and saturation are interpolated linearly, as is alpha, which HSL
//! does not have.

use std::collections::HashSet;

use rand::Rng;

use crate::colour::RGBAColour;
use crate::colours::{to_hsl_and_hsv, HSLColour};
use crate::consts::MAX_ATTEMPTS;
use crate::error::{ColourError, Result};

/// Returns up to `n` colours running from `lower` to `upper`, both included.
///
/// - If `lower == upper` the answer is just `[lower]`, whatever `n` is.
/// - If `n == 1` the answer is the midpoint of the two, channel by channel, rounded down.
/// - If `n == 2` the answer is `[lower, upper]`.
/// - Otherwise the `n - 2` colours in between are evenly spaced in HSL. A step that comes out the
///   same as the one before it is dropped, so the list can be shorter than `n` when the endpoints are
///   close together. The list always starts with `lower` and ends with `upper`.
///
/// # Errors
/// [`ColourError::BadColourCount`] if `n` is 0 or less.
///
/// # Example
/// ```
/// # use colourmatch::prelude::*;
/// let black = RGBAColour::opaque(0, 0, 0);
/// let white = RGBAColour::opaque(255, 255, 255);
/// let greys = make_colours_between(3, black, white).unwrap();
/// assert_eq!(greys, vec![black, RGBAColour::opaque(128, 128, 128), white]);
/// ```
pub fn make_colours_between(
    n: isize,
    lower: RGBAColour,
    upper: RGBAColour,
) -> Result<Vec<RGBAColour>> {
    if n <= 0 {
        return Err(ColourError::BadColourCount(n));
    }
    if lower == upper {
        return Ok(vec![lower]);
    }
    if n == 1 {
        let mid = |a: u8, b: u8| ((u16::from(a) + u16::from(b)) / 2) as u8;
        return Ok(vec![RGBAColour::new(
            mid(lower.r, upper.r),
            mid(lower.g, upper.g),
            mid(lower.b, upper.b),
            mid(lower.a, upper.a),
        )]);
    }
    if n == 2 {
        return Ok(vec![lower, upper]);
    }

    let (start, _) = to_hsl_and_hsv(lower);
    let (end, _) = to_hsl_and_hsv(upper);
    let steps = (n - 1) as f64;
    let lerp = |from: f64, to: f64, i: f64| from + (to - from) * i / steps;

    let mut colours = vec![lower];
    for i in 1..(n - 1) {
        let i = i as f64;
        let mut next = HSLColour {
            h: lerp(start.h, end.h, i),
            s: lerp(start.s, end.s, i),
            l: lerp(start.l, end.l, i),
        }
        .to_rgba();
        next.a = lerp(f64::from(lower.a), f64::from(upper.a), i).round() as u8;

        // at high resolution neighbouring steps can round to the same colour
        if colours.last() != Some(&next) {
            colours.push(next);
        }
    }
    if colours.last() != Some(&upper) {
        colours.push(upper);
    }
    Ok(colours)
}

/// Returns up to `count` distinct random opaque colours, drawn from the thread-local generator. See
/// [`make_colours_with`].
///
/// # Errors
/// [`ColourError::BadColourCount`] if `count` is 0 or less.
pub fn make_colours(count: isize) -> Result<Vec<RGBAColour>> {
    make_colours_with(&mut rand::thread_rng(), count)
}

/// Returns up to `count` distinct random opaque colours, with red, green and blue each drawn
/// uniformly from `rng`.
///
/// Each colour gets [`MAX_ATTEMPTS`] draws to find one that has not been produced yet. If all of
/// them collide, generation stops there and the colours found so far are returned. This is not an
/// error: the list is simply shorter than `count`, which becomes more likely as `count` grows.
///
/// # Errors
/// [`ColourError::BadColourCount`] if `count` is 0 or less.
pub fn make_colours_with<R: Rng + ?Sized>(rng: &mut R, count: isize) -> Result<Vec<RGBAColour>> {
    if count <= 0 {
        return Err(ColourError::BadColourCount(count));
    }

    let wanted = count as usize;
    let mut colours = Vec::with_capacity(wanted);
    let mut seen = HashSet::with_capacity(wanted);
    'slots: for _ in 0..wanted {
        for _ in 0..MAX_ATTEMPTS {
            let c = RGBAColour::opaque(rng.gen(), rng.gen(), rng.gen());
            if seen.insert(c) {
                colours.push(c);
                continue 'slots;
            }
        }
        tracing::debug!(
            wanted,
            made = colours.len(),
            "random colour generation stopped after repeated collisions"
        );
        break;
    }
    Ok(colours)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bad_counts() {
        let c = RGBAColour::opaque(1, 2, 3);
        let d = RGBAColour::opaque(4, 5, 6);
        assert_eq!(make_colours_between(0, c, d), Err(ColourError::BadColourCount(0)));
        assert_eq!(make_colours_between(-3, c, d), Err(ColourError::BadColourCount(-3)));
        assert_eq!(make_colours(0), Err(ColourError::BadColourCount(0)));
        assert_eq!(make_colours(-1), Err(ColourError::BadColourCount(-1)));
    }

    #[test]
    fn test_small_counts() {
        let lower = RGBAColour::new(0, 10, 255, 0);
        let upper = RGBAColour::new(255, 11, 0, 255);
        assert_eq!(make_colours_between(5, lower, lower), Ok(vec![lower]));
        assert_eq!(
            make_colours_between(1, lower, upper),
            Ok(vec![RGBAColour::new(127, 10, 127, 127)])
        );
        assert_eq!(make_colours_between(2, lower, upper), Ok(vec![lower, upper]));
    }

    #[test]
    fn test_between_is_anchored_and_has_no_repeats() {
        let pairs = [
            (RGBAColour::opaque(0, 0, 0), RGBAColour::opaque(255, 255, 255)),
            (RGBAColour::opaque(255, 0, 0), RGBAColour::opaque(0, 0, 255)),
            (RGBAColour::new(10, 200, 30, 0), RGBAColour::opaque(200, 10, 30)),
            (RGBAColour::opaque(100, 100, 100), RGBAColour::opaque(101, 101, 101)),
        ];
        for &(lower, upper) in pairs.iter() {
            for &n in [3, 10, 50, 300].iter() {
                let cs = make_colours_between(n, lower, upper).unwrap();
                assert!(cs.len() <= n as usize);
                assert_eq!(cs[0], lower);
                assert_eq!(*cs.last().unwrap(), upper);
                assert!(cs.windows(2).all(|w| w[0] != w[1]), "{} to {}", lower, upper);
            }
        }
        // one unit apart leaves no room for anything in between
        let close = make_colours_between(
            300,
            RGBAColour::opaque(100, 100, 100),
            RGBAColour::opaque(101, 101, 101),
        )
        .unwrap();
        assert_eq!(close.len(), 2);
    }

    #[test]
    fn test_alpha_is_interpolated() {
        let lower = RGBAColour::new(0, 0, 0, 0);
        let upper = RGBAColour::new(0, 0, 0xff, 0xff);
        let cs = make_colours_between(3, lower, upper).unwrap();
        assert_eq!(cs.len(), 3);
        assert_eq!(cs[1].a, 128);
    }

    #[test]
    fn test_make_colours_are_distinct_and_opaque() {
        let mut rng = StdRng::seed_from_u64(11);
        let cs = make_colours_with(&mut rng, 500).unwrap();
        assert_eq!(cs.len(), 500);
        let distinct: HashSet<_> = cs.iter().collect();
        assert_eq!(distinct.len(), cs.len());
        assert!(cs.iter().all(|c| c.a == 0xff));

        assert_eq!(make_colours(20).unwrap().len(), 20);
    }

    #[test]
    fn test_make_colours_is_reproducible() {
        let a = make_colours_with(&mut StdRng::seed_from_u64(5), 10).unwrap();
        let b = make_colours_with(&mut StdRng::seed_from_u64(5), 10).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_collisions_end_generation_early() {
        // a generator that never changes produces the same colour every time
        let mut rng = StepRng::new(0, 0);
        let cs = make_colours_with(&mut rng, 10).unwrap();
        assert_eq!(cs, vec![RGBAColour::opaque(0, 0, 0)]);
    }
}
