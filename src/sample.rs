//! Random selection that reports an empty input as [`Outcome::Empty`].
//!
//! The random source is always passed in, so callers (and tests) decide whether it is
//! seeded.

use rand::Rng;

use crate::outcome::Outcome;

/// Pick a uniformly random element of `items`.
///
/// Returns `Empty` when `items` is empty.
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
/// use outcome::sample::pick;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let pets = ["rex", "tom", "kit"];
/// assert!(pick(&pets, &mut rng).present_value().is_some());
/// assert_eq!(pick::<&str, _>(&[], &mut rng), empty());
/// ```
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> Outcome<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        tracing::trace!("pick from empty slice");
        return Outcome::Empty;
    }
    let index = rng.gen_range(0..items.len());
    tracing::trace!(len = items.len(), index, "picked element");
    items.get(index).into()
}

/// Pick a random element and clone it out of the slice.
pub fn pick_cloned<T, R>(items: &[T], rng: &mut R) -> Outcome<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    pick(items, rng).map(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_empty_slice_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let items: [u8; 0] = [];
        assert!(pick(&items, &mut rng).is_empty());
        assert!(pick_cloned(&items, &mut rng).is_empty());
    }

    #[test]
    fn test_single_element_always_picked() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(pick(&["only"], &mut rng), Outcome::Present(&"only"));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let items: Vec<u32> = (0..100).collect();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick_cloned(&items, &mut a), pick_cloned(&items, &mut b));
        }
    }

    #[test]
    fn test_picks_cover_all_elements() {
        let items = ['a', 'b', 'c'];
        let mut rng = StdRng::seed_from_u64(9);
        let seen: HashSet<char> = (0..200)
            .map(|_| pick_cloned(&items, &mut rng).unwrap_present())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_accepts_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        assert!(pick(&[1, 2, 3], dyn_rng).is_present());
    }
}
