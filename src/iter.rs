//! Working with sequences of outcomes.
//!
//! Collecting an iterator of [`Outcome<T>`] into an `Outcome<C>` stops at the first item
//! that is not `Present`, the same way collecting into `Option` or `Result` does:
//!
//! ```rust
//! use outcome::prelude::*;
//!
//! let all: Outcome<Vec<i32>> = vec![present(1), present(2)].into_iter().collect();
//! assert_eq!(all, present(vec![1, 2]));
//!
//! let gap: Outcome<Vec<i32>> = vec![present(1), empty(), failed("x")].into_iter().collect();
//! assert_eq!(gap, empty());
//! ```
//!
//! [`OutcomeIterExt`] adds adapters that keep going past non-present items instead.

use crate::error::ErrorInfo;
use crate::outcome::Outcome;

impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        // Outer `Some` marks an early stop; the inner value is the error, if any.
        let mut stop: Option<Option<ErrorInfo>> = None;
        let collected = iter
            .into_iter()
            .map_while(|item| match item {
                Outcome::Present(v) => Some(v),
                Outcome::Empty => {
                    stop = Some(None);
                    None
                }
                Outcome::Failed(e) => {
                    stop = Some(Some(e));
                    None
                }
            })
            .collect();

        match stop {
            None => Outcome::Present(collected),
            Some(None) => Outcome::Empty,
            Some(Some(e)) => Outcome::Failed(e),
        }
    }
}

/// Per-variant counts of a sequence of outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Number of `Present` items
    pub present: usize,
    /// Number of `Empty` items
    pub empty: usize,
    /// Number of `Failed` items
    pub failed: usize,
}

impl Tally {
    /// Number of items counted.
    pub fn total(&self) -> usize {
        self.present + self.empty + self.failed
    }
}

/// Iterator over the present values of a sequence of outcomes.
pub struct PresentValues<I> {
    inner: I,
}

impl<T, I> Iterator for PresentValues<I>
where
    I: Iterator<Item = Outcome<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.by_ref().find_map(Outcome::into_option)
    }
}

/// Iterator over the errors of a sequence of outcomes.
pub struct Failures<I> {
    inner: I,
}

impl<T, I> Iterator for Failures<I>
where
    I: Iterator<Item = Outcome<T>>,
{
    type Item = ErrorInfo;

    fn next(&mut self) -> Option<ErrorInfo> {
        self.inner.by_ref().find_map(|item| match item {
            Outcome::Failed(e) => Some(e),
            Outcome::Present(_) | Outcome::Empty => None,
        })
    }
}

/// Extension methods for iterators of [`Outcome`]s.
pub trait OutcomeIterExt<T>: Iterator<Item = Outcome<T>> + Sized {
    /// Yield only the present values, skipping `Empty` and `Failed` items.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let pets = vec![present("rex"), empty(), failed("lost"), present("tom")];
    /// let names: Vec<_> = pets.into_iter().present_values().collect();
    /// assert_eq!(names, vec!["rex", "tom"]);
    /// ```
    fn present_values(self) -> PresentValues<Self> {
        PresentValues { inner: self }
    }

    /// Yield the errors of `Failed` items.
    fn failures(self) -> Failures<Self> {
        Failures { inner: self }
    }

    /// Count the items of each variant.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let tally = vec![present(1), empty(), failed("x"), present(2)].into_iter().tally();
    /// assert_eq!((tally.present, tally.empty, tally.failed), (2, 1, 1));
    /// ```
    fn tally(self) -> Tally {
        self.fold(Tally::default(), |mut tally, item| {
            match item {
                Outcome::Present(_) => tally.present += 1,
                Outcome::Empty => tally.empty += 1,
                Outcome::Failed(_) => tally.failed += 1,
            }
            tally
        })
    }
}

impl<T, I> OutcomeIterExt<T> for I where I: Iterator<Item = Outcome<T>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{empty, failed, present};

    #[test]
    fn test_collect_all_present() {
        let out: Outcome<Vec<u8>> = (1..=3).map(present).collect();
        assert_eq!(out, present(vec![1, 2, 3]));
    }

    #[test]
    fn test_collect_empty_input_is_present() {
        let out: Outcome<Vec<u8>> = std::iter::empty::<Outcome<u8>>().collect();
        assert_eq!(out, present(vec![]));
    }

    #[test]
    fn test_collect_stops_at_first_failure() {
        let mut pulled = 0;
        let items = vec![present(1), failed("second"), failed("third"), present(4)];
        let out: Outcome<Vec<i32>> = items
            .into_iter()
            .inspect(|_| pulled += 1)
            .collect();
        assert_eq!(out, failed("second"));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_collect_stops_at_first_empty() {
        let items = vec![present(1), empty(), failed("later")];
        let out: Outcome<Vec<i32>> = items.into_iter().collect();
        assert_eq!(out, empty());
    }

    #[test]
    fn test_collect_into_other_containers() {
        let out: Outcome<String> = vec![present('o'), present('k')].into_iter().collect();
        assert_eq!(out, present("ok".to_string()));
    }

    #[test]
    fn test_failures() {
        let items = vec![failed::<i32>("a"), present(1), empty(), failed("b")];
        let messages: Vec<_> = items
            .into_iter()
            .failures()
            .map(|e| e.message().to_string())
            .collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn test_tally_total() {
        let tally = vec![empty::<()>(), empty(), present(())].into_iter().tally();
        assert_eq!(tally, Tally { present: 1, empty: 2, failed: 0 });
        assert_eq!(tally.total(), 3);
    }
}
