//! Combinators over plain functions.

use crate::outcome::Outcome;

/// Compose two functions left to right: the result computes `g(f(x))`.
///
/// ```rust
/// use outcome::func::compose;
///
/// let label = compose(|n: u32| n * 2, |n: u32| format!("#{n}"));
/// assert_eq!(label(21), "#42");
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Compose two outcome-returning functions: the result computes `f(x).bind(g)`.
///
/// ```rust
/// use outcome::func::kleisli;
/// use outcome::prelude::*;
///
/// let half = |v: i32| if v % 2 == 0 { present(v / 2) } else { empty() };
/// let quarter = kleisli(half, half);
/// assert_eq!(quarter(12), present(3));
/// assert_eq!(quarter(6), empty());
/// ```
pub fn kleisli<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> Outcome<C>
where
    F: Fn(A) -> Outcome<B>,
    G: Fn(B) -> Outcome<C>,
{
    move |a| f(a).bind(&g)
}

/// Feed one value to two functions and join their results.
///
/// ```rust
/// use outcome::func::fork;
///
/// let scores = [3, 9, 6];
/// let mean = fork(&scores, |s| s.iter().sum::<i32>(), |s| s.len() as i32, |sum, n| sum / n);
/// assert_eq!(mean, 6);
/// ```
pub fn fork<T, A, B, R, FL, FR, FJ>(value: T, left: FL, right: FR, join: FJ) -> R
where
    FL: FnOnce(&T) -> A,
    FR: FnOnce(&T) -> B,
    FJ: FnOnce(A, B) -> R,
{
    let a = left(&value);
    let b = right(&value);
    join(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{empty, failed, present};

    #[test]
    fn test_compose_order() {
        let add_then_double = compose(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!(add_then_double(3), 8);
    }

    #[test]
    fn test_kleisli_short_circuits_on_failure() {
        let parse = |s: &str| Outcome::from_result(s.parse::<i32>());
        let positive = |v: i32| if v > 0 { present(v) } else { empty() };
        let pipeline = kleisli(parse, positive);

        assert_eq!(pipeline("5"), present(5));
        assert_eq!(pipeline("-5"), empty());
        assert!(pipeline("five").is_failed());
    }

    #[test]
    fn test_kleisli_matches_chained_bind() {
        let f = |v: i32| if v < 100 { present(v + 1) } else { failed("too big") };
        let g = |v: i32| if v % 2 == 0 { present(v) } else { empty() };
        let composed = kleisli(f, g);

        for v in [1, 2, 99, 100] {
            assert_eq!(composed(v), f(v).bind(g));
        }
    }

    #[test]
    fn test_fork_borrows_value_once_per_branch() {
        let words = vec!["a", "bb", "ccc"];
        let (longest, count) = fork(
            words,
            |w| w.iter().map(|s| s.len()).max(),
            Vec::len,
            |l, c| (l, c),
        );
        assert_eq!(longest, Some(3));
        assert_eq!(count, 3);
    }
}
