use either::Either;
use std::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capture::{capture_error, guard};
use crate::error::ErrorInfo;

/// Result of a computation that may produce a value, legitimately produce nothing, or fail.
///
/// `Outcome` sits between [`Option`] and [`Result`]: absence (`Empty`) is an expected,
/// non-error state, while `Failed` records an error captured while computing. Combinators
/// that run caller code ([`map`](Outcome::map), [`bind`](Outcome::bind), ...) never unwind;
/// a panic inside the closure becomes `Failed`.
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// let doubled = present(42).map(|v| v * 2);
/// let line = doubled.fold(
///     |v| format!("value: {v}"),
///     || "no data".to_string(),
///     |e| format!("error: {e}"),
/// );
/// assert_eq!(line, "value: 84");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T> {
    /// A computed value is available
    Present(T),
    /// The computation produced no value
    Empty,
    /// The computation failed
    Failed(ErrorInfo),
}

/// Wrap a value as [`Outcome::Present`].
#[inline]
pub fn present<T>(value: T) -> Outcome<T> {
    Outcome::Present(value)
}

/// Create an [`Outcome::Empty`].
#[inline]
pub fn empty<T>() -> Outcome<T> {
    Outcome::Empty
}

/// Wrap an error description as [`Outcome::Failed`].
///
/// ```rust
/// use outcome::prelude::*;
///
/// let lookup: Outcome<u32> = failed("customer 7 not loaded");
/// assert_eq!(lookup.error().map(ErrorInfo::message), Some("customer 7 not loaded"));
/// ```
#[inline]
pub fn failed<T>(error: impl Into<ErrorInfo>) -> Outcome<T> {
    Outcome::Failed(error.into())
}

impl<T> Outcome<T> {
    /// Returns `true` if the outcome is `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert!(present(1).is_present());
    /// assert!(!empty::<i32>().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Outcome::Present(_))
    }

    /// Returns `true` if the outcome is `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    /// Returns `true` if the outcome is `Failed`.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Maps an `Outcome<T>` to `Outcome<U>` by applying a function to the present value.
    ///
    /// `Empty` and `Failed` pass through and `f` is not called. If `f` panics, the result
    /// is `Failed` with the panic message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(42).map(|v| v * 2), present(84));
    /// assert_eq!(empty::<i32>().map(|v| v * 2), empty());
    ///
    /// let boom = present(1).map(|_: i32| -> i32 { panic!("overflow") });
    /// assert_eq!(boom, failed("overflow"));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Present(v) => match guard(|| f(v)) {
                Ok(u) => Outcome::Present(u),
                Err(e) => Outcome::Failed(e),
            },
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Chains a computation that itself returns an `Outcome`.
    ///
    /// The outcome returned by `f` becomes the result as is. `Empty` and `Failed`
    /// short-circuit without calling `f`; a panic in `f` becomes `Failed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let scale = |v: i32| if v > 0 { present(v * 10) } else { empty() };
    /// assert_eq!(present(3).bind(scale), present(30));
    /// assert_eq!(present(-1).bind(scale), empty());
    /// ```
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Present(v) => guard(|| f(v)).unwrap_or_else(Outcome::Failed),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Alias for [`bind`](Outcome::bind).
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        self.bind(f)
    }

    /// Maps the present value through a function returning `Result`.
    ///
    /// `Err(e)` becomes `Failed` with `e` kept as the cause.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present("17").try_map(str::parse::<u8>), present(17));
    /// assert!(present("seventeen").try_map(str::parse::<u8>).is_failed());
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: Error + Send + Sync + 'static,
    {
        self.bind(|v| Outcome::from_result(f(v)))
    }

    /// Consumes the outcome by calling exactly one of the three handlers.
    ///
    /// This is the terminal projection of an `Outcome` chain. Panics raised by a handler
    /// belong to the caller and are not captured.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let describe = |o: Outcome<i32>| o.fold(|v| v.to_string(), || "-".into(), |e| e.to_string());
    /// assert_eq!(describe(present(5)), "5");
    /// assert_eq!(describe(empty()), "-");
    /// assert_eq!(describe(failed("bad")), "bad");
    /// ```
    pub fn fold<R, P, N, E>(self, on_present: P, on_empty: N, on_failed: E) -> R
    where
        P: FnOnce(T) -> R,
        N: FnOnce() -> R,
        E: FnOnce(ErrorInfo) -> R,
    {
        match self {
            Outcome::Present(v) => on_present(v),
            Outcome::Empty => on_empty(),
            Outcome::Failed(e) => on_failed(e),
        }
    }

    /// Keeps the present value only if it satisfies `predicate`, otherwise `Empty`.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(4).filter(|v| v % 2 == 0), present(4));
    /// assert_eq!(present(3).filter(|v| v % 2 == 0), empty());
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|v| if predicate(&v) { Outcome::Present(v) } else { Outcome::Empty })
    }

    /// Runs a side effect on the present value and returns the outcome unchanged.
    ///
    /// If the side effect panics, the result is `Failed`.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// let out = present(7).tap(|v| seen.push(*v)).map(|v| v + 1);
    /// assert_eq!(out, present(8));
    /// assert_eq!(seen, vec![7]);
    /// ```
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.bind(|v| {
            f(&v);
            Outcome::Present(v)
        })
    }

    /// Runs a side effect on the error of a `Failed` outcome and returns it unchanged.
    pub fn tap_failed<F>(self, f: F) -> Self
    where
        F: FnOnce(&ErrorInfo),
    {
        match self {
            Outcome::Failed(e) => match guard(|| f(&e)) {
                Ok(()) => Outcome::Failed(e),
                Err(panic) => Outcome::Failed(panic),
            },
            other => other,
        }
    }

    /// Replaces any non-present outcome with the one produced by `f`.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(empty().alt(|| present("fallback")), present("fallback"));
    /// assert_eq!(failed("x").alt(|| present("fallback")), present("fallback"));
    /// assert_eq!(present("first").alt(|| present("fallback")), present("first"));
    /// ```
    pub fn alt<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Outcome<T>,
    {
        match self {
            Outcome::Present(v) => Outcome::Present(v),
            Outcome::Empty | Outcome::Failed(_) => guard(f).unwrap_or_else(Outcome::Failed),
        }
    }

    /// Replaces `Empty` with the outcome produced by `f`. `Failed` passes through.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(empty().or_else(|| present(0)), present(0));
    /// assert_eq!(failed::<i32>("x").or_else(|| present(0)), failed("x"));
    /// ```
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Outcome<T>,
    {
        match self {
            Outcome::Empty => guard(f).unwrap_or_else(Outcome::Failed),
            other => other,
        }
    }

    /// Replaces `Failed` with the outcome produced from its error. `Empty` passes through.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// let recovered = failed::<usize>("timeout").recover(|e| present(e.message().len()));
    /// assert_eq!(recovered, present(7));
    /// ```
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorInfo) -> Outcome<T>,
    {
        match self {
            Outcome::Failed(e) => guard(|| f(e)).unwrap_or_else(Outcome::Failed),
            other => other,
        }
    }

    /// Combines two outcomes into an outcome of a pair.
    ///
    /// The first `Failed` (checking `self` first) wins, then `Empty`.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(1).zip(present('a')), present((1, 'a')));
    /// assert_eq!(present(1).zip(empty::<char>()), empty());
    /// assert_eq!(empty::<i32>().zip(failed::<char>("x")), failed("x"));
    /// ```
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Outcome::Present(a), Outcome::Present(b)) => Outcome::Present((a, b)),
            (Outcome::Failed(e), _) | (_, Outcome::Failed(e)) => Outcome::Failed(e),
            _ => Outcome::Empty,
        }
    }

    /// Converts from `&Outcome<T>` to `Outcome<&T>`.
    ///
    /// The error of a `Failed` outcome is cloned.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Present(v) => Outcome::Present(v),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(e) => Outcome::Failed(e.clone()),
        }
    }

    /// Returns a reference to the present value, if any.
    #[inline]
    pub const fn present_value(&self) -> Option<&T> {
        match self {
            Outcome::Present(v) => Some(v),
            Outcome::Empty | Outcome::Failed(_) => None,
        }
    }

    /// Returns a reference to the error of a `Failed` outcome, if any.
    #[inline]
    pub const fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Outcome::Failed(e) => Some(e),
            Outcome::Present(_) | Outcome::Empty => None,
        }
    }

    /// Returns the present value or a default.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(3).present_or(0), 3);
    /// assert_eq!(failed("x").present_or(0), 0);
    /// ```
    #[inline]
    pub fn present_or(self, default: T) -> T {
        match self {
            Outcome::Present(v) => v,
            Outcome::Empty | Outcome::Failed(_) => default,
        }
    }

    /// Returns the present value or computes one from a closure.
    #[inline]
    pub fn present_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Outcome::Present(v) => v,
            Outcome::Empty | Outcome::Failed(_) => f(),
        }
    }

    /// Returns the present value or `T::default()`.
    #[inline]
    pub fn present_or_default(self) -> T
    where
        T: Default,
    {
        self.present_or_else(T::default)
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the outcome is `Empty` or `Failed`.
    ///
    /// ```should_panic
    /// use outcome::prelude::*;
    ///
    /// empty::<i32>().expect_present("customer should have a pet");
    /// ```
    #[inline]
    pub fn expect_present(self, msg: &str) -> T {
        match self {
            Outcome::Present(v) => v,
            Outcome::Empty => panic!("{msg}"),
            Outcome::Failed(e) => panic!("{msg}: {e}"),
        }
    }

    /// Returns the present value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Empty` or `Failed`.
    #[inline]
    pub fn unwrap_present(self) -> T {
        match self {
            Outcome::Present(v) => v,
            Outcome::Empty => panic!("called `Outcome::unwrap_present()` on an `Empty` value"),
            Outcome::Failed(e) => {
                panic!("called `Outcome::unwrap_present()` on a `Failed` value: {e}")
            }
        }
    }

    /// Returns the error of a `Failed` outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Present` or `Empty`.
    #[inline]
    pub fn unwrap_failed(self) -> ErrorInfo {
        match self {
            Outcome::Failed(e) => e,
            Outcome::Present(_) => panic!("called `Outcome::unwrap_failed()` on a `Present` value"),
            Outcome::Empty => panic!("called `Outcome::unwrap_failed()` on an `Empty` value"),
        }
    }

    /// Converts into an `Option`, discarding the error of a `Failed` outcome.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Present(v) => Some(v),
            Outcome::Empty | Outcome::Failed(_) => None,
        }
    }

    /// Converts into a `Result` whose `Ok` side distinguishes present from empty.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(1).into_result(), Ok(Some(1)));
    /// assert_eq!(empty::<i32>().into_result(), Ok(None));
    /// assert!(failed::<i32>("x").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Option<T>, ErrorInfo> {
        match self {
            Outcome::Present(v) => Ok(Some(v)),
            Outcome::Empty => Ok(None),
            Outcome::Failed(e) => Err(e),
        }
    }

    /// Converts into an [`Either`] with the error on the left, or `None` when `Empty`.
    ///
    /// ```rust
    /// use either::Either;
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(2).into_either(), Some(Either::Right(2)));
    /// assert_eq!(empty::<i32>().into_either(), None);
    /// assert_eq!(failed::<i32>("x").into_either(), Some(Either::Left(ErrorInfo::new("x"))));
    /// ```
    #[inline]
    pub fn into_either(self) -> Option<Either<ErrorInfo, T>> {
        match self {
            Outcome::Present(v) => Some(Either::Right(v)),
            Outcome::Empty => None,
            Outcome::Failed(e) => Some(Either::Left(e)),
        }
    }

    /// Converts a `Result` whose error is any standard error, keeping it as the cause.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        match result {
            Ok(v) => Outcome::Present(v),
            Err(e) => Outcome::Failed(capture_error(e)),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    ///
    /// ```rust
    /// use outcome::prelude::*;
    ///
    /// assert_eq!(present(present(1)).flatten(), present(1));
    /// assert_eq!(present(empty::<i32>()).flatten(), empty());
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        match self {
            Outcome::Present(inner) => inner,
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(e) => Outcome::Failed(e),
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Empty
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Present(v),
            None => Outcome::Empty,
        }
    }
}

impl<T> From<Result<T, ErrorInfo>> for Outcome<T> {
    fn from(value: Result<T, ErrorInfo>) -> Self {
        match value {
            Ok(v) => Outcome::Present(v),
            Err(e) => Outcome::Failed(e),
        }
    }
}

impl<T> From<Either<ErrorInfo, T>> for Outcome<T> {
    fn from(value: Either<ErrorInfo, T>) -> Self {
        match value {
            Either::Left(e) => Outcome::Failed(e),
            Either::Right(v) => Outcome::Present(v),
        }
    }
}
