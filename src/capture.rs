//! Boundary adapters between panicking or `Result`-returning code and [`Outcome`].
//!
//! Every combinator that runs caller code goes through [`guard`], so a panic inside a
//! closure is turned into [`Outcome::Failed`] instead of unwinding through the caller.

use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::ErrorInfo;
use crate::outcome::Outcome;

/// Run `f`, converting a panic into an [`ErrorInfo`].
pub(crate) fn guard<R, F>(f: F) -> Result<R, ErrorInfo>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let error = ErrorInfo::from_panic(payload);
        tracing::debug!(error = %error, "captured panic as failed outcome");
        error
    })
}

/// Run a computation that may panic and capture its result.
///
/// A normal return becomes [`Outcome::Present`]; a panic becomes [`Outcome::Failed`]
/// carrying the panic message.
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// let ok = from_throwing(|| 6 * 7);
/// assert_eq!(ok, present(42));
///
/// let bad: Outcome<i32> = from_throwing(|| panic!("bad"));
/// assert_eq!(bad.error().map(ErrorInfo::message), Some("bad"));
/// ```
pub fn from_throwing<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match guard(f) {
        Ok(value) => Outcome::Present(value),
        Err(error) => Outcome::Failed(error),
    }
}

/// Run a computation returning `Result` and capture its result.
///
/// `Ok` becomes [`Outcome::Present`], `Err(e)` becomes [`Outcome::Failed`] with `e` kept
/// as the cause, and a panic becomes [`Outcome::Failed`] as in [`from_throwing`].
///
/// # Examples
///
/// ```rust
/// use outcome::prelude::*;
///
/// let parsed = from_fallible(|| "12".parse::<i32>());
/// assert_eq!(parsed, present(12));
///
/// let broken = from_fallible(|| "twelve".parse::<i32>());
/// assert!(broken.is_failed());
/// ```
pub fn from_fallible<T, E, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Error + Send + Sync + 'static,
{
    match guard(f) {
        Ok(result) => Outcome::from_result(result),
        Err(error) => Outcome::Failed(error),
    }
}

/// Convert an `Err` into an [`ErrorInfo`], logging the capture.
pub(crate) fn capture_error<E>(error: E) -> ErrorInfo
where
    E: Error + Send + Sync + 'static,
{
    let error = ErrorInfo::from_error(error);
    tracing::debug!(error = %error, "captured error as failed outcome");
    error
}
