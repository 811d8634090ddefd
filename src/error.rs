//! Captured failure descriptions.
//!
//! [`ErrorInfo`] is the payload of [`Outcome::Failed`](crate::Outcome::Failed). It always
//! carries a human-readable message and may carry the original error as its cause, which
//! is exposed through [`std::error::Error::source`].

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

type Cause = Arc<dyn Error + Send + Sync + 'static>;

const NON_STRING_PANIC: &str = "panic with a non-string payload";

/// A captured failure: a message plus an optional underlying cause.
///
/// Two `ErrorInfo`s are equal when their messages are equal. Causes take no part in
/// comparison.
///
/// # Examples
///
/// ```rust
/// use outcome::ErrorInfo;
///
/// let err = ErrorInfo::new("no such customer");
/// assert_eq!(err.message(), "no such customer");
/// assert_eq!(err.to_string(), "no such customer");
/// assert!(err.cause().is_none());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorInfo {
    message: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    cause: Option<Cause>,
}

impl ErrorInfo {
    /// Create an error with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Wrap an existing error, keeping it as the cause and using its `Display` as the
    /// message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome::ErrorInfo;
    ///
    /// let parse_err = "x1".parse::<i32>().unwrap_err();
    /// let err = ErrorInfo::from_error(parse_err);
    /// assert_eq!(err.message(), "invalid digit found in string");
    /// assert!(err.cause().is_some());
    /// ```
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: error.to_string(),
            cause: Some(Arc::new(error)),
        }
    }

    /// Build an error from a panic payload as returned by [`std::panic::catch_unwind`].
    ///
    /// `&str` and `String` payloads become the message. A payload that is itself an
    /// `ErrorInfo` is returned unchanged.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<ErrorInfo>() {
            Ok(info) => return *info,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(message) => return Self::new(*message),
            Err(payload) => payload,
        };
        match payload.downcast::<&'static str>() {
            Ok(message) => Self::new(*message),
            Err(_) => Self::new(NON_STRING_PANIC),
        }
    }

    /// Attach a cause, replacing any existing one. The message is left as is.
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// The human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying error, if one was captured.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Try to view the cause as a concrete error type.
    ///
    /// ```rust
    /// use outcome::ErrorInfo;
    /// use std::num::ParseIntError;
    ///
    /// let err = ErrorInfo::from_error("".parse::<u8>().unwrap_err());
    /// assert!(err.downcast_cause::<ParseIntError>().is_some());
    /// assert!(err.downcast_cause::<std::fmt::Error>().is_none());
    /// ```
    pub fn downcast_cause<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.cause.as_deref()?.downcast_ref::<E>()
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// Written by hand so `source()` yields the wrapped error itself, not its `Arc`.
impl Error for ErrorInfo {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

impl fmt::Debug for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ErrorInfo");
        s.field("message", &self.message);
        if let Some(cause) = &self.cause {
            s.field("cause", cause);
        }
        s.finish()
    }
}

impl PartialEq for ErrorInfo {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for ErrorInfo {}

impl From<String> for ErrorInfo {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ErrorInfo {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct DiskError;

    #[test]
    fn test_new_has_no_cause() {
        let err = ErrorInfo::new("nothing to see");
        assert_eq!(err.message(), "nothing to see");
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_error_keeps_cause() {
        let err = ErrorInfo::from_error(DiskError);
        assert_eq!(err.message(), "disk on fire");
        assert!(err.downcast_cause::<DiskError>().is_some());
        assert_eq!(err.source().map(ToString::to_string), Some("disk on fire".to_string()));
    }

    #[test]
    fn test_source_downcasts_to_original_error() {
        let err = ErrorInfo::from_error(DiskError);
        let source = err.source().expect("cause should be exposed as source");
        assert!(source.downcast_ref::<DiskError>().is_some());

        let wrapped = ErrorInfo::new("could not load pets").with_cause(DiskError);
        assert!(wrapped.source().and_then(|s| s.downcast_ref::<DiskError>()).is_some());
        assert!(ErrorInfo::new("plain").source().is_none());
    }

    #[test]
    fn test_with_cause_keeps_message() {
        let err = ErrorInfo::new("could not load pets").with_cause(DiskError);
        assert_eq!(err.to_string(), "could not load pets");
        assert!(err.downcast_cause::<DiskError>().is_some());
    }

    #[test]
    fn test_from_panic_payloads() {
        assert_eq!(ErrorInfo::from_panic(Box::new("static")).message(), "static");
        assert_eq!(ErrorInfo::from_panic(Box::new(String::from("owned"))).message(), "owned");
        assert_eq!(ErrorInfo::from_panic(Box::new(17_u32)).message(), NON_STRING_PANIC);

        let original = ErrorInfo::new("typed").with_cause(DiskError);
        let recovered = ErrorInfo::from_panic(Box::new(original));
        assert_eq!(recovered.message(), "typed");
        assert!(recovered.downcast_cause::<DiskError>().is_some());
    }

    #[test]
    fn test_equality_ignores_cause() {
        let a = ErrorInfo::new("disk on fire");
        let b = ErrorInfo::from_error(DiskError);
        assert_eq!(a, b);
        assert_ne!(a, ErrorInfo::new("other"));
    }

    #[test]
    fn test_clone_shares_cause() {
        let err = ErrorInfo::from_error(DiskError);
        let copy = err.clone();
        assert!(copy.downcast_cause::<DiskError>().is_some());
        assert_eq!(err, copy);
    }

    #[test]
    fn test_debug_includes_cause_only_when_present() {
        let plain = format!("{:?}", ErrorInfo::new("m"));
        assert_eq!(plain, r#"ErrorInfo { message: "m" }"#);

        let caused = format!("{:?}", ErrorInfo::from_error(DiskError));
        assert!(caused.contains("cause: DiskError"));
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorInfo>();
    }
}
