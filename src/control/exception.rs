//! The default payload of [`Try::Failure`](super::Try::Failure).
//!
//! An [`Exception`] is either a captured panic, a wrapped
//! [`std::error::Error`], or a plain message. Equality is structural on the
//! kind and the rendered message, so two failures built from the same
//! error compare equal.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Where an [`Exception`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExceptionKind {
    /// A panic captured by `Try::hold`, `Try::catching` or `Try::recover`.
    Panic,
    /// A wrapped `std::error::Error`.
    Error,
    /// A message without an underlying error value.
    Message,
}

/// A language-level error object carried by a failed `Try`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::{Exception, ExceptionKind};
///
/// let parse_error = "x".parse::<i32>().unwrap_err();
/// let exception = Exception::new(parse_error);
/// assert_eq!(exception.kind(), ExceptionKind::Error);
/// assert_eq!(exception.message(), "invalid digit found in string");
/// assert!(exception.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exception {
    kind: ExceptionKind,
    message: String,
    #[cfg_attr(feature = "serde", serde(skip))]
    error: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Exception {
    /// Wraps an error value.
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: ExceptionKind::Error,
            message: error.to_string(),
            error: Some(Arc::new(error)),
        }
    }

    /// Creates an exception from a message alone.
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            kind: ExceptionKind::Message,
            message: message.into(),
            error: None,
        }
    }

    /// Converts a payload returned by [`std::panic::catch_unwind`].
    ///
    /// `&str` and `String` payloads (everything `panic!` produces) keep their
    /// text; any other payload is described generically.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload.downcast_ref::<&'static str>().map_or_else(
                || "panic with a non-string payload".to_string(),
                |message| (*message).to_string(),
            ),
        };
        Self {
            kind: ExceptionKind::Panic,
            message,
            error: None,
        }
    }

    /// Returns where this exception came from.
    #[must_use]
    pub const fn kind(&self) -> ExceptionKind {
        self.kind
    }

    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this exception is a captured panic.
    #[must_use]
    pub fn is_panic(&self) -> bool {
        self.kind == ExceptionKind::Panic
    }

    /// Attempts to view the wrapped error as a concrete type.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.error.as_deref()?.downcast_ref::<T>()
    }
}

impl PartialEq for Exception {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Exception {}

impl fmt::Debug for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Exception")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

// `Display` already renders the wrapped error, so the chain continues at its cause.
impl Error for Exception {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.as_deref()?.source()
    }
}

impl From<&str> for Exception {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for Exception {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

static_assertions::assert_impl_all!(Exception: Send, Sync, std::error::Error);
