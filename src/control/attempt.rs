//! Try type - the outcome of a computation that may have failed.
//!
//! `Try<A, E>` is `Success(A)` or `Failure(E)`, where `E` defaults to
//! [`Exception`]. [`Try::hold`] and [`Try::catching`] are the boundary
//! between panics and the `Try` channel: a panic raised by the wrapped call
//! is captured and returned as a `Failure` instead of unwinding further.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Maybe, Try};
//!
//! let divide = Try::hold(|divisor: i32| 10 / divisor);
//!
//! let recovered = divide(0).recover(|_| Maybe::Some(0));
//! assert_eq!(recovered, Try::Success(0));
//!
//! let kept = divide(0).recover(|_| Maybe::Void);
//! assert!(kept.is_failure());
//! ```

use std::panic::{self, AssertUnwindSafe};

use super::either::Either;
use super::exception::Exception;
use super::maybe::Maybe;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A computation result: `Success(value)` or `Failure(error)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Try<A, E = Exception> {
    /// The computation failed.
    Failure(E),
    /// The computation produced a value.
    Success(A),
}

impl<A> Try<A, Exception> {
    /// Runs `function`, capturing a panic as `Failure`.
    ///
    /// The panic still goes through the installed panic hook first, so the
    /// default hook prints its report to stderr. Install a quieter hook with
    /// [`std::panic::set_hook`] if captured panics are part of normal flow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{ExceptionKind, Try};
    ///
    /// let failed = Try::<i32>::catching(|| panic!("no value"));
    /// let exception = failed.failed().get().unwrap();
    /// assert_eq!(exception.kind(), ExceptionKind::Panic);
    /// assert_eq!(exception.message(), "no value");
    /// ```
    pub fn catching<F>(function: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match panic::catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let exception = Exception::from_panic(payload);
                debug!(panic = %exception, "captured panic as Try::Failure");
                Self::Failure(exception)
            }
        }
    }

    /// Wraps `function` so that every call returns a `Try`.
    ///
    /// A normal return becomes `Success(result)`; a panic becomes
    /// `Failure(exception)`. Panics reach the panic hook as described on
    /// [`catching`](Self::catching).
    pub fn hold<X, F>(function: F) -> impl Fn(X) -> Self
    where
        F: Fn(X) -> A,
    {
        move |argument| Self::catching(|| function(argument))
    }
}

impl<A, E> Try<A, E> {
    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the successful value.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if this is a `Failure`.
    #[inline]
    pub fn get(self) -> Result<A, E> {
        match self {
            Self::Failure(error) => Err(error),
            Self::Success(value) => Ok(value),
        }
    }

    /// Returns the successful value, or computes one from `default`.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Failure(_) => default(),
            Self::Success(value) => value,
        }
    }

    /// Maps a successful value; a `Failure` is returned unchanged.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Failure(error) => Try::Failure(error),
            Self::Success(value) => Try::Success(function(value)),
        }
    }

    /// Returns `function(value)` for `Success(value)`; a `Failure` is returned unchanged.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> Try<B, E>,
    {
        match self {
            Self::Failure(error) => Try::Failure(error),
            Self::Success(value) => function(value),
        }
    }

    /// Applies the successful function to `value`.
    #[inline]
    pub fn ap<B, C>(self, value: Try<B, E>) -> Try<C, E>
    where
        A: FnOnce(B) -> C,
    {
        match (self, value) {
            (Self::Failure(error), _) | (Self::Success(_), Try::Failure(error)) => {
                Try::Failure(error)
            }
            (Self::Success(function), Try::Success(value)) => Try::Success(function(value)),
        }
    }

    /// Eliminates the `Try`: `failure(error)` or `success(value)`.
    #[inline]
    pub fn fold<T, F, S>(self, failure: F, success: S) -> T
    where
        F: FnOnce(E) -> T,
        S: FnOnce(A) -> T,
    {
        match self {
            Self::Failure(error) => failure(error),
            Self::Success(value) => success(value),
        }
    }

    /// Hands a `Failure` to `function`, whose result replaces it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Exception, Try};
    ///
    /// let failure: Try<i32> = Try::Failure(Exception::msg("first"));
    /// let retried = failure.recover_with(|_| Try::Failure(Exception::msg("second")));
    /// assert_eq!(retried, Try::Failure(Exception::msg("second")));
    /// ```
    #[inline]
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match self {
            Self::Failure(error) => function(error),
            success @ Self::Success(_) => success,
        }
    }

    /// `Success(value)` becomes `Right(value)`, `Failure(error)` becomes `Left(error)`.
    #[inline]
    pub fn to_either(self) -> Either<E, A> {
        match self {
            Self::Failure(error) => Either::Left(error),
            Self::Success(value) => Either::Right(value),
        }
    }

    /// `Success(value)` becomes `Some(value)`, `Failure` becomes `Void`.
    #[inline]
    pub fn to_option(self) -> Maybe<A> {
        match self {
            Self::Failure(_) => Maybe::Void,
            Self::Success(value) => Maybe::Some(value),
        }
    }

    /// `Failure(error)` becomes `Some(error)`, `Success` becomes `Void`.
    #[inline]
    pub fn failed(self) -> Maybe<E> {
        match self {
            Self::Failure(error) => Maybe::Some(error),
            Self::Success(_) => Maybe::Void,
        }
    }

    /// Borrows the contents.
    #[inline]
    pub const fn as_ref(&self) -> Try<&A, &E> {
        match self {
            Self::Failure(error) => Try::Failure(error),
            Self::Success(value) => Try::Success(value),
        }
    }
}

impl<A, E> Try<A, E>
where
    E: From<Exception>,
{
    /// Attempts to turn a `Failure` into a `Success`.
    ///
    /// `Maybe::Some(value)` from `function` becomes `Success(value)`;
    /// `Maybe::Void` keeps the original failure. If `function` itself
    /// panics, the panic replaces the original error as a new `Failure`.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(&E) -> Maybe<A>,
    {
        let error = match self {
            Self::Failure(error) => error,
            success @ Self::Success(_) => return success,
        };
        match panic::catch_unwind(AssertUnwindSafe(|| function(&error))) {
            Ok(Maybe::Some(value)) => Self::Success(value),
            Ok(Maybe::Void) => Self::Failure(error),
            Err(payload) => {
                let exception = Exception::from_panic(payload);
                debug!(panic = %exception, "recovery function panicked");
                Self::Failure(E::from(exception))
            }
        }
    }
}

impl<A, E> From<Result<A, E>> for Try<A, E> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<A, E> From<Try<A, E>> for Result<A, E> {
    #[inline]
    fn from(attempt: Try<A, E>) -> Self {
        attempt.get()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, E> TypeConstructor for Try<A, E> {
    type Inner = A;
    type WithType<B> = Try<B, E>;
}

impl<A, E: Clone> Functor for Try<A, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Try<B, E>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Failure(error) => Try::Failure(error.clone()),
            Self::Success(value) => Try::Success(function(value)),
        }
    }
}

impl<A, E: Clone> Applicative for Try<A, E> {
    #[inline]
    fn pure<B>(value: B) -> Try<B, E> {
        Try::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Try<B, E>, function: F) -> Try<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Failure(error), _) | (Self::Success(_), Try::Failure(error)) => {
                Try::Failure(error)
            }
            (Self::Success(a), Try::Success(b)) => Try::Success(function(a, b)),
        }
    }
}

impl<A, E: Clone> Monad for Try<A, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Try<B, E>
    where
        F: FnOnce(A) -> Try<B, E>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Try<i32>: Send, Sync, Clone);
