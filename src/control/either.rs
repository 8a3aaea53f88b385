//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is right-biased: `Right` is the success/continuation
//! channel and `map`/`flat_map` operate on it, while `Left` carries the
//! irregular value that short-circuits a computation. The projections
//! returned by [`Either::left_projection`] and [`Either::right_projection`]
//! choose the channel explicitly.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! // Pattern matching
//! match left {
//!     Either::Left(n) => assert_eq!(n, 42),
//!     Either::Right(_) => unreachable!(),
//! }
//!
//! // Using fold to handle both cases
//! let result = right.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! ```

use std::error::Error;
use std::fmt;

use super::attempt::Try;
use super::error::AccessError;
use super::maybe::Maybe;
use super::projection::{LeftProjection, RightProjection};
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that can be one of two types.
///
/// By convention `Right` is the success channel and `Left` the irregular
/// one. The two variants never compare equal, even for identical payloads.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
///
/// let same_payload: Either<i32, i32> = Either::Left(1);
/// assert_ne!(same_payload, Either::Right(1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant: the irregular, short-circuiting channel.
    Left(L),
    /// The right variant: the success, continuation channel.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the right value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if this is a `Left`.
    #[inline]
    pub fn get(self) -> Result<R, AccessError> {
        match self {
            Self::Left(_) => Err(AccessError::new("Either", "Left", "get")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the right value, or computes one from `default`.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        match self {
            Self::Left(_) => default(),
            Self::Right(value) => value,
        }
    }

    /// Borrows both sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// assert_eq!(left.as_ref().left_projection().get().map(|s| s.len()), Ok(5));
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Maps the right value; a `Left` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Returns `function(value)` for `Right(value)`; a `Left` is returned unchanged.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies the right-hand function to `value`.
    ///
    /// The first `Left` encountered (self, then `value`) is returned.
    #[inline]
    pub fn ap<B, C>(self, value: Either<L, B>) -> Either<L, C>
    where
        R: FnOnce(B) -> C,
    {
        match (self, value) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either: `left(value)` for `Left`, `right(value)` for `Right`.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Views this `Either` with `Left` as the primary channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(2);
    /// assert_eq!(left.left_projection().map(|n| n * 10), Either::Left(20));
    /// ```
    #[inline]
    pub const fn left_projection(self) -> LeftProjection<L, R> {
        LeftProjection::new(self)
    }

    /// Views this `Either` with `Right` as the primary channel.
    #[inline]
    pub const fn right_projection(self) -> RightProjection<L, R> {
        RightProjection::new(self)
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts to `Maybe`: `Right(value)` becomes `Some(value)`, `Left` becomes `Void`.
    #[inline]
    pub fn to_option(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Void,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Converts to `Try`: `Right(value)` becomes `Success(value)` and
    /// `Left(error)` becomes `Failure(error)`.
    ///
    /// Only available when the left type is an error type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::{Either, Exception, Try};
    ///
    /// let left: Either<Exception, i32> = Either::Left(Exception::msg("boom"));
    /// assert_eq!(left.to_try(), Try::Failure(Exception::msg("boom")));
    /// ```
    ///
    /// A left type that is not an error is rejected at the call:
    ///
    /// ```compile_fail
    /// use monadic::control::Either;
    ///
    /// let left: Either<i32, i32> = Either::Left(1);
    /// let _ = left.to_try();
    /// ```
    #[inline]
    pub fn to_try(self) -> Try<R, L>
    where
        L: Error,
    {
        match self {
            Self::Left(error) => Try::Failure(error),
            Self::Right(value) => Try::Success(value),
        }
    }
}

impl<T> Either<T, T> {
    /// Returns the value from whichever side is present.
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Left(error), _) | (Self::Right(_), Either::Left(error)) => Either::Left(error),
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Either<String, i32>: Send, Sync);
static_assertions::assert_impl_all!(Either<u8, i32>: Copy);
