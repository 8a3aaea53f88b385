//! Maybe type - an optional value without null-checks.
//!
//! `Maybe<A>` is either `Some(A)` or `Void`. `Void` carries no state, so
//! every `Void` of a given type is the same value.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//!
//! let tripled = Maybe::Some(3).fold(|| 0, |value| value * 2);
//! assert_eq!(tripled, 6);
//!
//! let missing: Maybe<i32> = Maybe::Void;
//! assert_eq!(missing.fold(|| 0, |value| value * 2), 0);
//! ```

use super::attempt::Try;
use super::either::Either;
use super::error::AccessError;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// An optional value: `Some(value)` or `Void`.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Maybe;
///
/// let name = Maybe::Some("ferris");
/// assert_eq!(name.map(str::len), Maybe::Some(6));
/// assert_eq!(Maybe::<&str>::Void.map(str::len), Maybe::Void);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    Void,
    /// A present value.
    Some(A),
}

impl<A> Maybe<A> {
    /// Returns `true` if this is `Void`.
    #[inline]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns the contained value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if this is `Void`.
    #[inline]
    pub fn get(self) -> Result<A, AccessError> {
        match self {
            Self::Void => Err(AccessError::new("Maybe", "Void", "get")),
            Self::Some(value) => Ok(value),
        }
    }

    /// Returns the contained value, or computes one from `default`.
    ///
    /// `default` is only invoked for `Void`.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Void => default(),
            Self::Some(value) => value,
        }
    }

    /// Returns the contained value, or `default`.
    #[inline]
    pub fn get_or(self, default: A) -> A {
        self.get_or_else(|| default)
    }

    /// Maps `Some(value)` to `Some(function(value))`; `Void` stays `Void`.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Void => Maybe::Void,
            Self::Some(value) => Maybe::Some(function(value)),
        }
    }

    /// Returns `function(value)` for `Some(value)`; `Void` stays `Void`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Self::Void => Maybe::Void,
            Self::Some(value) => function(value),
        }
    }

    /// Applies the contained function to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    ///
    /// let increment: fn(i32) -> i32 = |n| n + 1;
    /// assert_eq!(Maybe::Some(increment).ap(Maybe::Some(1)), Maybe::Some(2));
    /// ```
    #[inline]
    pub fn ap<B, C>(self, value: Maybe<B>) -> Maybe<C>
    where
        A: FnOnce(B) -> C,
    {
        match (self, value) {
            (Self::Some(function), Maybe::Some(value)) => Maybe::Some(function(value)),
            _ => Maybe::Void,
        }
    }

    /// Eliminates the `Maybe`: `void()` for `Void`, `some(value)` for `Some`.
    #[inline]
    pub fn fold<T, V, S>(self, void: V, some: S) -> T
    where
        V: FnOnce() -> T,
        S: FnOnce(A) -> T,
    {
        match self {
            Self::Void => void(),
            Self::Some(value) => some(value),
        }
    }

    /// Keeps `Some(value)` only when `predicate(&value)` holds.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Void => Self::Void,
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::Void
                }
            }
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Void => alternative(),
            some @ Self::Some(_) => some,
        }
    }

    /// Borrows the contained value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Void => Maybe::Void,
            Self::Some(value) => Maybe::Some(value),
        }
    }

    /// Converts to `Either`: `Some(value)` becomes `Right(value)`, `Void`
    /// becomes `Left(left())`.
    #[inline]
    pub fn to_either<L, F>(self, left: F) -> Either<L, A>
    where
        F: FnOnce() -> L,
    {
        match self {
            Self::Void => Either::Left(left()),
            Self::Some(value) => Either::Right(value),
        }
    }

    /// Converts to `Try`: `Some(value)` becomes `Success(value)`, `Void`
    /// becomes `Failure(error())`.
    #[inline]
    pub fn to_try<E, F>(self, error: F) -> Try<A, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Void => Try::Failure(error()),
            Self::Some(value) => Try::Success(value),
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::Void
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(option: Option<A>) -> Self {
        option.map_or(Self::Void, Self::Some)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(maybe: Maybe<A>) -> Self {
        match maybe {
            Maybe::Void => None,
            Maybe::Some(value) => Some(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::Void,
        }
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync);
