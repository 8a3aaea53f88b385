//! Left and right views of an [`Either`].
//!
//! A projection owns the `Either` it was created from and re-targets the
//! mapping operations at one side: on a `LeftProjection`, `map` and
//! `flat_map` operate on `Left` and pass `Right` through untouched, which is
//! the mirror image of the right-biased `Either` itself.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Either, Maybe};
//!
//! let failed: Either<String, i32> = Either::Left("disk full".to_string());
//! let shouted = failed.left_projection().map(|message| message.to_uppercase());
//! assert_eq!(shouted, Either::Left("DISK FULL".to_string()));
//!
//! let ok: Either<String, i32> = Either::Right(3);
//! assert_eq!(ok.left_projection().to_option(), Maybe::Void);
//! ```

use super::either::Either;
use super::error::AccessError;
use super::maybe::Maybe;

/// An [`Either`] viewed with `Left` as the primary channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LeftProjection<L, R> {
    either: Either<L, R>,
}

/// An [`Either`] viewed with `Right` as the primary channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightProjection<L, R> {
    either: Either<L, R>,
}

impl<L, R> LeftProjection<L, R> {
    pub(crate) const fn new(either: Either<L, R>) -> Self {
        Self { either }
    }

    /// Returns the left value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the underlying value is a `Right`.
    pub fn get(self) -> Result<L, AccessError> {
        match self.either {
            Either::Left(value) => Ok(value),
            Either::Right(_) => Err(AccessError::new("LeftProjection", "Right", "get")),
        }
    }

    /// Returns the left value, or computes one from `default`.
    pub fn get_or_else<F>(self, default: F) -> L
    where
        F: FnOnce() -> L,
    {
        match self.either {
            Either::Left(value) => value,
            Either::Right(_) => default(),
        }
    }

    /// Maps the left value; a `Right` passes through unchanged.
    pub fn map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        self.either.map_left(function)
    }

    /// Returns `function(value)` for `Left(value)`; a `Right` passes through unchanged.
    pub fn flat_map<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self.either {
            Either::Left(value) => function(value),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// `Left(value)` becomes `Some(value)`, `Right` becomes `Void`.
    pub fn to_option(self) -> Maybe<L> {
        match self.either {
            Either::Left(value) => Maybe::Some(value),
            Either::Right(_) => Maybe::Void,
        }
    }

    /// Returns `true` if the underlying value is a `Left` satisfying `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match &self.either {
            Either::Left(value) => predicate(value),
            Either::Right(_) => false,
        }
    }

    /// Returns the projected `Either`.
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }
}

impl<L, R> RightProjection<L, R> {
    pub(crate) const fn new(either: Either<L, R>) -> Self {
        Self { either }
    }

    /// Returns the right value.
    ///
    /// # Errors
    ///
    /// Returns an [`AccessError`] if the underlying value is a `Left`.
    pub fn get(self) -> Result<R, AccessError> {
        match self.either {
            Either::Left(_) => Err(AccessError::new("RightProjection", "Left", "get")),
            Either::Right(value) => Ok(value),
        }
    }

    /// Returns the right value, or computes one from `default`.
    pub fn get_or_else<F>(self, default: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.either.get_or_else(default)
    }

    /// Maps the right value; a `Left` passes through unchanged.
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        self.either.map(function)
    }

    /// Returns `function(value)` for `Right(value)`; a `Left` passes through unchanged.
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.either.flat_map(function)
    }

    /// `Right(value)` becomes `Some(value)`, `Left` becomes `Void`.
    pub fn to_option(self) -> Maybe<R> {
        self.either.to_option()
    }

    /// Returns `true` if the underlying value is a `Right` satisfying `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match &self.either {
            Either::Left(_) => false,
            Either::Right(value) => predicate(value),
        }
    }

    /// Returns the projected `Either`.
    pub fn into_either(self) -> Either<L, R> {
        self.either
    }
}
