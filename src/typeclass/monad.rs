//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`: the result of one step
//! decides the next step. On a termination variant (`Void`, `Left`,
//! `Failure`) the continuation is never invoked and the same variant is
//! returned (right-zero).
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! ## Right Zero
//!
//! ```text
//! t.flat_map(f) == t        // for every termination variant t, f never runs
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Maybe::Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::Some(n * 2));
//! assert_eq!(result, Maybe::Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
/// use monadic::typeclass::Monad;
///
/// let checked: Either<String, i32> = Either::Right(10).flat_map(|n: i32| {
///     if n > 0 { Either::Right(n / 2) } else { Either::Left("negative".to_string()) }
/// });
/// assert_eq!(checked, Either::Right(5));
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// The function's result is returned as-is, never double-wrapped.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is a termination variant it propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Some(5).then(Maybe::Some("hello")), Maybe::Some("hello"));
    /// assert_eq!(Maybe::<i32>::Void.then(Maybe::Some("hello")), Maybe::Void);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}
