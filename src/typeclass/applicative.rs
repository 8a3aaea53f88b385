//! Applicative type class - lifting values and applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - `pure`: lift a plain value into the continuation variant
//! - `map2`: combine two independent values with a function
//! - `apply`: apply a wrapped function to a wrapped value (`ap`)
//!
//! Combination is fail-fast: the first termination variant wins, and no
//! errors are accumulated.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::Applicative;
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(lifted, Maybe::Some(42));
//!
//! let sum = Maybe::Some(1).map2(Maybe::Some(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Some(3));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Either;
/// use monadic::typeclass::Applicative;
///
/// let right: Either<String, i32> = <Either<String, ()>>::pure(7);
/// assert_eq!(right, Either::Right(7));
///
/// let left: Either<String, i32> = Either::Left("no".to_string());
/// assert_eq!(left.map2(Either::Right(1), |a, b| a + b), Either::Left("no".to_string()));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the continuation variant.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// When both are continuation variants the function runs; otherwise the
    /// first termination variant (left to right) is returned.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::Some(1).product(Maybe::Some("a")), Maybe::Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Applicative;
    ///
    /// let increment: fn(i32) -> i32 = |x| x + 1;
    /// assert_eq!(Maybe::Some(increment).apply(Maybe::Some(5)), Maybe::Some(6));
    /// ```
    #[inline]
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
