//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the value held by the continuation variant
//! (`Some`, `Right`, `Success`) and leaves the termination variants
//! (`Void`, `Left`, `Failure`) untouched.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws are available as checkers in [`laws`](super::laws).
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::{Either, Maybe};
//! use monadic::typeclass::Functor;
//!
//! let some_value = Maybe::Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Maybe::Some("5".to_string()));
//!
//! let left: Either<&str, i32> = Either::Left("missing");
//! assert_eq!(left.fmap(|n| n + 1), Either::Left("missing"));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// # Examples
///
/// ```rust
/// use monadic::control::Try;
/// use monadic::typeclass::Functor;
///
/// let parsed: Try<i32> = Try::Success(21);
/// assert_eq!(parsed.fmap(|n| n * 2), Try::Success(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// The function runs at most once, and only for the continuation variant.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// The termination payload is cloned, so the original stays usable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// let name = Maybe::Some("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Maybe::Some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic::control::Maybe;
    /// use monadic::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).replace("replaced"), Maybe::Some("replaced"));
    /// assert_eq!(Maybe::<i32>::Void.replace("replaced"), Maybe::Void);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    ///
    /// Only the shape (continuation or termination) survives.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
