//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot write a trait that abstracts over `Maybe<_>` or
//! `Either<L, _>` as type constructors. [`TypeConstructor`] works around
//! this with a GAT: each implementor names the type it is applied to
//! (`Inner`) and how to re-apply the same constructor to another type
//! (`WithType<B>`).
//!
//! # Example
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::TypeConstructor;
//!
//! fn absent<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Maybe<String> = absent(Maybe::Some(42));
//! assert_eq!(none, Maybe::Void);
//! ```

/// A trait representing a type constructor.
///
/// For `Maybe<A>`, `Inner` is `A` and `WithType<B>` is `Maybe<B>`. For the
/// two-parameter types the non-value parameter stays fixed: `Either<L, R>`
/// re-applies as `Either<L, B>`, `Try<A, E>` as `Try<B, E>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
