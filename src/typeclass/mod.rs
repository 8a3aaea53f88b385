//! Type class traits shared by every monad in this crate.
//!
//! - [`Functor`]: Mapping over the value in the continuation variant
//! - [`Applicative`]: Lifting plain values and applying wrapped functions
//! - [`Monad`]: Sequencing computations where each step depends on the last
//!
//! The traits are a capability set: they carry no state of their own, and
//! each concrete type (`Maybe`, `Either`, `Try`) implements them directly.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) so that
//! `Functor` and `Monad` can talk about "the same container applied to a
//! different type".
//!
//! ## Laws
//!
//! The [`laws`] module turns the functor and monad laws into reusable
//! checkers, so any implementation can be verified against them.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::{Applicative, Functor, Monad};
//!
//! let lifted: Maybe<i32> = <Maybe<()>>::pure(20);
//! let doubled = lifted.fmap(|n| n * 2);
//! let halved = doubled.flat_map(|n| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::Void });
//! assert_eq!(halved, Maybe::Some(20));
//! ```

mod applicative;
mod functor;
mod higher;
pub mod laws;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
