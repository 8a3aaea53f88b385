//! # monadic
//!
//! Algebraic replacements for exceptions and null-checks for Rust:
//! [`Maybe`](control::Maybe), [`Either`](control::Either) and
//! [`Try`](control::Try), plus a generic do-notation interpreter that lets
//! sequential, imperative-looking code compose into one monadic value.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad and reusable law checkers
//! - **Control Structures**: `Maybe`, `Either` (with left/right projections), `Try`
//! - **Do-notation**: `run_do`, `lift_do` and the `mdo!` macro, short-circuiting
//!   on the first absent/failure value
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The concrete monads
//! - `compose`: Do-notation interpreter and `mdo!`
//! - `serde`: Serialize/Deserialize for every value type
//! - `tracing`: Diagnostic events from the interpreter and `Try`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic::prelude::*;
//!
//! let sum: Either<&str, i32> = run_do(|scope| {
//!     let one = scope.bind(Either::<&str, i32>::Right(1))?;
//!     let two = 2;
//!     let three = scope.bind(Either::Right(3))?;
//!     Ok(one + two + three)
//! });
//! assert_eq!(sum, Either::Right(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod trace;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use monadic::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "compose")]
pub mod compose;
