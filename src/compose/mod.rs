//! Do-notation over `Maybe`, `Either` and `Try`.
//!
//! A do-block reads like sequential code: each bind extracts the value of
//! a monadic expression, and the first termination variant ends the block
//! with that variant as the result. Binding is a plain method call plus
//! `?`, so the early exit needs no per-call-site propagation code.
//!
//! # Overview
//!
//! - [`Suspend`]: the iteration hook each monad implements
//! - [`Step`] and [`ShortCircuit`]: the result of one advance and the stop signal
//! - [`DoScope`]: the suspension point handed to a block
//! - [`run_do`], [`try_run_do`], [`lift_do`]: the interpreter entry points
//! - [`mdo!`](crate::mdo): statement-style syntax over `run_do`
//!
//! # Examples
//!
//! ```rust
//! use monadic::mdo;
//! use monadic::control::Maybe;
//!
//! fn lookup(key: &str) -> Maybe<i32> {
//!     match key {
//!         "a" => Maybe::Some(1),
//!         "b" => Maybe::Some(2),
//!         _ => Maybe::Void,
//!     }
//! }
//!
//! let found = mdo! {
//!     a <= lookup("a");
//!     b <= lookup("b");
//!     a + b
//! };
//! assert_eq!(found, Maybe::Some(3));
//!
//! let missing = mdo! {
//!     a <= lookup("a");
//!     z <= lookup("z");
//!     a + z
//! };
//! assert_eq!(missing, Maybe::Void);
//! ```
//!
//! # Homogeneity
//!
//! All binds in one block share the monad family. Binding a `Maybe` in an
//! `Either` block is rejected by the compiler.

mod do_notation;
mod mdo_macro;
mod suspend;

pub use do_notation::{DoError, DoScope, DoState, lift_do, run_do, try_run_do};
pub use suspend::{Residual, ShortCircuit, Step, Suspend};
