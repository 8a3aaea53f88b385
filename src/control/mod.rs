//! The concrete monads: `Maybe`, `Either` and `Try`.
//!
//! Each is a closed two-variant sum type with one continuation variant and
//! one termination variant:
//!
//! | Type         | Continuation | Termination |
//! |--------------|--------------|-------------|
//! | [`Maybe`]    | `Some(A)`    | `Void`      |
//! | [`Either`]   | `Right(R)`   | `Left(L)`   |
//! | [`Try`]      | `Success(A)` | `Failure(E)`|
//!
//! All of them are immutable values with structural, variant-aware
//! equality: `Either::Left(1) != Either::Right(1)`. Every combinator returns
//! a new value.
//!
//! # Examples
//!
//! ## Conversions
//!
//! ```rust
//! use monadic::control::{Either, Exception, Maybe, Try};
//!
//! let right: Either<String, i32> = Either::Right(5);
//! assert_eq!(right.to_option(), Maybe::Some(5));
//!
//! let failure: Try<i32> = Try::Failure(Exception::msg("boom"));
//! assert_eq!(failure.to_either(), Either::Left(Exception::msg("boom")));
//! ```
//!
//! ## Capturing panics
//!
//! ```rust
//! use monadic::control::Try;
//!
//! let divide = Try::hold(|divisor: i32| 10 / divisor);
//! assert_eq!(divide(2), Try::Success(5));
//! assert!(divide(0).is_failure());
//! ```

mod attempt;
mod either;
mod error;
mod exception;
mod maybe;
mod projection;

pub use attempt::Try;
pub use either::Either;
pub use error::AccessError;
pub use exception::{Exception, ExceptionKind};
pub use maybe::Maybe;
pub use projection::{LeftProjection, RightProjection};
