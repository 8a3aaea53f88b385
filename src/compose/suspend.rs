//! The iteration hook the do-notation interpreter drives.
//!
//! Suspending a monadic value either continues with its payload or stops
//! with a [`ShortCircuit`] carrying the termination variant. The signal's
//! payload is the monad's *residual*: the same type with the continuation
//! side made uninhabited (`Maybe<Infallible>`, `Either<L, Infallible>`,
//! `Try<Infallible, E>`). Two monads with different residuals can never be
//! bound in the same block.

use std::convert::Infallible;

use crate::control::{Either, Maybe, Try};
use crate::typeclass::Monad;

/// The result of advancing a do-block by one suspension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A, S> {
    /// The bound value; the block keeps running.
    Continue(A),
    /// The block stops with this signal.
    Stop(S),
}

/// The control signal raised when a termination variant is bound.
///
/// It is consumed by the interpreter, which turns it back into a member of
/// the same monad family with [`ShortCircuit::resume`].
///
/// # Examples
///
/// ```rust
/// use monadic::compose::ShortCircuit;
/// use monadic::control::Either;
///
/// let signal = ShortCircuit::new(Either::<&str, std::convert::Infallible>::Left("boom"));
/// let resumed: Either<&str, u64> = signal.resume();
/// assert_eq!(resumed, Either::Left("boom"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCircuit<R> {
    residual: R,
}

impl<R> ShortCircuit<R> {
    /// Wraps a termination value.
    pub const fn new(residual: R) -> Self {
        Self { residual }
    }

    /// Returns the wrapped termination value.
    pub fn into_residual(self) -> R {
        self.residual
    }

    /// Rebuilds the termination variant as any member of the family.
    pub fn resume<M>(self) -> M
    where
        M: Suspend<Residual = R>,
    {
        M::abort(self)
    }
}

/// A monad the do-notation interpreter can suspend on.
///
/// `Either<L, R>` implements it only for `L: Clone`, and `Try<A, E>` only
/// for `E: Clone`, because both bounds come from their [`Monad`] impls.
/// An error type without `Clone`, such as `std::io::Error`, has to be
/// wrapped first, for example in an [`Exception`](crate::control::Exception)
/// or an `Arc`:
///
/// ```rust
/// use monadic::compose::run_do;
/// use monadic::control::Either;
/// use std::sync::Arc;
///
/// fn open(path: &str) -> Either<Arc<std::io::Error>, String> {
///     Either::from(std::fs::read_to_string(path).map_err(Arc::new))
/// }
///
/// let result = run_do(|scope| {
///     let text = scope.bind(open("/definitely/missing/file"))?;
///     Ok(text.len())
/// });
/// assert!(result.is_left());
/// ```
pub trait Suspend: Monad + Sized {
    /// The termination carrier shared by every member of the family.
    type Residual;

    /// Advances by one suspension point.
    ///
    /// The continuation variant yields its payload; the termination variant
    /// stops with a signal carrying itself.
    fn suspend(self) -> Step<Self::Inner, ShortCircuit<Self::Residual>>;

    /// Wraps the final value of a finished block.
    fn complete(value: Self::Inner) -> Self;

    /// Rebuilds the termination variant carried by `signal`.
    fn abort(signal: ShortCircuit<Self::Residual>) -> Self;
}

/// Maps a residual back to its monad family.
///
/// This is what lets the interpreter name the result type of a block from
/// the values bound inside it.
pub trait Residual: Sized {
    /// The member of the family holding `T` on the continuation side.
    type Output<T>: Suspend<Inner = T, Residual = Self>;
}

impl<A> Suspend for Maybe<A> {
    type Residual = Maybe<Infallible>;

    fn suspend(self) -> Step<A, ShortCircuit<Maybe<Infallible>>> {
        match self {
            Self::Void => Step::Stop(ShortCircuit::new(Maybe::Void)),
            Self::Some(value) => Step::Continue(value),
        }
    }

    fn complete(value: A) -> Self {
        Self::Some(value)
    }

    fn abort(signal: ShortCircuit<Maybe<Infallible>>) -> Self {
        match signal.into_residual() {
            Maybe::Void => Self::Void,
            Maybe::Some(never) => match never {},
        }
    }
}

impl Residual for Maybe<Infallible> {
    type Output<T> = Maybe<T>;
}

impl<L: Clone, R> Suspend for Either<L, R> {
    type Residual = Either<L, Infallible>;

    fn suspend(self) -> Step<R, ShortCircuit<Either<L, Infallible>>> {
        match self {
            Self::Left(value) => Step::Stop(ShortCircuit::new(Either::Left(value))),
            Self::Right(value) => Step::Continue(value),
        }
    }

    fn complete(value: R) -> Self {
        Self::Right(value)
    }

    fn abort(signal: ShortCircuit<Either<L, Infallible>>) -> Self {
        match signal.into_residual() {
            Either::Left(value) => Self::Left(value),
            Either::Right(never) => match never {},
        }
    }
}

impl<L: Clone> Residual for Either<L, Infallible> {
    type Output<T> = Either<L, T>;
}

impl<A, E: Clone> Suspend for Try<A, E> {
    type Residual = Try<Infallible, E>;

    fn suspend(self) -> Step<A, ShortCircuit<Try<Infallible, E>>> {
        match self {
            Self::Failure(error) => Step::Stop(ShortCircuit::new(Try::Failure(error))),
            Self::Success(value) => Step::Continue(value),
        }
    }

    fn complete(value: A) -> Self {
        Self::Success(value)
    }

    fn abort(signal: ShortCircuit<Try<Infallible, E>>) -> Self {
        match signal.into_residual() {
            Try::Failure(error) => Self::Failure(error),
            Try::Success(never) => match never {},
        }
    }
}

impl<E: Clone> Residual for Try<Infallible, E> {
    type Output<T> = Try<T, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Exception;
    use rstest::rstest;

    #[rstest]
    fn test_continuation_variants_continue() {
        assert_eq!(Maybe::Some(1).suspend(), Step::Continue(1));
        assert_eq!(Either::<&str, i32>::Right(2).suspend(), Step::Continue(2));
        assert_eq!(Try::<i32>::Success(3).suspend(), Step::Continue(3));
    }

    #[rstest]
    fn test_termination_variants_stop_with_themselves() {
        assert_eq!(
            Maybe::<i32>::Void.suspend(),
            Step::Stop(ShortCircuit::new(Maybe::Void))
        );
        assert_eq!(
            Either::<&str, i32>::Left("boom").suspend(),
            Step::Stop(ShortCircuit::new(Either::Left("boom")))
        );
        let failure = Try::<i32>::Failure(Exception::msg("boom"));
        assert_eq!(
            failure.suspend(),
            Step::Stop(ShortCircuit::new(Try::Failure(Exception::msg("boom"))))
        );
    }

    #[rstest]
    fn test_abort_restores_termination_variant_at_new_type() {
        let signal = match Either::<&str, i32>::Left("boom").suspend() {
            Step::Stop(signal) => signal,
            Step::Continue(_) => unreachable!(),
        };
        let resumed: Either<&str, String> = Either::abort(signal);
        assert_eq!(resumed, Either::Left("boom"));
    }

    #[rstest]
    fn test_complete_is_continuation_variant() {
        assert_eq!(Maybe::complete(4), Maybe::Some(4));
        assert_eq!(Either::<(), i32>::complete(4), Either::Right(4));
        assert_eq!(Try::<i32>::complete(4), Try::Success(4));
    }
}
