//! The do-notation interpreter.
//!
//! A do-block is a closure that receives a [`DoScope`] and binds monadic
//! values through [`DoScope::bind`]. A continuation variant hands its
//! payload back to the block; a termination variant returns a
//! [`ShortCircuit`] that the block propagates with `?`, so nothing after the
//! failing bind runs. [`run_do`] then turns the block's outcome back into a
//! single monadic value:
//!
//! - `Ok(value)` becomes the continuation variant wrapping `value`.
//! - `Err(signal)` becomes the termination variant that stopped the block,
//!   unchanged.
//!
//! # Examples
//!
//! ```rust
//! use monadic::compose::run_do;
//! use monadic::control::Either;
//!
//! let total = run_do(|scope| {
//!     let one = scope.bind(Either::<String, i32>::Right(1))?;
//!     let two = 2;
//!     let three = scope.bind(Either::Right(3))?;
//!     Ok(one + two + three)
//! });
//! assert_eq!(total, Either::Right(6));
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::suspend::{Residual, ShortCircuit, Step, Suspend};

/// Where a do-block is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoState {
    /// The block is executing.
    Running,
    /// The block returned a value.
    Completed,
    /// A termination variant was bound.
    ShortCircuited,
}

/// A programmer error detected while running a do-block.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::DoError;
///
/// assert_eq!(
///     format!("{}", DoError::NonMonadicBlock),
///     "do-block finished without binding a monadic value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoError {
    /// The block returned without a single bind.
    NonMonadicBlock,
    /// The block kept running after a short-circuit instead of propagating it.
    SignalSwallowed,
}

impl fmt::Display for DoError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonMonadicBlock => {
                formatter.write_str("do-block finished without binding a monadic value")
            }
            Self::SignalSwallowed => formatter.write_str(
                "do-block kept running after a short-circuit; propagate the bind result with `?`",
            ),
        }
    }
}

impl std::error::Error for DoError {}

/// The suspension point handed to a do-block.
///
/// `R` is the residual of the monad family the block works in. Every value
/// passed to [`bind`](Self::bind) must share it, which is what keeps a block
/// homogeneous:
///
/// ```compile_fail
/// use monadic::compose::run_do;
/// use monadic::control::{Either, Maybe};
///
/// let _ = run_do(|scope| {
///     let a = scope.bind(Either::<&str, i32>::Right(1))?;
///     let b = scope.bind(Maybe::Some(2))?;
///     Ok(a + b)
/// });
/// ```
pub struct DoScope<R> {
    state: DoState,
    binds: usize,
    swallowed: bool,
    _residual: PhantomData<fn() -> R>,
}

impl<R> DoScope<R> {
    const fn new() -> Self {
        Self {
            state: DoState::Running,
            binds: 0,
            swallowed: false,
            _residual: PhantomData,
        }
    }

    /// Binds one monadic value.
    ///
    /// # Errors
    ///
    /// Returns the [`ShortCircuit`] for a termination variant. Propagate it
    /// with `?`; binding again after ignoring it is reported by the
    /// interpreter as [`DoError::SignalSwallowed`].
    pub fn bind<N>(&mut self, value: N) -> Result<N::Inner, ShortCircuit<R>>
    where
        N: Suspend<Residual = R>,
    {
        if self.state == DoState::ShortCircuited {
            debug!(binds = self.binds, "bind after short-circuit");
            self.swallowed = true;
        }
        self.binds += 1;
        match value.suspend() {
            Step::Continue(inner) => {
                trace!(bind = self.binds, "continue");
                Ok(inner)
            }
            Step::Stop(signal) => {
                debug!(bind = self.binds, "short-circuit");
                self.state = DoState::ShortCircuited;
                Err(signal)
            }
        }
    }

    /// Binds every value in order, stopping at the first termination variant.
    ///
    /// # Errors
    ///
    /// Returns the [`ShortCircuit`] of the first termination variant; later
    /// values are not consumed from the iterator.
    pub fn bind_all<N, I>(&mut self, values: I) -> Result<Vec<N::Inner>, ShortCircuit<R>>
    where
        N: Suspend<Residual = R>,
        I: IntoIterator<Item = N>,
    {
        let values = values.into_iter();
        let mut bound = Vec::with_capacity(values.size_hint().0);
        for value in values {
            bound.push(self.bind(value)?);
        }
        Ok(bound)
    }

    /// Returns the lifecycle state.
    pub const fn state(&self) -> DoState {
        self.state
    }

    /// Returns how many values have been bound so far.
    pub const fn binds(&self) -> usize {
        self.binds
    }
}

impl<R> fmt::Debug for DoScope<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DoScope")
            .field("state", &self.state)
            .field("binds", &self.binds)
            .field("swallowed", &self.swallowed)
            .finish()
    }
}

/// Runs a do-block, reporting programmer errors as data.
///
/// # Errors
///
/// - [`DoError::NonMonadicBlock`] if the block returned without binding.
/// - [`DoError::SignalSwallowed`] if the block bound a value after a
///   short-circuit it did not propagate, or returned `Ok` after one.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::{try_run_do, DoError, DoScope};
/// use monadic::control::Maybe;
/// use std::convert::Infallible;
///
/// let result = try_run_do(|_scope: &mut DoScope<Maybe<Infallible>>| Ok(1));
/// assert_eq!(result, Err(DoError::NonMonadicBlock));
/// ```
pub fn try_run_do<R, T, F>(body: F) -> Result<R::Output<T>, DoError>
where
    R: Residual,
    F: FnOnce(&mut DoScope<R>) -> Result<T, ShortCircuit<R>>,
{
    let mut scope = DoScope::new();
    let outcome = body(&mut scope);
    if scope.swallowed {
        debug!(binds = scope.binds, "do-block swallowed a short-circuit");
        return Err(DoError::SignalSwallowed);
    }
    if scope.binds == 0 {
        debug!("do-block finished without a bind");
        return Err(DoError::NonMonadicBlock);
    }
    match outcome {
        Ok(_) if scope.state == DoState::ShortCircuited => {
            debug!(binds = scope.binds, "do-block returned a value after a short-circuit");
            Err(DoError::SignalSwallowed)
        }
        Ok(value) => {
            scope.state = DoState::Completed;
            trace!(binds = scope.binds, "do-block completed");
            Ok(<R::Output<T> as Suspend>::complete(value))
        }
        Err(signal) => {
            trace!(binds = scope.binds, "do-block short-circuited");
            Ok(<R::Output<T> as Suspend>::abort(signal))
        }
    }
}

/// Runs a do-block and returns the composed monadic value.
///
/// Every bound value must implement [`Suspend`], so an `Either` needs a
/// `Clone` left type and a `Try` a `Clone` error type.
///
/// # Panics
///
/// Panics with the [`DoError`] message on a programmer error; see
/// [`try_run_do`] for the non-panicking form.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::run_do;
/// use monadic::control::Maybe;
///
/// let mut reached = false;
/// let result = run_do(|scope| {
///     let a = scope.bind(Maybe::Some(1))?;
///     let b: i32 = scope.bind(Maybe::Void)?;
///     reached = true;
///     Ok(a + b)
/// });
/// assert_eq!(result, Maybe::Void);
/// assert!(!reached);
/// ```
pub fn run_do<R, T, F>(body: F) -> R::Output<T>
where
    R: Residual,
    F: FnOnce(&mut DoScope<R>) -> Result<T, ShortCircuit<R>>,
{
    match try_run_do(body) {
        Ok(result) => result,
        Err(error) => panic!("{error}"),
    }
}

/// Turns a do-block taking an argument into a reusable function.
///
/// # Panics
///
/// The returned function panics like [`run_do`] on a programmer error.
///
/// # Examples
///
/// ```rust
/// use monadic::compose::lift_do;
/// use monadic::control::Maybe;
///
/// let halve = lift_do(|scope, n: i32| {
///     let even = scope.bind(Maybe::Some(n).filter(|n| n % 2 == 0))?;
///     Ok(even / 2)
/// });
/// assert_eq!(halve(8), Maybe::Some(4));
/// assert_eq!(halve(7), Maybe::Void);
/// ```
pub fn lift_do<X, R, T, F>(body: F) -> impl Fn(X) -> R::Output<T>
where
    R: Residual,
    F: Fn(&mut DoScope<R>, X) -> Result<T, ShortCircuit<R>>,
{
    move |argument| run_do(|scope| body(scope, argument))
}

static_assertions::assert_impl_all!(DoScope<std::convert::Infallible>: Send, Sync);
static_assertions::assert_not_impl_any!(DoScope<std::convert::Infallible>: Clone);
