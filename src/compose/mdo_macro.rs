//! Statement-style syntax for do-blocks.
//!
//! # Syntax
//!
//! ```text
//! mdo! {
//!     pattern <= monadic_expression;   // bind
//!     let pattern = expression;        // pure binding
//!     final_expression                 // plain value, wrapped by the interpreter
//! }
//! ```
//!
//! Each `<=` becomes a [`DoScope::bind`](crate::compose::DoScope::bind)
//! followed by `?`, and the whole block is run with
//! [`run_do`](crate::compose::run_do). The final expression is a plain
//! value; the interpreter wraps it in the continuation variant.

/// Runs a block of binds in one monad and returns the composed value.
///
/// # Examples
///
/// ```rust
/// use monadic::mdo;
/// use monadic::control::Either;
///
/// let result = mdo! {
///     one <= Either::<&str, i32>::Right(1);
///     let two = 2;
///     three <= Either::Right(3);
///     one + two + three
/// };
/// assert_eq!(result, Either::Right(6));
///
/// let failed = mdo! {
///     one <= Either::<&str, i32>::Right(1);
///     two <= Either::Left("boom");
///     let _unreachable: i32 = two;
///     one + two
/// };
/// assert_eq!(failed, Either::Left("boom"));
/// ```
///
/// Tuple and wildcard patterns:
///
/// ```rust
/// use monadic::mdo;
/// use monadic::control::Maybe;
///
/// let result = mdo! {
///     (a, b) <= Maybe::Some((1, 2));
///     _ <= Maybe::Some("ignored");
///     let (c, d) = (a * 10, b * 10);
///     c + d
/// };
/// assert_eq!(result, Maybe::Some(30));
/// ```
#[macro_export]
macro_rules! mdo {
    (@step $scope:ident; $pattern:ident <= $monad:expr ; $($rest:tt)+) => {{
        let $pattern = $scope.bind($monad)?;
        $crate::mdo!(@step $scope; $($rest)+)
    }};

    (@step $scope:ident; ($($pattern:tt)*) <= $monad:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $scope.bind($monad)?;
        $crate::mdo!(@step $scope; $($rest)+)
    }};

    (@step $scope:ident; _ <= $monad:expr ; $($rest:tt)+) => {{
        let _ = $scope.bind($monad)?;
        $crate::mdo!(@step $scope; $($rest)+)
    }};

    (@step $scope:ident; let $pattern:ident $(: $ty:ty)? = $expr:expr ; $($rest:tt)+) => {{
        let $pattern $(: $ty)? = $expr;
        $crate::mdo!(@step $scope; $($rest)+)
    }};

    (@step $scope:ident; let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::mdo!(@step $scope; $($rest)+)
    }};

    (@step $scope:ident; $result:expr) => {
        ::core::result::Result::Ok($result)
    };

    ($($body:tt)+) => {
        $crate::compose::run_do(|scope| $crate::mdo!(@step scope; $($body)+))
    };
}
