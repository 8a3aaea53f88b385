//! Reusable checkers for the functor and monad laws.
//!
//! Each checker evaluates both sides of one law for a concrete value and
//! returns whether they agree, so property tests can run them for every
//! variant of every monad.
//!
//! # Examples
//!
//! ```rust
//! use monadic::control::Maybe;
//! use monadic::typeclass::laws;
//!
//! assert!(laws::functor_identity(Maybe::Some(3)));
//! assert!(laws::functor_composition(Maybe::Some(3), |n: i32| n + 1, |n: i32| n * 2));
//! assert!(laws::monad_right_zero(Maybe::<i32>::Void, |n| Maybe::Some(n + 1)));
//! ```

use std::cell::Cell;

use super::{Functor, Monad};

/// Identity law: `fa.fmap(|x| x) == fa`.
pub fn functor_identity<F, A>(value: F) -> bool
where
    F: Functor<Inner = A, WithType<A> = F> + Clone + PartialEq,
{
    value.clone().fmap::<A, _>(|x| x) == value
}

/// Composition law: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`.
pub fn functor_composition<F, A, B, C, G, H>(value: F, first: G, second: H) -> bool
where
    F: Functor<Inner = A> + Clone,
    F::WithType<B>: Functor<Inner = B, WithType<C> = F::WithType<C>>,
    F::WithType<C>: PartialEq,
    G: Fn(A) -> B,
    H: Fn(B) -> C,
{
    let sequenced = value.clone().fmap::<B, _>(&first).fmap::<C, _>(&second);
    let composed = value.fmap::<C, _>(|x| second(first(x)));
    sequenced == composed
}

/// Left identity law: `pure(a).flat_map(f) == f(a)`.
pub fn monad_left_identity<M, A, B, F>(value: A, function: F) -> bool
where
    M: Monad<Inner = A, WithType<A> = M>,
    M::WithType<B>: PartialEq,
    A: Clone,
    F: Fn(A) -> M::WithType<B>,
{
    let lifted: M = M::pure(value.clone());
    lifted.flat_map::<B, _>(&function) == function(value)
}

/// Right identity law: `m.flat_map(pure) == m`.
pub fn monad_right_identity<M, A>(value: M) -> bool
where
    M: Monad<Inner = A, WithType<A> = M> + Clone + PartialEq,
{
    value.clone().flat_map::<A, _>(|x| M::pure::<A>(x)) == value
}

/// Associativity law: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`.
pub fn monad_associativity<M, A, B, C, F, G>(value: M, first: F, second: G) -> bool
where
    M: Monad<Inner = A> + Clone,
    M::WithType<B>: Monad<Inner = B, WithType<C> = M::WithType<C>>,
    M::WithType<C>: PartialEq,
    F: Fn(A) -> M::WithType<B>,
    G: Fn(B) -> M::WithType<C>,
{
    let sequenced = value
        .clone()
        .flat_map::<B, _>(&first)
        .flat_map::<C, _>(&second);
    let nested = value.flat_map::<C, _>(|x| first(x).flat_map::<C, _>(&second));
    sequenced == nested
}

/// Right zero: for a termination variant `t`, `t.flat_map(f) == t` and `f`
/// is never invoked.
///
/// Returns `false` for continuation variants, since they do invoke `f`.
pub fn monad_right_zero<M, A, F>(terminal: M, function: F) -> bool
where
    M: Monad<Inner = A, WithType<A> = M> + Clone + PartialEq,
    F: FnOnce(A) -> M,
{
    let calls = Cell::new(0_usize);
    let result = terminal.clone().flat_map::<A, _>(|x| {
        calls.set(calls.get() + 1);
        function(x)
    });
    result == terminal && calls.get() == 0
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use crate::control::{Either, Maybe, Try};
    use rstest::rstest;

    #[rstest]
    #[case(Maybe::Some(1))]
    #[case(Maybe::Void)]
    fn maybe_satisfies_functor_laws(#[case] value: Maybe<i32>) {
        assert!(functor_identity(value));
        assert!(functor_composition(value, |n: i32| n + 1, |n: i32| n * 3));
    }

    #[rstest]
    fn either_satisfies_monad_laws() {
        let right: Either<String, i32> = Either::Right(4);
        let half = |n: i32| {
            if n % 2 == 0 {
                Either::Right(n / 2)
            } else {
                Either::Left(format!("{n} is odd"))
            }
        };
        assert!(monad_left_identity::<Either<String, i32>, _, _, _>(4, half));
        assert!(monad_right_identity(right.clone()));
        assert!(monad_associativity(right, half, half));
    }

    #[rstest]
    fn right_zero_holds_for_termination_variants() {
        assert!(monad_right_zero(Maybe::<i32>::Void, |n| Maybe::Some(n)));
        assert!(monad_right_zero(
            Either::<&str, i32>::Left("stop"),
            |n| Either::Right(n)
        ));
        assert!(monad_right_zero(
            Try::<i32, String>::Failure("bad".to_string()),
            |n| Try::Success(n)
        ));
    }

    #[rstest]
    fn right_zero_rejects_continuation_variants() {
        assert!(!monad_right_zero(Maybe::Some(1), |n| Maybe::Some(n)));
    }
}
