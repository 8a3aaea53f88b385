#![cfg(feature = "control")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that every Functor implementation satisfies:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! The strategies generate both variants of each type, so the laws are
//! checked for continuation and termination values alike.

use monadic::control::{Either, Exception, Maybe, Try};
use monadic::typeclass::{Functor, laws};
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![Just(Maybe::Void), any::<i32>().prop_map(Maybe::Some)]
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        any::<String>().prop_map(|message| Try::Failure(Exception::msg(message))),
        any::<i32>().prop_map(Try::Success),
    ]
}

// =============================================================================
// Maybe<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert!(laws::functor_identity(value));
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.to_string();
        prop_assert!(laws::functor_composition(value, function1, function2));
    }

    #[test]
    fn prop_maybe_fmap_ref_agrees_with_fmap(value in maybe_strategy()) {
        let by_ref = value.fmap_ref(|n| n.wrapping_mul(3));
        prop_assert_eq!(by_ref, value.fmap(|n| n.wrapping_mul(3)));
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert!(laws::functor_identity(value));
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| i64::from(n) * 2;
        let function2 = |n: i64| n.wrapping_sub(7);
        prop_assert!(laws::functor_composition(value, function1, function2));
    }

    #[test]
    fn prop_either_replace_keeps_left(value in either_strategy()) {
        let replaced = value.clone().replace("new");
        prop_assert_eq!(replaced.is_left(), value.is_left());
    }
}

// =============================================================================
// Try<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_try_identity_law(value in try_strategy()) {
        prop_assert!(laws::functor_identity(value));
    }

    #[test]
    fn prop_try_composition_law(value in try_strategy()) {
        let function1 = |n: i32| n.checked_abs();
        let function2 = |n: Option<i32>| n.is_some();
        prop_assert!(laws::functor_composition(value, function1, function2));
    }
}
