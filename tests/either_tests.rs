//! Unit tests for Either<L, R> and its projections.
//!
//! - `Left(L)`: the irregular channel; right-biased combinators pass it through
//! - `Right(R)`: the success channel

#![cfg(feature = "control")]

use monadic::control::{AccessError, Either, Exception, Maybe, Try};
use rstest::rstest;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
struct ParseFailure(String);

impl fmt::Display for ParseFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "cannot parse {}", self.0)
    }
}

impl std::error::Error for ParseFailure {}

// =============================================================================
// Left
// =============================================================================

#[rstest]
fn left_map_and_flat_map_are_noops() {
    let mut calls = 0;
    let left: Either<&str, i32> = Either::Left("boom");
    let mapped = left.map(|v| {
        calls += 1;
        v + 1
    });
    let bound = left.flat_map(|v| {
        calls += 1;
        Either::Right(v + 1)
    });
    assert_eq!(mapped, Either::Left("boom"));
    assert_eq!(bound, Either::Left("boom"));
    assert_eq!(calls, 0);
}

#[rstest]
fn left_fold_invokes_left_function() {
    let left: Either<&str, i32> = Either::Left("boom");
    assert_eq!(left.fold(str::len, |v| v as usize), 4);
}

#[rstest]
fn left_to_option_is_void() {
    let left: Either<&str, i32> = Either::Left("boom");
    assert_eq!(left.to_option(), Maybe::Void);
}

#[rstest]
fn left_to_try_wraps_error_as_failure() {
    let left: Either<ParseFailure, i32> = Either::Left(ParseFailure("x".to_string()));
    assert_eq!(left.to_try(), Try::Failure(ParseFailure("x".to_string())));
}

#[rstest]
fn left_get_fails_with_access_error() {
    let left: Either<&str, i32> = Either::Left("boom");
    assert_eq!(left.get(), Err(AccessError::new("Either", "Left", "get")));
    assert_eq!(left.get_or_else(|| -1), -1);
}

// =============================================================================
// Right
// =============================================================================

#[rstest]
fn right_map_wraps_result() {
    let right: Either<&str, i32> = Either::Right(5);
    assert_eq!(right.map(|v| v * 2), Either::Right(10));
}

#[rstest]
fn right_flat_map_returns_function_result() {
    let right: Either<&str, i32> = Either::Right(5);
    assert_eq!(
        right.flat_map(|_| Either::<&str, i32>::Left("rejected")),
        Either::Left("rejected")
    );
}

#[rstest]
fn right_fold_invokes_right_function() {
    let right: Either<&str, i32> = Either::Right(5);
    assert_eq!(right.fold(|_| 0, |v| v * 3), 15);
}

#[rstest]
fn right_to_try_is_success() {
    let right: Either<Exception, i32> = Either::Right(5);
    assert_eq!(right.to_try(), Try::Success(5));
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn variants_with_same_payload_are_not_equal() {
    let left: Either<i32, i32> = Either::Left(1);
    let right: Either<i32, i32> = Either::Right(1);
    assert_ne!(left, right);
    assert_eq!(left, Either::Left(1));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(Either::Left(2), Either::Left("2".to_string()))]
#[case(Either::Right(3), Either::Right(6))]
fn either_bimap(#[case] value: Either<i32, i32>, #[case] expected: Either<String, i32>) {
    assert_eq!(value.bimap(|l| l.to_string(), |r| r * 2), expected);
}

#[rstest]
fn either_swap_twice_is_identity() {
    let value: Either<i32, &str> = Either::Left(9);
    assert_eq!(value.swap(), Either::Right(9));
    assert_eq!(value.swap().swap(), value);
}

#[rstest]
fn either_ap_returns_first_left() {
    let function: fn(i32) -> i32 = |v| v + 1;
    let right_function: Either<&str, fn(i32) -> i32> = Either::Right(function);
    assert_eq!(right_function.ap(Either::Right(1)), Either::Right(2));
    assert_eq!(right_function.ap(Either::Left("value")), Either::Left("value"));

    let left_function: Either<&str, fn(i32) -> i32> = Either::Left("function");
    assert_eq!(left_function.ap(Either::Left("value")), Either::Left("function"));
}

// =============================================================================
// Projections
// =============================================================================

#[rstest]
fn left_projection_rebiases_map() {
    let left: Either<i32, &str> = Either::Left(4);
    assert_eq!(left.left_projection().map(|v| v + 1), Either::Left(5));

    let right: Either<i32, &str> = Either::Right("kept");
    assert_eq!(right.left_projection().map(|v| v + 1), Either::Right("kept"));
}

#[rstest]
fn left_projection_get_on_right_fails() {
    let right: Either<i32, &str> = Either::Right("kept");
    assert_eq!(
        right.left_projection().get(),
        Err(AccessError::new("LeftProjection", "Right", "get"))
    );
    assert_eq!(right.left_projection().get_or_else(|| 0), 0);
}

#[rstest]
fn projections_do_not_change_stored_variant() {
    let left: Either<i32, &str> = Either::Left(4);
    assert!(left.left_projection().into_either().is_left());
    assert!(left.right_projection().into_either().is_left());
}

// =============================================================================
// Conversion round-trips
// =============================================================================

#[rstest]
fn right_to_option_is_some() {
    let right: Either<String, i32> = Either::Right(5);
    assert_eq!(right.to_option(), Maybe::Some(5));
}

#[rstest]
fn result_roundtrip() {
    let either: Either<String, i32> = Either::from(Ok::<i32, String>(1));
    let result: Result<i32, String> = either.into();
    assert_eq!(result, Ok(1));
}

#[rstest]
fn either_merge() {
    let value: Either<&str, &str> = Either::Left("same type");
    assert_eq!(value.merge(), "same type");
}
