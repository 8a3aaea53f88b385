//! Integration tests for the do-notation interpreter and `mdo!`.

#![cfg(feature = "compose")]

use std::cell::Cell;
use std::convert::Infallible;

use monadic::compose::{
    DoError, DoScope, DoState, ShortCircuit, Step, Suspend, lift_do, run_do, try_run_do,
};
use monadic::control::{Either, Exception, Maybe, Try};
use monadic::mdo;
use rstest::rstest;

// =============================================================================
// Sequential binds
// =============================================================================

#[rstest]
fn all_rights_sum_to_right() {
    let result = run_do(|scope| {
        let one = scope.bind(Either::<&str, i32>::Right(1))?;
        let two = 2;
        let three = scope.bind(Either::Right(3))?;
        Ok(one + two + three)
    });
    assert_eq!(result, Either::Right(6));
}

#[rstest]
fn left_stops_block_before_later_statements() {
    let assigned = Cell::new(false);
    let result = run_do(|scope| {
        let one = scope.bind(Either::<&str, i32>::Right(1))?;
        let two: i32 = scope.bind(Either::Left("boom"))?;
        assigned.set(true);
        let three = scope.bind(Either::Right(3))?;
        Ok(one + two + three)
    });
    assert_eq!(result, Either::Left("boom"));
    assert!(!assigned.get());
}

#[rstest]
fn macro_form_sums_rights() {
    let result = mdo! {
        one <= Either::<&str, i32>::Right(1);
        let two = 2;
        three <= Either::Right(3);
        one + two + three
    };
    assert_eq!(result, Either::Right(6));
}

// =============================================================================
// Short-circuit purity
// =============================================================================

#[rstest]
#[case(Maybe::Some(2), 2, Maybe::Some(3))]
#[case(Maybe::Void, 1, Maybe::Void)]
fn side_effects_after_termination_never_run(
    #[case] second: Maybe<i32>,
    #[case] expected_effects: usize,
    #[case] expected: Maybe<i32>,
) {
    let effects = Cell::new(0);
    let result = run_do(|scope| {
        let a = scope.bind(Maybe::Some(1))?;
        effects.set(effects.get() + 1);
        let b = scope.bind(second)?;
        effects.set(effects.get() + 1);
        Ok(a + b)
    });
    assert_eq!(result, expected);
    assert_eq!(effects.get(), expected_effects);
}

#[rstest]
fn termination_value_is_returned_unchanged() {
    let error = Exception::msg("first failure");
    let result: Try<i32> = run_do(|scope| {
        let a = scope.bind(Try::<i32>::Success(1))?;
        let b = scope.bind(Try::<i32>::Failure(error.clone()))?;
        let c = scope.bind(Try::<i32>::Failure(Exception::msg("second failure")))?;
        Ok(a + b + c)
    });
    assert_eq!(result, Try::Failure(error));
}

#[rstest]
fn first_bind_failing_skips_everything() {
    let reached = Cell::new(false);
    let result = mdo! {
        x <= Maybe::<i32>::Void;
        let _touched = reached.set(true);
        x
    };
    assert_eq!(result, Maybe::Void);
    assert!(!reached.get());
}

// =============================================================================
// Decorator form
// =============================================================================

#[rstest]
fn lift_do_is_reusable() {
    let parse_positive = lift_do(|scope, text: &str| {
        let parsed = scope.bind(Try::from(text.parse::<i32>().map_err(Exception::new)))?;
        let positive = scope.bind(if parsed > 0 {
            Try::Success(parsed)
        } else {
            Try::Failure(Exception::msg("not positive"))
        })?;
        Ok(positive * 2)
    });

    assert_eq!(parse_positive("21"), Try::Success(42));
    assert_eq!(
        parse_positive("-1"),
        Try::Failure(Exception::msg("not positive"))
    );
    assert!(parse_positive("x").is_failure());
}

#[rstest]
fn lift_do_with_either_and_bind_all() {
    let sum_all = lift_do(|scope, values: Vec<Either<String, i32>>| {
        let bound = scope.bind_all(values)?;
        Ok(bound.iter().sum::<i32>())
    });

    assert_eq!(sum_all(vec![Either::Right(1), Either::Right(2)]), Either::Right(3));
    assert_eq!(
        sum_all(vec![Either::Right(1), Either::Left("bad".to_string())]),
        Either::Left("bad".to_string())
    );
}

// =============================================================================
// Programmer errors
// =============================================================================

#[rstest]
fn non_monadic_block_is_reported() {
    let result = try_run_do(|_scope: &mut DoScope<Either<String, Infallible>>| Ok(1));
    assert_eq!(result, Err(DoError::NonMonadicBlock));
}

#[rstest]
#[should_panic(expected = "do-block finished without binding a monadic value")]
fn non_monadic_block_panics_in_run_do() {
    let _ = run_do(|_scope: &mut DoScope<Maybe<Infallible>>| Ok("no bind"));
}

#[rstest]
fn swallowed_signal_is_reported() {
    let result = try_run_do(|scope| {
        if scope.bind(Either::<&str, i32>::Left("ignored")).is_err() {
            let recovered = scope.bind(Either::<&str, i32>::Right(0))?;
            return Ok(recovered);
        }
        Ok(1)
    });
    assert_eq!(result, Err(DoError::SignalSwallowed));
}

#[rstest]
fn ignored_left_then_value_is_reported() {
    let result = try_run_do(|scope| {
        let _ignored = scope.bind(Either::<&str, i32>::Left("ignored"));
        Ok(5)
    });
    assert_eq!(result, Err(DoError::SignalSwallowed));
}

#[rstest]
#[should_panic(expected = "do-block kept running after a short-circuit")]
fn ignored_void_then_value_panics_in_run_do() {
    let _ = run_do(|scope| {
        let _ignored = scope.bind(Maybe::<i32>::Void);
        Ok(5)
    });
}

#[rstest]
#[should_panic(expected = "do-block kept running after a short-circuit")]
fn swallowed_signal_panics_in_run_do() {
    let _ = run_do(|scope| {
        let _ignored = scope.bind(Maybe::<i32>::Void);
        scope.bind(Maybe::Some(1))
    });
}

#[rstest]
fn scope_reports_state_inside_block() {
    let observed = Cell::new(None);
    let _ = run_do(|scope| {
        let _ = scope.bind(Maybe::Some(()))?;
        observed.set(Some((scope.state(), scope.binds())));
        Ok(())
    });
    assert_eq!(observed.get(), Some((DoState::Running, 1)));
}

// =============================================================================
// Iteration hook
// =============================================================================

#[rstest]
fn suspend_steps_are_explicit() {
    let steps: Vec<Step<i32, ShortCircuit<Maybe<Infallible>>>> =
        vec![Maybe::Some(1).suspend(), Maybe::Void.suspend()];
    assert_eq!(
        steps,
        vec![
            Step::Continue(1),
            Step::Stop(ShortCircuit::new(Maybe::Void))
        ]
    );
}

#[rstest]
fn short_circuit_resumes_at_any_payload_type() {
    let signal = ShortCircuit::new(Try::<Infallible>::Failure(Exception::msg("e")));
    let as_string: Try<String> = signal.clone().resume();
    let as_unit: Try<()> = signal.resume();
    assert_eq!(as_string, Try::Failure(Exception::msg("e")));
    assert_eq!(as_unit, Try::Failure(Exception::msg("e")));
}

#[rstest]
fn shared_io_error_short_circuits() {
    use std::sync::Arc;

    let missing = || -> Either<Arc<std::io::Error>, String> {
        Either::Left(Arc::new(std::io::Error::from(std::io::ErrorKind::NotFound)))
    };
    let result = run_do(|scope| {
        let text = scope.bind(missing())?;
        Ok(text.len())
    });
    assert_eq!(
        result.fold(|error| error.kind(), |_| std::io::ErrorKind::Other),
        std::io::ErrorKind::NotFound
    );
}
