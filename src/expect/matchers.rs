//! The four matcher functions behind the fluent API.
//!
//! Each matcher is a pure function of its inputs: it computes the pass
//! flag up front and defers all message formatting to the returned
//! [`MatchOutcome`]. Expected payloads travel as `Option<&A>`, so whether
//! a comparison happens is keyed on the parameter being supplied, not on
//! any property of the payload itself — an expected empty string is still
//! an expectation.

use std::fmt::Debug;

use super::outcome::MatchOutcome;
use crate::diff::{diff_message, DiffOptions};

/// Pluggable equivalence relation over a payload type.
///
/// Expected to be symmetric and reflexive. Matchers fall back to
/// `PartialEq::eq` when no comparator is supplied.
pub type EqFn<A> = dyn Fn(&A, &A) -> bool;

/// Expect an `Option` to be `None`.
///
/// # Example
///
/// ```rust
/// use expectant::none_matcher;
///
/// let value = Some("value");
/// let outcome = none_matcher(&value);
/// assert!(!outcome.passed());
/// assert!(outcome.message().contains("was Some"));
/// ```
pub fn none_matcher<A>(received: &Option<A>) -> MatchOutcome<'_> {
    MatchOutcome::new(received.is_none(), || {
        String::from("Option expected to be None, but was Some")
    })
}

/// Expect an `Option` to be `Some`, optionally holding an expected
/// payload under an optional comparator.
///
/// Without an expected payload, any `Some` passes. With one, the payload
/// must satisfy the comparator (`PartialEq::eq` when `eq` is `None`).
/// The failure message is a payload diff when the container held the
/// wrong value, or a branch mismatch when it was `None`.
pub fn some_matcher<'a, A: Debug + PartialEq>(
    options: DiffOptions,
    received: &'a Option<A>,
    expected: Option<&'a A>,
    eq: Option<&(dyn Fn(&A, &A) -> bool + 'a)>,
) -> MatchOutcome<'a> {
    let strict = |a: &A, b: &A| a == b;
    let eq = eq.unwrap_or(&strict);

    match expected {
        None => MatchOutcome::new(received.is_some(), || {
            String::from("Option expected to be Some, but was None")
        }),
        Some(want) => {
            let pass = matches!(received, Some(got) if eq(want, got));
            MatchOutcome::new(pass, move || match received {
                None => String::from("Option expected to be Some, but was None"),
                Some(got) => diff_message("to_be_some", options, want, got),
            })
        }
    }
}

/// Expect a `Result` to be `Err`, optionally holding an expected failure
/// payload under an optional comparator.
///
/// An `Ok` received value always produces the branch-mismatch message,
/// even when an expected payload was given; the payload comparison never
/// runs against the wrong branch.
pub fn err_matcher<'a, T, E: Debug + PartialEq>(
    options: DiffOptions,
    received: &'a Result<T, E>,
    expected: Option<&'a E>,
    eq: Option<&(dyn Fn(&E, &E) -> bool + 'a)>,
) -> MatchOutcome<'a> {
    let strict = |a: &E, b: &E| a == b;
    let eq = eq.unwrap_or(&strict);

    match expected {
        None => MatchOutcome::new(received.is_err(), || {
            String::from("Result expected to be Err, but was Ok")
        }),
        Some(want) => {
            let pass = matches!(received, Err(got) if eq(want, got));
            MatchOutcome::new(pass, move || match received {
                Ok(_) => String::from("Result expected to be Err, but was Ok"),
                Err(got) => diff_message("to_be_err", options, want, got),
            })
        }
    }
}

/// Expect a `Result` to be `Ok`, optionally holding an expected success
/// payload under an optional comparator.
///
/// Mirror image of [`err_matcher`]: an `Err` received value always
/// produces the branch-mismatch message regardless of the expected
/// payload.
pub fn ok_matcher<'a, T: Debug + PartialEq, E>(
    options: DiffOptions,
    received: &'a Result<T, E>,
    expected: Option<&'a T>,
    eq: Option<&(dyn Fn(&T, &T) -> bool + 'a)>,
) -> MatchOutcome<'a> {
    let strict = |a: &T, b: &T| a == b;
    let eq = eq.unwrap_or(&strict);

    match expected {
        None => MatchOutcome::new(received.is_ok(), || {
            String::from("Result expected to be Ok, but was Err")
        }),
        Some(want) => {
            let pass = matches!(received, Ok(got) if eq(want, got));
            MatchOutcome::new(pass, move || match received {
                Err(_) => String::from("Result expected to be Ok, but was Err"),
                Ok(got) => diff_message("to_be_ok", options, want, got),
            })
        }
    }
}
