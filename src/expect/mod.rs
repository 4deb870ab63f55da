//! Fluent assertions for `Option` and `Result` values.
//!
//! This module provides a Jest-like API for asserting on container
//! values. Assertions evaluate immediately (panic on failure) when using
//! methods like `to_be_some()`, or can be evaluated non-destructively
//! using the `evaluate_*` methods.
//!
//! # Example
//!
//! ```rust
//! use expectant::expect;
//!
//! let found = Some("value");
//!
//! // Immediate evaluation (panics on failure)
//! expect(&found).holding(&"value").to_be_some();
//!
//! // Non-panicking evaluation
//! let outcome = expect(&found).evaluate_none();
//! assert!(!outcome.passed());
//! ```

mod builder;
mod matchers;
mod outcome;
#[cfg(feature = "patterns")]
mod patterns;

pub use builder::{expect, OptionAssertion, ResultAssertion, Subject};
pub use matchers::{err_matcher, none_matcher, ok_matcher, some_matcher, EqFn};
pub use outcome::MatchOutcome;
#[cfg(feature = "patterns")]
pub use patterns::text_matches;

#[cfg(test)]
mod tests;
