//! # expectant
//!
//! A fluent assertion library for `Option` and `Result` values.
//!
//! This library provides a Jest-like API for asserting which branch a
//! container value occupies and what it holds, with readable diff output
//! on failure. It plugs straight into Rust's native `#[test]` framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use expectant::expect;
//!
//! let found = Some("value");
//!
//! expect(&found).to_be_some();
//! expect(&found).holding(&"value").to_be_some();
//!
//! let missing: Option<&str> = None;
//! expect(&missing).to_be_none();
//! ```
//!
//! ## Results
//!
//! ```rust
//! use expectant::expect;
//!
//! let parsed: Result<u32, String> = Ok(42);
//!
//! expect(&parsed).to_be_ok();
//! expect(&parsed).ok_holding(&42).to_be_ok();
//!
//! let failed: Result<u32, String> = Err(String::from("bad digit"));
//! expect(&failed).to_be_err();
//! ```
//!
//! ## Custom Equivalence
//!
//! Payloads are compared with `PartialEq` unless a comparator is
//! supplied:
//!
//! ```rust
//! use expectant::expect;
//!
//! let found = Some(String::from("VALUE"));
//! let want = String::from("value");
//!
//! expect(&found)
//!     .holding(&want)
//!     .with_eq(|a, b| a.eq_ignore_ascii_case(b))
//!     .to_be_some();
//! ```
//!
//! ## Non-Panicking Evaluation
//!
//! Every assertion method has an `evaluate_*` dual returning a
//! [`MatchOutcome`] whose failure message is only rendered on demand:
//!
//! ```rust
//! use expectant::expect;
//!
//! let found: Option<&str> = None;
//!
//! let outcome = expect(&found).evaluate_some();
//! assert!(!outcome.passed());
//! assert!(outcome.message().contains("was None"));
//! ```

pub mod diff;
pub mod expect;

// Diff configuration
pub use diff::DiffOptions;

// Fluent API
pub use expect::{expect, OptionAssertion, ResultAssertion, Subject};

// Matcher functions and their outcome record
pub use expect::{err_matcher, none_matcher, ok_matcher, some_matcher, EqFn, MatchOutcome};

// Pattern matching (feature-gated)
#[cfg(feature = "patterns")]
pub use expect::text_matches;
