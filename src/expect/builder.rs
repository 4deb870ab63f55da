//! Fluent assertion builders for `Option` and `Result` values.
//!
//! This module provides the entry point and builder types:
//! - `expect()` - Entry point, dispatching on the subject type
//! - `Subject` - The trait a type implements to plug into `expect()`
//! - `OptionAssertion` - Builder for assertions on an `Option`
//! - `ResultAssertion` - Builder for assertions on a `Result`

use std::fmt::Debug;
#[cfg(feature = "patterns")]
use std::fmt::Display;

use super::matchers::{err_matcher, none_matcher, ok_matcher, some_matcher};
use super::outcome::MatchOutcome;
#[cfg(feature = "patterns")]
use super::patterns::text_matches;
use crate::diff::DiffOptions;

/// Create an expectation on a container value.
///
/// This is the entry point for the fluent assertion API. Anything
/// implementing [`Subject`] can be passed; references to `Option` and
/// `Result` are provided out of the box.
///
/// # Example
///
/// ```rust
/// use expectant::expect;
///
/// let found = Some("value");
/// expect(&found).to_be_some();
///
/// let parsed: Result<u32, String> = "7".parse().map_err(|_| "bad".to_string());
/// expect(&parsed).to_be_ok();
/// ```
pub fn expect<S: Subject>(subject: S) -> S::Assertion {
    subject.into_assertion()
}

/// A value `expect()` knows how to build assertions for.
///
/// Implementing this trait for a new container type is how its matcher
/// set gets registered — an explicit, compile-time step rather than an
/// ambient side effect.
pub trait Subject {
    /// The assertion builder this subject produces.
    type Assertion;

    /// Wrap the subject in its assertion builder.
    fn into_assertion(self) -> Self::Assertion;
}

impl<'a, A> Subject for &'a Option<A> {
    type Assertion = OptionAssertion<'a, A>;

    fn into_assertion(self) -> OptionAssertion<'a, A> {
        OptionAssertion::new(self)
    }
}

impl<'a, T, E> Subject for &'a Result<T, E> {
    type Assertion = ResultAssertion<'a, T, E>;

    fn into_assertion(self) -> ResultAssertion<'a, T, E> {
        ResultAssertion::new(self)
    }
}

/// Builder for assertions on an `Option` value.
///
/// Methods like `to_be_some()` evaluate immediately and panic on failure.
/// Use the `evaluate_*` duals for non-panicking evaluation.
pub struct OptionAssertion<'a, A> {
    received: &'a Option<A>,
    expected: Option<&'a A>,
    eq: Option<Box<dyn Fn(&A, &A) -> bool + 'a>>,
    options: DiffOptions,
}

impl<'a, A> OptionAssertion<'a, A> {
    /// Create a new assertion builder for an `Option`.
    pub fn new(received: &'a Option<A>) -> Self {
        Self {
            received,
            expected: None,
            eq: None,
            options: DiffOptions::default(),
        }
    }

    // =========================================================================
    // Builder methods (chainable)
    // =========================================================================

    /// Set the payload the container is expected to hold.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let found = Some("value");
    /// expect(&found).holding(&"value").to_be_some();
    /// ```
    pub fn holding(mut self, expected: &'a A) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Compare payloads with a custom equivalence instead of `PartialEq`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let found = Some(String::from("VALUE"));
    /// let want = String::from("value");
    /// expect(&found)
    ///     .holding(&want)
    ///     .with_eq(|a, b| a.eq_ignore_ascii_case(b))
    ///     .to_be_some();
    /// ```
    pub fn with_eq(mut self, eq: impl Fn(&A, &A) -> bool + 'a) -> Self {
        self.eq = Some(Box::new(eq));
        self
    }

    /// Show full diff context instead of collapsed hunks.
    pub fn expand(mut self, expand: bool) -> Self {
        self.options = self.options.expand(expand);
        self
    }

    /// Enable or disable ANSI colors in failure messages.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.options = self.options.colors(enabled);
        self
    }

    // =========================================================================
    // Assertion methods (panic on failure)
    // =========================================================================

    /// Assert the container is `None`.
    ///
    /// # Panics
    ///
    /// Panics if the container holds a payload.
    pub fn to_be_none(&self) {
        finish(self.evaluate_none());
    }

    // =========================================================================
    // Non-panicking evaluation
    // =========================================================================

    /// Evaluate the `None` expectation without panicking.
    pub fn evaluate_none(&self) -> MatchOutcome<'a> {
        none_matcher(self.received)
    }
}

impl<'a, A: Debug + PartialEq> OptionAssertion<'a, A> {
    /// Assert the container is `Some`, holding the expected payload if
    /// one was set with [`holding`](Self::holding).
    ///
    /// # Panics
    ///
    /// Panics if the container is `None`, or holds a payload the
    /// comparator rejects.
    pub fn to_be_some(&self) {
        finish(self.evaluate_some());
    }

    /// Evaluate the `Some` expectation without panicking.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let found: Option<&str> = None;
    /// let outcome = expect(&found).evaluate_some();
    /// assert!(!outcome.passed());
    /// ```
    pub fn evaluate_some(&self) -> MatchOutcome<'a> {
        some_matcher(self.options, self.received, self.expected, self.eq.as_deref())
    }
}

#[cfg(feature = "patterns")]
impl<'a, A: Display> OptionAssertion<'a, A> {
    /// Assert the container holds a payload whose rendering matches a
    /// glob pattern, a regex, or a literal string (first that applies).
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let found = Some("report.txt");
    /// expect(&found).to_be_some_matching("*.txt");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the container is `None` or the rendering does not match.
    pub fn to_be_some_matching(&self, pattern: &str) {
        finish(self.evaluate_some_matching(pattern));
    }

    /// Evaluate the pattern expectation without panicking.
    pub fn evaluate_some_matching(&self, pattern: &str) -> MatchOutcome<'static> {
        match self.received {
            None => MatchOutcome::new(false, || {
                String::from("Option expected to be Some, but was None")
            }),
            Some(got) => pattern_outcome(pattern, got),
        }
    }
}

/// Builder for assertions on a `Result` value.
///
/// Methods like `to_be_ok()` evaluate immediately and panic on failure.
/// Use the `evaluate_*` duals for non-panicking evaluation.
pub struct ResultAssertion<'a, T, E> {
    received: &'a Result<T, E>,
    expected_ok: Option<&'a T>,
    expected_err: Option<&'a E>,
    eq_ok: Option<Box<dyn Fn(&T, &T) -> bool + 'a>>,
    eq_err: Option<Box<dyn Fn(&E, &E) -> bool + 'a>>,
    options: DiffOptions,
}

impl<'a, T, E> ResultAssertion<'a, T, E> {
    /// Create a new assertion builder for a `Result`.
    pub fn new(received: &'a Result<T, E>) -> Self {
        Self {
            received,
            expected_ok: None,
            expected_err: None,
            eq_ok: None,
            eq_err: None,
            options: DiffOptions::default(),
        }
    }

    // =========================================================================
    // Builder methods (chainable)
    // =========================================================================

    /// Set the payload the success branch is expected to hold.
    pub fn ok_holding(mut self, expected: &'a T) -> Self {
        self.expected_ok = Some(expected);
        self
    }

    /// Set the payload the failure branch is expected to hold.
    pub fn err_holding(mut self, expected: &'a E) -> Self {
        self.expected_err = Some(expected);
        self
    }

    /// Compare success payloads with a custom equivalence.
    pub fn with_ok_eq(mut self, eq: impl Fn(&T, &T) -> bool + 'a) -> Self {
        self.eq_ok = Some(Box::new(eq));
        self
    }

    /// Compare failure payloads with a custom equivalence.
    pub fn with_err_eq(mut self, eq: impl Fn(&E, &E) -> bool + 'a) -> Self {
        self.eq_err = Some(Box::new(eq));
        self
    }

    /// Show full diff context instead of collapsed hunks.
    pub fn expand(mut self, expand: bool) -> Self {
        self.options = self.options.expand(expand);
        self
    }

    /// Enable or disable ANSI colors in failure messages.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.options = self.options.colors(enabled);
        self
    }
}

impl<'a, T: Debug + PartialEq, E> ResultAssertion<'a, T, E> {
    /// Assert the result is `Ok`, holding the expected payload if one was
    /// set with [`ok_holding`](Self::ok_holding).
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let parsed: Result<u32, String> = Ok(42);
    /// expect(&parsed).ok_holding(&42).to_be_ok();
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the result is `Err`, or holds a payload the comparator
    /// rejects.
    pub fn to_be_ok(&self) {
        finish(self.evaluate_ok());
    }

    /// Evaluate the `Ok` expectation without panicking.
    pub fn evaluate_ok(&self) -> MatchOutcome<'a> {
        ok_matcher(
            self.options,
            self.received,
            self.expected_ok,
            self.eq_ok.as_deref(),
        )
    }
}

impl<'a, T, E: Debug + PartialEq> ResultAssertion<'a, T, E> {
    /// Assert the result is `Err`, holding the expected payload if one
    /// was set with [`err_holding`](Self::err_holding).
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok`, or holds a payload the comparator
    /// rejects.
    pub fn to_be_err(&self) {
        finish(self.evaluate_err());
    }

    /// Evaluate the `Err` expectation without panicking.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let parsed: Result<u32, String> = Err(String::from("bad digit"));
    /// let outcome = expect(&parsed).evaluate_err();
    /// assert!(outcome.passed());
    /// ```
    pub fn evaluate_err(&self) -> MatchOutcome<'a> {
        err_matcher(
            self.options,
            self.received,
            self.expected_err,
            self.eq_err.as_deref(),
        )
    }
}

#[cfg(feature = "patterns")]
impl<'a, T: Display, E> ResultAssertion<'a, T, E> {
    /// Assert the success payload's rendering matches a glob pattern, a
    /// regex, or a literal string.
    ///
    /// # Panics
    ///
    /// Panics if the result is `Err` or the rendering does not match.
    pub fn to_be_ok_matching(&self, pattern: &str) {
        finish(self.evaluate_ok_matching(pattern));
    }

    /// Evaluate the success-branch pattern expectation without panicking.
    pub fn evaluate_ok_matching(&self, pattern: &str) -> MatchOutcome<'static> {
        match self.received {
            Err(_) => MatchOutcome::new(false, || {
                String::from("Result expected to be Ok, but was Err")
            }),
            Ok(got) => pattern_outcome(pattern, got),
        }
    }
}

#[cfg(feature = "patterns")]
impl<'a, T, E: Display> ResultAssertion<'a, T, E> {
    /// Assert the failure payload's rendering matches a glob pattern, a
    /// regex, or a literal string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expectant::expect;
    ///
    /// let io: Result<(), String> = Err(String::from("connection to db-7 refused"));
    /// expect(&io).to_be_err_matching("connection to .* refused");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the result is `Ok` or the rendering does not match.
    pub fn to_be_err_matching(&self, pattern: &str) {
        finish(self.evaluate_err_matching(pattern));
    }

    /// Evaluate the failure-branch pattern expectation without panicking.
    pub fn evaluate_err_matching(&self, pattern: &str) -> MatchOutcome<'static> {
        match self.received {
            Ok(_) => MatchOutcome::new(false, || {
                String::from("Result expected to be Err, but was Ok")
            }),
            Err(got) => pattern_outcome(pattern, got),
        }
    }
}

#[cfg(feature = "patterns")]
fn pattern_outcome<A: Display>(pattern: &str, got: &A) -> MatchOutcome<'static> {
    let rendered = got.to_string();
    let pass = text_matches(pattern, &rendered);
    let pattern = pattern.to_owned();
    MatchOutcome::new(pass, move || {
        format!("payload `{}` does not match pattern `{}`", rendered, pattern)
    })
}

fn finish(outcome: MatchOutcome<'_>) {
    if !outcome.passed() {
        panic!("assertion failed: {}", outcome.message());
    }
}
