//! The result record produced by every matcher.

use std::fmt;

/// Outcome of evaluating a matcher against a received value.
///
/// The failure message is held as a closure and only rendered when
/// `message()` is called, so a passing assertion never pays for
/// formatting. Calling `message()` repeatedly yields the same text.
///
/// # Example
///
/// ```rust
/// use expectant::none_matcher;
///
/// let value: Option<&str> = None;
/// let outcome = none_matcher(&value);
/// assert!(outcome.passed());
/// ```
pub struct MatchOutcome<'a> {
    pass: bool,
    message: Box<dyn Fn() -> String + 'a>,
}

impl<'a> MatchOutcome<'a> {
    /// Create an outcome from a pass flag and a lazy message.
    pub fn new(pass: bool, message: impl Fn() -> String + 'a) -> Self {
        Self {
            pass,
            message: Box::new(message),
        }
    }

    /// Whether the assertion passed.
    pub fn passed(&self) -> bool {
        self.pass
    }

    /// Render the failure message.
    ///
    /// Valid to call on a passing outcome too; the text then describes
    /// what the matcher checked for.
    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl fmt::Debug for MatchOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchOutcome")
            .field("pass", &self.pass)
            .finish_non_exhaustive()
    }
}
