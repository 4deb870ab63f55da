//! Failure-message formatting for payload comparisons.
//!
//! The formatter is container-agnostic: it only ever sees the unwrapped
//! expected and received payloads. Branch logic stays in the matchers.

use std::fmt::Debug;
use std::io::IsTerminal;

use similar::{ChangeTag, TextDiff};

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// How many unchanged lines to keep around each hunk when collapsing.
const CONTEXT_LINES: usize = 3;

/// Options controlling how payload diffs are rendered.
///
/// ```rust
/// use expectant::DiffOptions;
///
/// let options = DiffOptions::new().expand(true).colors(false);
/// assert!(options.expand);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiffOptions {
    /// Show every unchanged line instead of collapsing to hunks.
    pub expand: bool,
    /// Whether to wrap `-`/`+` lines in ANSI colors.
    pub colors_enabled: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            expand: false,
            colors_enabled: std::io::stdout().is_terminal(),
        }
    }
}

impl DiffOptions {
    /// Create options with defaults: collapsed diff, colors auto-detected
    /// from the terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show full context instead of collapsed hunks.
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Enable or disable ANSI colors on changed lines.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }
}

/// Render a failure message comparing an expected payload against a
/// received one.
///
/// The message starts with a header naming the matcher. If the two
/// payloads render differently, a line diff follows with `-` marking the
/// expected rendering and `+` the received one. If they render
/// identically (the values differ only under a comparator this function
/// knows nothing about), falls back to plain `Expected:`/`Received:`
/// lines.
pub(crate) fn diff_message<T, U>(
    matcher: &str,
    options: DiffOptions,
    expected: &T,
    received: &U,
) -> String
where
    T: Debug,
    U: Debug,
{
    let header = format!("expect(received).{}(expected)", matcher);
    let expected_repr = render(expected);
    let received_repr = render(received);

    if expected_repr == received_repr {
        return format!(
            "{}\n\nExpected: {}\nReceived: {}",
            header, expected_repr, received_repr
        );
    }

    let diff = TextDiff::from_lines(expected_repr.as_str(), received_repr.as_str());
    let mut body = String::new();

    if options.expand {
        for change in diff.iter_all_changes() {
            push_line(&mut body, change.tag(), change.value(), options.colors_enabled);
        }
    } else {
        for (i, group) in diff.grouped_ops(CONTEXT_LINES).iter().enumerate() {
            if i > 0 {
                body.push_str("...\n");
            }
            for op in group {
                for change in diff.iter_changes(op) {
                    push_line(&mut body, change.tag(), change.value(), options.colors_enabled);
                }
            }
        }
    }

    format!("{}\n\nDifference:\n\n{}", header, body)
}

fn push_line(out: &mut String, tag: ChangeTag, value: &str, colors: bool) {
    let (sign, color) = match tag {
        ChangeTag::Delete => ('-', GREEN),
        ChangeTag::Insert => ('+', RED),
        ChangeTag::Equal => (' ', ""),
    };
    let colorize = colors && !color.is_empty();
    if colorize {
        out.push_str(color);
    }
    out.push(sign);
    out.push(' ');
    out.push_str(value.trim_end_matches('\n').trim_end_matches('\r'));
    if colorize {
        out.push_str(RESET);
    }
    out.push('\n');
}

/// Pretty-print a payload for diffing.
///
/// Single-line string renderings are shown without their `Debug` quotes
/// so diffs read like the underlying text.
fn render<T: Debug>(value: &T) -> String {
    let repr = format!("{:#?}", value);
    if let Some(inner) = repr.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        if !inner.contains('"') && !inner.contains('\n') {
            return inner.to_string();
        }
    }
    repr
}
