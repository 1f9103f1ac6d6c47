//! Diagnostic value types shared between the markup engine and the pipeline.
//!
//! Issues are produced only by the engine phases ([`crate::parser`] and
//! [`crate::transform`]); the orchestration core reads and relays them but
//! never constructs or mutates them.

use std::fmt;

/// Classification of an [`Issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Non-fatal; the clean view is still produced.
    Warning,
    /// Fatal to output; the run exits nonzero and writes nothing.
    Error,
}

impl Severity {
    /// Label used in diagnostic lines.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A structured diagnostic describing a problem found while parsing or
/// transforming marked-up text.
///
/// Positions are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl Issue {
    /// Build a warning-severity issue.
    #[must_use]
    pub fn warning(message: impl Into<String>, line: usize, column: usize) -> Self {
        Issue {
            severity: Severity::Warning,
            message: message.into(),
            line,
            column,
        }
    }

    /// Build an error-severity issue.
    #[must_use]
    pub fn error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Issue {
            severity: Severity::Error,
            message: message.into(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Warning.label(), "Warning");
        assert_eq!(Severity::Error.label(), "Error");
        assert_eq!(format!("{}", Severity::Error), "Error");
    }

    #[test]
    fn test_issue_constructors() {
        let warning = Issue::warning("something looks off", 3, 14);
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.line, 3);
        assert_eq!(warning.column, 14);

        let error = Issue::error("something is broken", 1, 1);
        assert_eq!(error.severity, Severity::Error);
        assert_eq!(error.message, "something is broken");
    }
}
