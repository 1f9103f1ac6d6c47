//! Severity policy and exit-code decision.
//!
//! One scan over the merged issue list classifies a run; the classification
//! alone decides the exit status and whether the clean text is written at
//! all. Process termination itself stays at the `main` boundary so this
//! stays a pure, testable function.

use crate::issue::{Issue, Severity};

/// Classification of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No issues at all.
    Clean,
    /// Warnings only, strict mode off.
    Warned,
    /// Warnings only, strict mode on.
    StrictWarned,
    /// At least one error-severity issue.
    Errored,
}

impl Outcome {
    /// Process exit status for this outcome.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Clean | Outcome::Warned => 0,
            Outcome::Errored => 1,
            Outcome::StrictWarned => 2,
        }
    }

    /// Whether the clean text is written at all. No partial output is ever
    /// committed once an error-severity issue is observed.
    #[must_use]
    pub fn writes_output(self) -> bool {
        matches!(self, Outcome::Clean | Outcome::Warned)
    }
}

/// Classify a run from its merged issue list.
///
/// Strict precedence: a single `Error` anywhere wins over any number of
/// warnings, regardless of strict mode.
#[must_use]
pub fn adjudicate(issues: &[Issue], strict: bool) -> Outcome {
    if issues.iter().any(|i| i.severity == Severity::Error) {
        return Outcome::Errored;
    }
    let has_warning = issues.iter().any(|i| i.severity == Severity::Warning);
    match (has_warning, strict) {
        (true, true) => Outcome::StrictWarned,
        (true, false) => Outcome::Warned,
        (false, _) => Outcome::Clean,
    }
}
