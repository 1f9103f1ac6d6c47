//! Parse-then-transform pipeline.

use crate::issue::Issue;
use crate::parser;
use crate::transform;

/// Everything one invocation produces: the clean text and the merged
/// issue list.
#[derive(Debug)]
pub struct RunResult {
    pub clean_text: String,
    pub issues: Vec<Issue>,
}

/// Run both engine phases over `input`.
///
/// Issues are concatenated parse-phase first; within a phase the engine's
/// order is preserved untouched — no sorting, no deduplication, because the
/// order reflects document position within each phase.
#[must_use]
pub fn run(input: &str) -> RunResult {
    let (nodes, mut issues) = parser::parse(input);
    let (clean_text, transform_issues) = transform::clean_view(&nodes);
    issues.extend(transform_issues);
    RunResult { clean_text, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;

    #[test]
    fn test_clean_input_has_no_issues() {
        let result = run("Hello{+ world+}.");
        assert_eq!(result.clean_text, "Hello world.");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_parse_issues_precede_transform_issues() {
        // The unresolved target sits earlier in the document than the
        // unterminated span, but phase order wins in the merged list.
        let result = run("{move:nowhere} then {+ dangling");
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].message.contains("unterminated insertion"));
        assert!(result.issues[1]
            .message
            .contains("unresolved move reference 'nowhere'"));
    }

    #[test]
    fn test_transform_runs_despite_parse_errors() {
        // Best-effort continuation: the parse error does not suppress the
        // clean view of the rest of the document.
        let result = run("kept {-cut-} tail {=unterminated");
        assert_eq!(result.clean_text, "kept  tail {=unterminated");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_empty_input() {
        let result = run("");
        assert!(result.clean_text.is_empty());
        assert!(result.issues.is_empty());
    }
}
