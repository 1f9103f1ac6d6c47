//! Integration tests for the parse-then-transform pipeline
//!
//! These exercise the library entry points the way the binary does, without
//! touching the filesystem or process exit codes.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use editml_clean::{adjudicate, run, Outcome, Severity};

/// Table of supported EditML inputs and their clean renderings.
#[test]
fn test_supported_markup_forms() {
    let cases = [
        ("simple addition", "Hello{+ world+}.", "Hello world."),
        ("simple deletion", "This is{- not-} good.", "This is good."),
        (
            "comment removal",
            "A key point.{>Remember to check this later.<}",
            "A key point.",
        ),
        ("highlight removal", "The answer is {=42=}.", "The answer is 42."),
        (
            "combination of edits",
            "Please {-review-}{+read+} this {=document=} carefully.",
            "Please read this document carefully.",
        ),
        (
            "move syntax",
            "Let's put B here: {move:word}. And here is {move~A~word}.",
            "Let's put B here: A. And here is .",
        ),
        (
            "copy syntax",
            "Here is the original: {copy~A~word}. And here is a copy: {copy:word}.",
            "Here is the original: A. And here is a copy: A.",
        ),
        (
            "shorthand move syntax",
            "Third.{mv~First~t1}Second.{mv:t1}",
            "Third.Second.First",
        ),
        ("shorthand copy syntax", "{cp~A~t1}BC {cp:t1}", "ABC A"),
    ];

    for (name, input, expected) in cases {
        let result = run(input);
        assert_eq!(
            result.clean_text, expected,
            "mismatched text for case '{name}'"
        );
        assert!(
            result.issues.is_empty(),
            "unexpected issues for case '{name}': {:?}",
            result.issues
        );
    }
}

#[test]
fn test_clean_run_adjudicates_to_exit_zero() {
    let result = run("No markup at all.");
    assert_eq!(adjudicate(&result.issues, false), Outcome::Clean);
    assert_eq!(adjudicate(&result.issues, true), Outcome::Clean);
}

#[test]
fn test_unresolved_reference_adjudicates_to_exit_one() {
    let result = run("Place it here: {move:ghost}.");
    assert!(result
        .issues
        .iter()
        .any(|i| i.severity == Severity::Error));
    let outcome = adjudicate(&result.issues, false);
    assert_eq!(outcome, Outcome::Errored);
    assert_eq!(outcome.exit_code(), 1);
    assert!(!outcome.writes_output());
}

#[test]
fn test_orphaned_move_source_warns_only() {
    let result = run("Keep{move~gone~orphan} going.");
    assert_eq!(result.clean_text, "Keep going.");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].severity, Severity::Warning);

    assert_eq!(adjudicate(&result.issues, false), Outcome::Warned);
    assert_eq!(adjudicate(&result.issues, true), Outcome::StrictWarned);
}

#[test]
fn test_merged_issues_keep_phase_order() {
    // A transform error (unresolved reference) appears before the input
    // position of nothing; a parse error appears after it in the document.
    // Phase order, not document order, decides the merged sequence.
    let result = run("{cp:ghost} and {+ dangling");
    assert_eq!(result.issues.len(), 2);
    assert!(
        result.issues[0].message.contains("unterminated insertion"),
        "parse issue first, got: {:?}",
        result.issues
    );
    assert!(result.issues[1]
        .message
        .contains("unresolved copy reference 'ghost'"));
}

#[test]
fn test_issue_positions_are_one_based() {
    let result = run("line one\nhere: {move:ghost}");
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].line, 2);
    assert_eq!(result.issues[0].column, 7);
}
