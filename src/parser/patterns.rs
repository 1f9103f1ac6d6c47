//! Precompiled patterns for EditML directive syntax.

use std::sync::LazyLock;

use regex::Regex;

/// Head of a move/copy directive, matched immediately after the opening
/// brace: the keyword (long or shorthand form) followed by `~` for a source
/// or `:` for a target.
pub static DIRECTIVE_HEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(move|mv|copy|cp)([~:])").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_head_matches() {
        for head in ["move~", "move:", "mv~", "mv:", "copy~", "copy:", "cp~", "cp:"] {
            assert!(DIRECTIVE_HEAD_RE.is_match(head), "should match {head}");
        }
    }

    #[test]
    fn test_directive_head_rejects() {
        for head in ["moved~", "m~", "copy}", "Move~", "+ text +}"] {
            assert!(!DIRECTIVE_HEAD_RE.is_match(head), "should not match {head}");
        }
    }
}
