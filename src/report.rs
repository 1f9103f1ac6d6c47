//! Per-issue diagnostic reporting for `--debug`.
//!
//! Purely observational: reporting never changes the exit status or the
//! output bytes, and it runs even for outcomes that suppress the output
//! writer, so an operator can see why nothing was produced.

use std::io::{self, Write};

use crate::issue::Issue;

/// Write one diagnostic line per issue, in the order given:
///
/// ```text
/// [Warning|Error] <message> (L<line>:C<col>)
/// ```
pub fn write_issues<W: Write>(sink: &mut W, issues: &[Issue]) -> io::Result<()> {
    for issue in issues {
        writeln!(
            sink,
            "[{}] {} (L{}:C{})",
            issue.severity.label(),
            issue.message,
            issue.line,
            issue.column
        )?;
    }
    Ok(())
}
