//! Processing pipeline.
//!
//! This module orchestrates the two-phase engine run:
//!
//! **Phase 1 - Parse:**
//! - Scan the raw text into positioned markup nodes
//! - Collect parse issues (unterminated spans, malformed directives)
//!
//! **Phase 2 - Transform:**
//! - Render the clean view from the nodes, resolving move/copy tags
//! - Collect transform issues (unresolved references, unplaced sources)
//!
//! The transform always runs, even when parsing reported issues: a degraded
//! clean view beats no output when only warnings occurred. The main entry
//! point is [`run`], a pure function with no I/O and no process exit.

pub mod pipeline;

pub use pipeline::{run, RunResult};
