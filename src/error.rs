//! Error types and result aliases for editml-clean.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! Fatal environment errors (unreadable input, uncreatable output) travel
//! through [`Result`] up to the `main` boundary, which reports them and
//! terminates. Problems found in the markup itself are not errors in this
//! sense; they are [`crate::issue::Issue`] values collected by the pipeline.

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
