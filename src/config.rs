//! Run configuration for editml-clean.
//!
//! Built once from CLI arguments at startup and passed by reference into
//! the orchestration; nothing mutates it afterwards. There is no config
//! file support and no global flag state.

use std::path::PathBuf;

use crate::cli::CliArgs;

/// Immutable per-run configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input file; `None` reads standard input.
    pub input: Option<PathBuf>,

    /// Output file; `None` writes standard output.
    pub output: Option<PathBuf>,

    /// Emit per-issue diagnostics to stderr.
    pub debug: bool,

    /// Escalate warnings to exit status 2.
    pub strict: bool,
}

impl Config {
    /// Derive the configuration from parsed CLI arguments.
    ///
    /// `--output` takes precedence over `-o` when both are given.
    #[must_use]
    pub fn from_args(args: &CliArgs) -> Self {
        Config {
            input: args.input.clone(),
            output: args.output.clone().or_else(|| args.output_short.clone()),
            debug: args.debug,
            strict: args.strict,
        }
    }
}
