//! Command-line interface for editml-clean.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Input file to read (standard input when absent)
    pub input: Option<PathBuf>,

    /// Output path given with `--output`
    pub output: Option<PathBuf>,

    /// Output path given with `-o`
    pub output_short: Option<PathBuf>,

    /// Emit per-issue diagnostics to stderr
    pub debug: bool,

    /// Escalate warnings to exit status 2
    pub strict: bool,
}

/// Build the clap Command for parsing CLI arguments
///
/// `-o` and `--output` are deliberately two distinct options; when both are
/// given, `--output` takes precedence (see [`crate::config::Config`]).
#[must_use]
pub fn build_cli() -> Command {
    Command::new("editml-clean")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Strip EditML editorial markup and emit clean prose")
        .arg(
            Arg::new("input")
                .help("Input file (reads standard input when omitted)")
                .value_name("FILE")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output-short")
                .short('o')
                .help("Write output to the specified file instead of stdout (shorthand)")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help("Write output to the specified file instead of stdout")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Emit parse/transform issues (warnings/errors) to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Treat warnings as errors (exit status 2 on any warning)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        output_short: matches.get_one::<PathBuf>("output-short").cloned(),
        debug: matches.get_flag("debug"),
        strict: matches.get_flag("strict"),
    }
}
