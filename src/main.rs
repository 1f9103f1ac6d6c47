//! editml-clean - command-line filter for EditML editorial markup

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use editml_clean::{adjudicate, parse_args, report, run, Config, Result};

fn main() -> ExitCode {
    let config = Config::from_args(&parse_args());

    match run_app(&config) {
        Ok(code) => code,
        Err(e) => {
            // Fatal environment errors: context chain on stderr, no payload.
            eprintln!("Fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Orchestrate one run: read, process, report, adjudicate, write.
fn run_app(config: &Config) -> Result<ExitCode> {
    let input = read_input(config.input.as_deref())?;
    let result = run(&input);

    if config.debug {
        report::write_issues(&mut io::stderr().lock(), &result.issues)
            .context("could not write diagnostics")?;
    }

    let outcome = adjudicate(&result.issues, config.strict);
    if outcome.writes_output() {
        write_output(config.output.as_deref(), &result.clean_text)?;
    }

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Resolve the input source and read it to a string.
///
/// The file handle, when there is one, lives only inside this function and
/// is released on every path.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("could not read input file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("could not read standard input")?;
            Ok(text)
        }
    }
}

/// Write the clean text to the resolved destination, normalized to exactly
/// one trailing newline (a single newline for empty text).
fn write_output(path: Option<&Path>, clean_text: &str) -> Result<()> {
    let payload = clean_text.trim_end_matches('\n');
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writeln!(writer, "{payload}")
                .and_then(|()| writer.flush())
                .with_context(|| format!("could not write to output file {}", path.display()))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{payload}").context("could not write to standard output")?;
        }
    }
    Ok(())
}
