//! Fake record CLI.
//!
//! This binary delegates to `fake_records::cli` for parsing and rendering,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use fake_records::cli::{CliError, ParseOutcome, USAGE, parse_args, render};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "error: {err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_stdout(USAGE);
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let output = render(&options)?;
            write_stdout(&output);
            write_stdout("\n");
            Ok(())
        }
    }
}

fn write_stdout(text: &str) {
    if let Err(err) = io::stdout().lock().write_all(text.as_bytes()) {
        drop(err);
    }
}
