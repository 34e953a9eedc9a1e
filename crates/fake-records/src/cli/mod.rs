//! Command-line support for printing generated records.
//!
//! This module provides the parsing and rendering helpers behind the
//! `fake-records` binary. The binary only wires them to the process
//! arguments and standard streams, so the behaviour is testable without
//! spawning a subprocess.

mod error;

use std::fmt;

use tracing::debug;

pub use self::error::CliError;
use crate::generator::{GeneratorOptions, RecordGenerator};
use crate::pools::Locale;
use crate::sampling::Seed;

/// Records printed when `--count` is not supplied.
pub const DEFAULT_COUNT: usize = 1;

/// Help text printed for `--help`.
pub const USAGE: &str = concat!(
    "Usage: fake-records [options]\n",
    "\n",
    "Options:\n",
    "  --count <number>   Number of records to generate (default: 1)\n",
    "  --seed <value>     Seed for the random number generator\n",
    "  --locale <locale>  Locale to use (en, es, fr; default: en)\n",
    "  --compact          Print JSON on a single line\n",
    "  --pretty           Indent the JSON output (default)\n",
    "  -h, --help         Show this help message\n",
);

/// Parsed options for the record CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    count: usize,
    seed: Option<Seed>,
    locale: Locale,
    pretty: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            locale: Locale::default(),
            pretty: true,
        }
    }
}

impl Options {
    /// Returns the number of records to print.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the seed, if one was supplied.
    #[must_use]
    pub const fn seed(&self) -> Option<&Seed> {
        self.seed.as_ref()
    }

    /// Returns the selected locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns `true` when output is pretty-printed.
    #[must_use]
    pub const fn pretty(&self) -> bool {
        self.pretty
    }

    /// Returns the generator configuration these options describe.
    #[must_use]
    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            seed: self.seed.clone(),
            locale: self.locale,
        }
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Parses CLI arguments, excluding the program name.
///
/// # Errors
///
/// Returns [`CliError`] when a flag is unknown, lacks a value, or carries a
/// value that cannot be used.
///
/// # Example
///
/// ```
/// use fake_records::Locale;
/// use fake_records::cli::{ParseOutcome, parse_args};
///
/// let args = ["--count", "5", "--locale", "es"].map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// assert_eq!(options.count(), 5);
/// assert_eq!(options.locale(), Locale::Es);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                options.count = parse_count(&value)?;
            }
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                options.seed = Some(Seed::from(value));
            }
            "--locale" => {
                let value = next_value(&mut args, "--locale")?;
                options.locale = value.parse()?;
            }
            "--compact" => options.pretty = false,
            "--pretty" => options.pretty = true,
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Options(options))
}

/// Generates the records described by `options` and encodes them as JSON.
///
/// A count of one yields a single object; any other count yields an array.
///
/// # Errors
///
/// Returns [`CliError`] when generation or serialisation fails.
///
/// # Example
///
/// ```
/// use fake_records::cli::{ParseOutcome, parse_args, render};
///
/// let args = ["--seed", "123", "--count", "2"].map(str::to_owned);
/// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
///     panic!("expected options");
/// };
///
/// let json = render(&options).expect("render");
/// assert!(json.starts_with('['));
/// assert_eq!(json, render(&options).expect("render"));
/// ```
pub fn render(options: &Options) -> Result<String, CliError> {
    let mut generator = RecordGenerator::new(options.generator_options())?;
    debug!(
        count = options.count,
        seed = %generator.seed(),
        locale = %generator.locale(),
        "rendering records"
    );
    if options.count == 1 {
        let record = generator.create_record(1)?;
        encode(&record, options.pretty)
    } else {
        let records = generator.create_records(options.count)?;
        encode(&records, options.pretty)
    }
}

fn encode<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    encoded.map_err(|err| CliError::Output {
        message: err.to_string(),
    })
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_count(value: &str) -> Result<usize, CliError> {
    let count = parse_number::<usize>(value, "--count")?;
    if count == 0 {
        return Err(CliError::NonPositiveCount);
    }
    Ok(count)
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}
