//! Error types for the command-line surface.

use thiserror::Error;

use crate::error::GeneratorError;

/// Errors surfaced by argument parsing and record rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The record count was zero.
    #[error("--count must be a positive integer")]
    NonPositiveCount,
    /// Generated records could not be serialised.
    #[error("failed to serialise records: {message}")]
    Output {
        /// Serialiser error message.
        message: String,
    },
    /// Record generation failed.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}
