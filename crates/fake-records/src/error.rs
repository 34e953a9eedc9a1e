//! Error types for the fake-records crate.
//!
//! Every failure the generator can report is a variant of
//! [`GeneratorError`]. Variants carry structured fields so callers can match
//! on them, and [`GeneratorError::kind`] groups them into the broad classes
//! callers usually branch on.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::pools::{Category, Locale};

/// Broad classification of a [`GeneratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value the operation cannot accept.
    InvalidArgument,
    /// The generator was configured with a locale or pool that does not exist.
    Configuration,
    /// Static data required by the generator is unusable.
    InvalidState,
    /// Caller-supplied code failed.
    Programmer,
}

/// Errors that can occur while sampling values or assembling records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// A pick was requested from an empty sequence.
    #[error("cannot pick from an empty sequence")]
    EmptySequence,

    /// An integer range had its lower bound above its upper bound.
    #[error("invalid integer range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// A date range started after it ended.
    #[error("invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Requested start of the range.
        from: DateTime<Utc>,
        /// Requested end of the range.
        to: DateTime<Utc>,
    },

    /// A birthdate age window had its minimum above its maximum.
    #[error("invalid age range: min {min} is greater than max {max}")]
    InvalidAgeRange {
        /// Minimum age in years.
        min: u32,
        /// Maximum age in years.
        max: u32,
    },

    /// A birthdate year window had its first year after its last.
    #[error("invalid year range: min {min} is greater than max {max}")]
    InvalidYearRange {
        /// First calendar year.
        min: i32,
        /// Last calendar year.
        max: i32,
    },

    /// Date arithmetic left the representable range.
    #[error("date arithmetic overflowed the supported range")]
    DateOutOfRange,

    /// A locale code is not one of the supported locales.
    #[error("unsupported locale '{code}'")]
    UnsupportedLocale {
        /// Code supplied by the caller.
        code: String,
    },

    /// A supported locale has no data table.
    #[error("no data pools registered for locale '{locale}'")]
    MissingLocaleData {
        /// Locale without data.
        locale: Locale,
    },

    /// A data pool exists but holds no values.
    #[error("data pool '{category}' for locale '{locale}' is empty")]
    EmptyPool {
        /// Category of the empty pool.
        category: Category,
        /// Locale of the empty pool.
        locale: Locale,
    },

    /// A custom field generator returned an error.
    #[error("custom generator for field '{field}' failed: {message}")]
    Producer {
        /// Name of the custom field.
        field: String,
        /// Error reported by the producer.
        message: String,
    },

    /// A custom field was requested that has no registered generator.
    #[error("no custom generator registered for field '{name}'")]
    UnknownGenerator {
        /// Requested field name.
        name: String,
    },

    /// A record could not be encoded into its field map.
    #[error("failed to encode record: {message}")]
    Encoding {
        /// Encoder error message.
        message: String,
    },
}

impl GeneratorError {
    /// Returns the broad class this error belongs to.
    ///
    /// # Example
    ///
    /// ```
    /// use fake_records::{ErrorKind, GeneratorError};
    ///
    /// assert_eq!(GeneratorError::EmptySequence.kind(), ErrorKind::InvalidArgument);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySequence
            | Self::InvalidRange { .. }
            | Self::InvalidDateRange { .. }
            | Self::InvalidAgeRange { .. }
            | Self::InvalidYearRange { .. }
            | Self::DateOutOfRange => ErrorKind::InvalidArgument,
            Self::UnsupportedLocale { .. } | Self::MissingLocaleData { .. } => {
                ErrorKind::Configuration
            }
            Self::EmptyPool { .. } | Self::Encoding { .. } => ErrorKind::InvalidState,
            Self::Producer { .. } | Self::UnknownGenerator { .. } => ErrorKind::Programmer,
        }
    }
}
