//! Date sampling and birthdate windows.
//!
//! All arithmetic is done in milliseconds since the Unix epoch. A year is a
//! fixed 365 days; leap days are not accounted for.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

use crate::error::GeneratorError;
use crate::sampling::SeededSampler;

/// Milliseconds in one 365-day year.
pub const MILLIS_PER_YEAR: i64 = 365 * 24 * 60 * 60 * 1000;

/// Default minimum age for generated birthdates.
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Default maximum age for generated birthdates.
pub const DEFAULT_MAX_AGE: u32 = 65;

/// Default first birth year in year mode.
pub const DEFAULT_MIN_YEAR: i32 = 1950;

/// Default last birth year in year mode.
pub const DEFAULT_MAX_YEAR: i32 = 2000;

/// How a birthdate window is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdateMode {
    /// Ages in whole years relative to the reference year, inclusive.
    Age {
        /// Youngest age.
        min: u32,
        /// Oldest age.
        max: u32,
    },
    /// Calendar birth years, inclusive.
    Year {
        /// First birth year.
        min: i32,
        /// Last birth year.
        max: i32,
    },
}

impl Default for BirthdateMode {
    fn default() -> Self {
        Self::Age {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

/// Options for birthdate generation.
///
/// # Example
///
/// ```
/// use fake_records::{BirthdateMode, BirthdateOptions};
///
/// let options = BirthdateOptions::default();
/// assert_eq!(options.mode(), BirthdateMode::Age { min: 18, max: 65 });
///
/// let years = BirthdateOptions::year(1980, 1990);
/// assert_eq!(years.mode(), BirthdateMode::Year { min: 1980, max: 1990 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BirthdateOptions {
    mode: BirthdateMode,
    reference: Option<DateTime<Utc>>,
}

impl BirthdateOptions {
    /// Ages between `min` and `max` years, inclusive.
    #[must_use]
    pub const fn age(min: u32, max: u32) -> Self {
        Self {
            mode: BirthdateMode::Age { min, max },
            reference: None,
        }
    }

    /// Birth years between `min` and `max`, inclusive.
    #[must_use]
    pub const fn year(min: i32, max: i32) -> Self {
        Self {
            mode: BirthdateMode::Year { min, max },
            reference: None,
        }
    }

    /// Measures ages against `reference` instead of the generator clock.
    #[must_use]
    pub const fn with_reference(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Returns the window mode.
    #[must_use]
    pub const fn mode(&self) -> BirthdateMode {
        self.mode
    }

    /// Returns the explicit reference instant, if any.
    #[must_use]
    pub const fn reference(&self) -> Option<DateTime<Utc>> {
        self.reference
    }

    /// Resolves the inclusive `[from, to]` window for these options.
    ///
    /// In age mode the window runs from January 1 of `reference year - max`
    /// to December 31 of `reference year - min`.
    pub(crate) fn window(
        &self,
        now: DateTime<Utc>,
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), GeneratorError> {
        let reference = self.reference.unwrap_or(now);
        let (first_year, last_year) = match self.mode {
            BirthdateMode::Age { min, max } => {
                if min > max {
                    return Err(GeneratorError::InvalidAgeRange { min, max });
                }
                let year = reference.year();
                (years_before(year, max)?, years_before(year, min)?)
            }
            BirthdateMode::Year { min, max } => {
                if min > max {
                    return Err(GeneratorError::InvalidYearRange { min, max });
                }
                (min, max)
            }
        };
        Ok((start_of_year(first_year)?, end_of_year(last_year)?))
    }
}

/// Returns an instant between `from` and `to`, both inclusive.
pub(crate) fn between(
    sampler: &mut SeededSampler,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<DateTime<Utc>, GeneratorError> {
    if from > to {
        return Err(GeneratorError::InvalidDateRange { from, to });
    }
    let millis = sampler.next_int(from.timestamp_millis(), to.timestamp_millis())?;
    DateTime::from_timestamp_millis(millis).ok_or(GeneratorError::DateOutOfRange)
}

/// Returns `reference` shifted by up to `years` 365-day years.
pub(crate) fn offset(
    sampler: &mut SeededSampler,
    years: u32,
    reference: DateTime<Utc>,
    direction: Direction,
) -> Result<DateTime<Utc>, GeneratorError> {
    let range = i64::from(years)
        .checked_mul(MILLIS_PER_YEAR)
        .ok_or(GeneratorError::DateOutOfRange)?;
    let millis = sampler.next_int(0, range)?;
    let delta = TimeDelta::try_milliseconds(millis).ok_or(GeneratorError::DateOutOfRange)?;
    match direction {
        Direction::Past => reference.checked_sub_signed(delta),
        Direction::Future => reference.checked_add_signed(delta),
    }
    .ok_or(GeneratorError::DateOutOfRange)
}

/// Which way [`offset`] moves from the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Past,
    Future,
}

fn years_before(year: i32, years: u32) -> Result<i32, GeneratorError> {
    i32::try_from(years)
        .ok()
        .and_then(|delta| year.checked_sub(delta))
        .ok_or(GeneratorError::DateOutOfRange)
}

fn start_of_year(year: i32) -> Result<DateTime<Utc>, GeneratorError> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_milli_opt(0, 0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or(GeneratorError::DateOutOfRange)
}

fn end_of_year(year: i32) -> Result<DateTime<Utc>, GeneratorError> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999))
        .map(|naive| naive.and_utc())
        .ok_or(GeneratorError::DateOutOfRange)
}
