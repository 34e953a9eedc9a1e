//! Deterministic, locale-aware fake records for testing and seeding.
//!
//! This crate synthesises plausible personal and professional records (name,
//! email, phone, address, job, skills, dates) from static per-locale data
//! pools. Output is reproducible: the same seed, locale and sequence of calls
//! always yield the same values.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Seeded sampling of fractions, integers and pool entries
//! - Independent data pools per locale
//! - Emails derived from the generated name, with diacritics folded
//! - Caller-defined fields merged into every record
//!
//! # Example
//!
//! ```
//! use fake_records::{GeneratorOptions, Locale, RecordGenerator};
//!
//! let options = GeneratorOptions::seeded("demo").with_locale(Locale::Fr);
//! let mut generator = RecordGenerator::new(options).expect("supported locale");
//! generator.add_generator("team", || "platform");
//!
//! let records = generator.create_records(3).expect("generation succeeds");
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[2].id(), Some(3));
//! assert_eq!(records[0].text("team"), Some("platform"));
//! ```

pub mod cli;
mod dates;
mod email;
mod error;
mod generator;
mod pools;
pub mod record;
mod sampling;

pub use dates::{
    BirthdateMode, BirthdateOptions, DEFAULT_MAX_AGE, DEFAULT_MAX_YEAR, DEFAULT_MIN_AGE,
    DEFAULT_MIN_YEAR, MILLIS_PER_YEAR,
};
pub use email::local_part_from_name;
pub use error::{ErrorKind, GeneratorError};
pub use generator::{
    Custom, DEFAULT_RECORD_COUNT, DEFAULT_SKILL_COUNT, Dates, GeneratorOptions, Internet, Location,
    Person, Phone, ProducerError, RecordGenerator, Work,
};
pub use pools::{Category, Locale, pool};
pub use record::Record;
pub use sampling::{Seed, SeededSampler};
