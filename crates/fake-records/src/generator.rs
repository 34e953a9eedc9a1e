//! The record generator.
//!
//! [`RecordGenerator`] owns one [`SeededSampler`], the active [`Locale`] and
//! the registry of caller-defined field producers. Category accessors are
//! exposed through short-lived borrowing views (`person()`, `internet()`,
//! and so on); every accessor advances the same sampler, so the full output
//! is determined by the seed, the locale and the order of calls.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::dates::{self, BirthdateOptions, Direction};
use crate::email;
use crate::error::GeneratorError;
use crate::pools::{self, Category, Locale};
use crate::record::{BuiltinFields, Record};
use crate::sampling::{Seed, SeededSampler};

/// Number of records produced by [`RecordGenerator::create_records`] when the
/// caller has no preference.
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Number of skills attached to each generated record.
pub const DEFAULT_SKILL_COUNT: usize = 3;

/// Error type custom producers may return.
pub type ProducerError = Box<dyn std::error::Error + Send + Sync>;

type Producer = Box<dyn FnMut() -> Result<Value, ProducerError>>;

/// Construction options for a [`RecordGenerator`].
///
/// Deserialises from `{"seed": 123, "locale": "es"}`; both keys are
/// optional and the seed may be a number or a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    /// Seed for the sampler; a random one is drawn when absent.
    pub seed: Option<Seed>,
    /// Locale whose pools are sampled.
    pub locale: Locale,
}

impl GeneratorOptions {
    /// Options with `seed` and the default locale.
    #[must_use]
    pub fn seeded(seed: impl Into<Seed>) -> Self {
        Self {
            seed: Some(seed.into()),
            locale: Locale::default(),
        }
    }

    /// Replaces the locale.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Generates fake records from locale pools with a deterministic sampler.
///
/// # Example
///
/// ```
/// use fake_records::{GeneratorOptions, Locale, RecordGenerator};
///
/// let options = GeneratorOptions::seeded(123_u64).with_locale(Locale::Es);
/// let mut first = RecordGenerator::new(options.clone()).expect("supported locale");
/// let mut second = RecordGenerator::new(options).expect("supported locale");
///
/// assert_eq!(
///     first.create_records(5).expect("records"),
///     second.create_records(5).expect("records"),
/// );
/// ```
pub struct RecordGenerator {
    sampler: SeededSampler,
    locale: Locale,
    clock: Arc<dyn Clock>,
    generators: BTreeMap<String, Producer>,
}

impl fmt::Debug for RecordGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordGenerator")
            .field("seed", self.sampler.seed())
            .field("locale", &self.locale)
            .field("generators", &self.generators.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl RecordGenerator {
    /// Creates a generator from `options`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the locale has no data, or
    /// [`GeneratorError::EmptyPool`] when one of its pools is empty.
    pub fn new(options: GeneratorOptions) -> Result<Self, GeneratorError> {
        let GeneratorOptions { seed, locale } = options;
        pools::validate(locale)?;
        let sampler = SeededSampler::new(seed);
        debug!(seed = %sampler.seed(), %locale, "record generator initialised");
        Ok(Self {
            sampler,
            locale,
            clock: Arc::new(DefaultClock),
            generators: BTreeMap::new(),
        })
    }

    /// Replaces the clock that supplies "now" for date accessors.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the effective seed.
    #[must_use]
    pub const fn seed(&self) -> &Seed {
        self.sampler.seed()
    }

    /// Returns the active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Registers `producer` for the custom field `name`.
    ///
    /// A later registration under the same name replaces the earlier one.
    /// Custom fields are merged after the built-in fields, so a producer named
    /// after a built-in field overrides it.
    ///
    /// # Example
    ///
    /// ```
    /// use fake_records::{GeneratorOptions, RecordGenerator};
    ///
    /// let mut generator = RecordGenerator::new(GeneratorOptions::seeded(1_u64)).expect("generator");
    /// generator.add_generator("name", || "Override");
    ///
    /// let record = generator.create_record(1).expect("record");
    /// assert_eq!(record.name(), Some("Override"));
    /// ```
    pub fn add_generator<F, T>(&mut self, name: impl Into<String>, mut producer: F)
    where
        F: FnMut() -> T + 'static,
        T: Into<Value>,
    {
        self.register(
            name.into(),
            Box::new(move || -> Result<Value, ProducerError> { Ok(producer().into()) }),
        );
    }

    /// Registers a producer that may fail.
    ///
    /// Failures surface as [`GeneratorError::Producer`] from the call that
    /// invoked the producer.
    pub fn add_fallible_generator<F, T, E>(&mut self, name: impl Into<String>, mut producer: F)
    where
        F: FnMut() -> Result<T, E> + 'static,
        T: Into<Value>,
        E: Into<ProducerError>,
    {
        self.register(
            name.into(),
            Box::new(move || -> Result<Value, ProducerError> {
                producer().map(Into::into).map_err(Into::into)
            }),
        );
    }

    fn register(&mut self, name: String, producer: Producer) {
        let replaced = self.generators.insert(name.clone(), producer).is_some();
        debug!(field = %name, replaced, "custom field generator registered");
    }

    /// Person accessors.
    pub fn person(&mut self) -> Person<'_> {
        Person { generator: self }
    }

    /// Internet accessors.
    pub fn internet(&mut self) -> Internet<'_> {
        Internet { generator: self }
    }

    /// Phone accessors.
    pub fn phone(&mut self) -> Phone<'_> {
        Phone { generator: self }
    }

    /// Location accessors.
    pub fn location(&mut self) -> Location<'_> {
        Location { generator: self }
    }

    /// Work accessors.
    pub fn work(&mut self) -> Work<'_> {
        Work { generator: self }
    }

    /// Date accessors.
    pub fn date(&mut self) -> Dates<'_> {
        Dates { generator: self }
    }

    /// Accessors for registered custom fields.
    pub fn custom(&mut self) -> Custom<'_> {
        Custom { generator: self }
    }

    /// Generates one record with identifier `id`.
    ///
    /// The name is drawn first and feeds the email; the remaining built-in
    /// fields follow in output order, then custom fields are merged in name
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error when a pool is unusable or a custom producer fails.
    pub fn create_record(&mut self, id: u64) -> Result<Record, GeneratorError> {
        let name = self.draw(Category::Name)?;
        let email = self.internet().email(Some(&name))?;
        let phone_number = self.draw(Category::PhoneNumber)?;
        let location = self.draw(Category::City)?;
        let address = self.draw(Category::Address)?;
        let birthdate = self.person().birthdate(BirthdateOptions::default())?;
        let job_title = self.draw(Category::JobTitle)?;
        let company_name = self.draw(Category::CompanyName)?;
        let hobby = self.draw(Category::Hobby)?;
        let education_level = self.draw(Category::EducationLevel)?;
        let skills = self.work().skills(DEFAULT_SKILL_COUNT)?;

        let mut record = BuiltinFields {
            id,
            name,
            email,
            phone_number,
            location,
            address,
            birthdate,
            job_title,
            company_name,
            hobby,
            education_level,
            skills,
        }
        .into_record()?;

        for (field, producer) in &mut self.generators {
            let value = (**producer)().map_err(|err| GeneratorError::Producer {
                field: field.clone(),
                message: err.to_string(),
            })?;
            record.merge(field.clone(), value);
        }

        Ok(record)
    }

    /// Generates `count` records with identifiers `1..=count`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`RecordGenerator::create_record`].
    pub fn create_records(&mut self, count: usize) -> Result<Vec<Record>, GeneratorError> {
        debug!(count, locale = %self.locale, "generating record batch");
        let records = (1_u64..)
            .take(count)
            .map(|id| self.create_record(id))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = records.len(), "record batch generated");
        Ok(records)
    }

    fn draw(&mut self, category: Category) -> Result<String, GeneratorError> {
        let values = pools::pool(category, self.locale)?;
        self.sampler.pick_one(values).map(|value| (*value).to_owned())
    }

    fn draw_many(&mut self, category: Category, count: usize) -> Result<Vec<String>, GeneratorError> {
        let values = pools::pool(category, self.locale)?;
        let picks = self.sampler.pick_many(values, count)?;
        Ok(picks.into_iter().map(str::to_owned).collect())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }
}

/// Personal details.
#[derive(Debug)]
pub struct Person<'a> {
    generator: &'a mut RecordGenerator,
}

impl Person<'_> {
    /// A full name.
    ///
    /// # Errors
    ///
    /// Returns an error when the name pool is unusable.
    pub fn name(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::Name)
    }

    /// A hobby.
    ///
    /// # Errors
    ///
    /// Returns an error when the hobby pool is unusable.
    pub fn hobby(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::Hobby)
    }

    /// An education level.
    ///
    /// # Errors
    ///
    /// Returns an error when the education pool is unusable.
    pub fn education_level(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::EducationLevel)
    }

    /// A birthdate inside the window described by `options`.
    ///
    /// # Errors
    ///
    /// Returns an error when the window is inverted or unrepresentable.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Datelike;
    /// use fake_records::{BirthdateOptions, GeneratorOptions, RecordGenerator};
    ///
    /// let mut generator = RecordGenerator::new(GeneratorOptions::seeded(9_u64)).expect("generator");
    /// let born = generator
    ///     .person()
    ///     .birthdate(BirthdateOptions::year(1980, 1989))
    ///     .expect("birthdate");
    /// assert!((1980..=1989).contains(&born.year()));
    /// ```
    pub fn birthdate(&mut self, options: BirthdateOptions) -> Result<DateTime<Utc>, GeneratorError> {
        let (from, to) = options.window(self.generator.now())?;
        dates::between(&mut self.generator.sampler, from, to)
    }
}

/// Internet details.
#[derive(Debug)]
pub struct Internet<'a> {
    generator: &'a mut RecordGenerator,
}

impl Internet<'_> {
    /// An email address whose local part is derived from `name`.
    ///
    /// The domain is drawn first. Without a `name`, or with an empty one, a
    /// name is drawn from the locale's name pool.
    ///
    /// # Errors
    ///
    /// Returns an error when the domain or name pool is unusable.
    pub fn email(&mut self, name: Option<&str>) -> Result<String, GeneratorError> {
        let domain = self.generator.draw(Category::Domain)?;
        let local_part = match name.filter(|name| !name.is_empty()) {
            Some(name) => email::local_part_from_name(name),
            None => email::local_part_from_name(&self.generator.draw(Category::Name)?),
        };
        Ok(email::address(&local_part, &domain))
    }
}

/// Phone details.
#[derive(Debug)]
pub struct Phone<'a> {
    generator: &'a mut RecordGenerator,
}

impl Phone<'_> {
    /// A phone number.
    ///
    /// # Errors
    ///
    /// Returns an error when the phone pool is unusable.
    pub fn number(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::PhoneNumber)
    }
}

/// Location details.
#[derive(Debug)]
pub struct Location<'a> {
    generator: &'a mut RecordGenerator,
}

impl Location<'_> {
    /// A city.
    ///
    /// # Errors
    ///
    /// Returns an error when the city pool is unusable.
    pub fn city(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::City)
    }

    /// A street address.
    ///
    /// # Errors
    ///
    /// Returns an error when the address pool is unusable.
    pub fn address(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::Address)
    }
}

/// Work details.
#[derive(Debug)]
pub struct Work<'a> {
    generator: &'a mut RecordGenerator,
}

impl Work<'_> {
    /// A job title.
    ///
    /// # Errors
    ///
    /// Returns an error when the job title pool is unusable.
    pub fn job_title(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::JobTitle)
    }

    /// A company name.
    ///
    /// # Errors
    ///
    /// Returns an error when the company pool is unusable.
    pub fn company_name(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::CompanyName)
    }

    /// A single skill.
    ///
    /// # Errors
    ///
    /// Returns an error when the skill pool is unusable.
    pub fn skill(&mut self) -> Result<String, GeneratorError> {
        self.generator.draw(Category::Skill)
    }

    /// Exactly `count` skills, possibly repeating.
    ///
    /// # Errors
    ///
    /// Returns an error when the skill pool is unusable.
    pub fn skills(&mut self, count: usize) -> Result<Vec<String>, GeneratorError> {
        self.generator.draw_many(Category::Skill, count)
    }
}

/// Date sampling.
#[derive(Debug)]
pub struct Dates<'a> {
    generator: &'a mut RecordGenerator,
}

impl Dates<'_> {
    /// An instant up to `years` years before now.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::DateOutOfRange`] when the result is not
    /// representable.
    pub fn past(&mut self, years: u32) -> Result<DateTime<Utc>, GeneratorError> {
        let now = self.generator.now();
        self.past_from(years, now)
    }

    /// An instant up to `years` years before `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::DateOutOfRange`] when the result is not
    /// representable.
    pub fn past_from(
        &mut self,
        years: u32,
        reference: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, GeneratorError> {
        dates::offset(&mut self.generator.sampler, years, reference, Direction::Past)
    }

    /// An instant up to `years` years after now.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::DateOutOfRange`] when the result is not
    /// representable.
    pub fn future(&mut self, years: u32) -> Result<DateTime<Utc>, GeneratorError> {
        let now = self.generator.now();
        self.future_from(years, now)
    }

    /// An instant up to `years` years after `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::DateOutOfRange`] when the result is not
    /// representable.
    pub fn future_from(
        &mut self,
        years: u32,
        reference: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, GeneratorError> {
        dates::offset(&mut self.generator.sampler, years, reference, Direction::Future)
    }

    /// An instant between `from` and `to`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidDateRange`] when `from > to`.
    pub fn between(
        &mut self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, GeneratorError> {
        dates::between(&mut self.generator.sampler, from, to)
    }
}

/// Registered custom fields.
#[derive(Debug)]
pub struct Custom<'a> {
    generator: &'a mut RecordGenerator,
}

impl Custom<'_> {
    /// Runs the producer registered for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnknownGenerator`] when nothing is registered
    /// under `name`, or [`GeneratorError::Producer`] when the producer fails.
    pub fn generate(&mut self, name: &str) -> Result<Value, GeneratorError> {
        let producer = self
            .generator
            .generators
            .get_mut(name)
            .ok_or_else(|| GeneratorError::UnknownGenerator {
                name: name.to_owned(),
            })?;
        (**producer)().map_err(|err| GeneratorError::Producer {
            field: name.to_owned(),
            message: err.to_string(),
        })
    }

    /// Names of the registered custom fields, in merge order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.generator.generators.keys().map(String::as_str).collect()
    }
}
