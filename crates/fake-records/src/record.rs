//! Generated record values.
//!
//! A [`Record`] is an ordered map of field names to JSON values. Built-in
//! fields are inserted first in a fixed order; custom fields follow and may
//! replace a built-in value in place.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::GeneratorError;

/// Field name of the record identifier.
pub const ID: &str = "id";
/// Field name of the full name.
pub const NAME: &str = "name";
/// Field name of the email address.
pub const EMAIL: &str = "email";
/// Field name of the phone number.
pub const PHONE_NUMBER: &str = "phoneNumber";
/// Field name of the city.
pub const LOCATION: &str = "location";
/// Field name of the street address.
pub const ADDRESS: &str = "address";
/// Field name of the birthdate.
pub const BIRTHDATE: &str = "birthdate";
/// Field name of the job title.
pub const JOB_TITLE: &str = "jobTitle";
/// Field name of the company name.
pub const COMPANY_NAME: &str = "companyName";
/// Field name of the hobby.
pub const HOBBY: &str = "hobby";
/// Field name of the education level.
pub const EDUCATION_LEVEL: &str = "educationLevel";
/// Field name of the skill list.
pub const SKILLS: &str = "skills";

/// The typed built-in fields, in output order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BuiltinFields {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone_number: String,
    pub(crate) location: String,
    pub(crate) address: String,
    #[serde(serialize_with = "serialize_millis")]
    pub(crate) birthdate: DateTime<Utc>,
    pub(crate) job_title: String,
    pub(crate) company_name: String,
    pub(crate) hobby: String,
    pub(crate) education_level: String,
    pub(crate) skills: Vec<String>,
}

impl BuiltinFields {
    pub(crate) fn into_record(self) -> Result<Record, GeneratorError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(fields)) => Ok(Record { fields }),
            Ok(other) => Err(GeneratorError::Encoding {
                message: format!("expected an object, found {other}"),
            }),
            Err(err) => Err(GeneratorError::Encoding {
                message: err.to_string(),
            }),
        }
    }
}

/// Writes `instant` as an RFC 3339 UTC timestamp with exactly three
/// fractional digits, e.g. `1990-05-17T08:30:00.000Z`.
fn serialize_millis<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// One generated fake entity.
///
/// # Example
///
/// ```
/// use fake_records::{GeneratorOptions, RecordGenerator, Seed};
///
/// let mut generator = RecordGenerator::new(GeneratorOptions::seeded(Seed::from(1_u64)))
///     .expect("default locale is supported");
/// let record = generator.create_record(7).expect("record");
///
/// assert_eq!(record.id(), Some(7));
/// assert!(record.email().is_some_and(|email| email.contains('@')));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Returns the value of `field`, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the value of `field` when it is a string.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns the record identifier.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.get(ID).and_then(Value::as_u64)
    }

    /// Returns the full name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.text(NAME)
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.text(EMAIL)
    }

    /// Returns the birthdate parsed back from its timestamp string.
    #[must_use]
    pub fn birthdate(&self) -> Option<DateTime<Utc>> {
        self.text(BIRTHDATE)
            .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
    }

    /// Returns the skills that are strings.
    #[must_use]
    pub fn skills(&self) -> Vec<&str> {
        self.get(SKILLS)
            .and_then(Value::as_array)
            .map(|skills| skills.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns every field in output order.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the record and returns its field map.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sets `field`, keeping the position of an existing entry.
    pub(crate) fn merge(&mut self, field: String, value: Value) {
        self.fields.insert(field, value);
    }
}
