//! Static, per-locale data pools.
//!
//! Each supported [`Locale`] owns one [`LocalePools`] table holding an
//! ordered, non-empty list of candidate values per [`Category`]. The tables
//! are `'static` and never change at run time.

mod en;
mod es;
mod fr;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Language or region tag selecting which data pools are used.
///
/// # Example
///
/// ```
/// use fake_records::Locale;
///
/// let locale: Locale = "es".parse().expect("supported locale");
/// assert_eq!(locale, Locale::Es);
/// assert!("xx".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::Fr];

    /// Returns the short code for this locale.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = GeneratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let code = value.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| GeneratorError::UnsupportedLocale {
                code: value.to_owned(),
            })
    }
}

/// Kind of value a pool holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Full personal names.
    Name,
    /// Email domains.
    Domain,
    /// Formatted phone numbers.
    PhoneNumber,
    /// City names.
    City,
    /// Street addresses.
    Address,
    /// Job titles.
    JobTitle,
    /// Company names.
    CompanyName,
    /// Hobbies.
    Hobby,
    /// Education levels.
    EducationLevel,
    /// Professional skills.
    Skill,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Domain,
        Self::PhoneNumber,
        Self::City,
        Self::Address,
        Self::JobTitle,
        Self::CompanyName,
        Self::Hobby,
        Self::EducationLevel,
        Self::Skill,
    ];

    /// Returns a stable, human-readable label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Domain => "domain",
            Self::PhoneNumber => "phone number",
            Self::City => "city",
            Self::Address => "address",
            Self::JobTitle => "job title",
            Self::CompanyName => "company name",
            Self::Hobby => "hobby",
            Self::EducationLevel => "education level",
            Self::Skill => "skill",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The data pools of one locale.
#[derive(Debug)]
pub(crate) struct LocalePools {
    pub(crate) locale: Locale,
    pub(crate) names: &'static [&'static str],
    pub(crate) domains: &'static [&'static str],
    pub(crate) phone_numbers: &'static [&'static str],
    pub(crate) cities: &'static [&'static str],
    pub(crate) addresses: &'static [&'static str],
    pub(crate) job_titles: &'static [&'static str],
    pub(crate) company_names: &'static [&'static str],
    pub(crate) hobbies: &'static [&'static str],
    pub(crate) education_levels: &'static [&'static str],
    pub(crate) skills: &'static [&'static str],
}

impl LocalePools {
    const fn category(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Name => self.names,
            Category::Domain => self.domains,
            Category::PhoneNumber => self.phone_numbers,
            Category::City => self.cities,
            Category::Address => self.addresses,
            Category::JobTitle => self.job_titles,
            Category::CompanyName => self.company_names,
            Category::Hobby => self.hobbies,
            Category::EducationLevel => self.education_levels,
            Category::Skill => self.skills,
        }
    }
}

static TABLES: [&LocalePools; 3] = [&en::POOLS, &es::POOLS, &fr::POOLS];

/// Returns the pool for `category` in `locale`.
///
/// # Errors
///
/// Returns [`GeneratorError::MissingLocaleData`] when no table is registered
/// for `locale`, and [`GeneratorError::EmptyPool`] when the pool is empty.
///
/// # Example
///
/// ```
/// use fake_records::{Category, Locale, pool};
///
/// let names = pool(Category::Name, Locale::En).expect("english names");
/// assert!(!names.is_empty());
/// ```
pub fn pool(category: Category, locale: Locale) -> Result<&'static [&'static str], GeneratorError> {
    let values = tables(locale)?.category(category);
    if values.is_empty() {
        return Err(GeneratorError::EmptyPool { category, locale });
    }
    Ok(values)
}

/// Checks that `locale` has a non-empty pool for every category.
pub(crate) fn validate(locale: Locale) -> Result<(), GeneratorError> {
    Category::ALL
        .into_iter()
        .try_for_each(|category| pool(category, locale).map(drop))
}

fn tables(locale: Locale) -> Result<&'static LocalePools, GeneratorError> {
    TABLES
        .iter()
        .copied()
        .find(|table| table.locale == locale)
        .ok_or(GeneratorError::MissingLocaleData { locale })
}
