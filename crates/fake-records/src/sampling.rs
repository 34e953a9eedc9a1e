//! Deterministic pseudo-random sampling.
//!
//! [`SeededSampler`] wraps a ChaCha8 stream keyed from a [`Seed`]. Every
//! operation advances the stream, so the sequence of outputs is fully
//! determined by the seed and the order of calls.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::GeneratorError;

/// A caller-supplied seed.
///
/// Seeds are stored as text. Numeric seeds are converted to their decimal
/// representation, so `Seed::from(123_u64)` and `Seed::from("123")` select
/// the same stream.
///
/// # Example
///
/// ```
/// use fake_records::Seed;
///
/// assert_eq!(Seed::from(123_u64), Seed::from("123"));
/// assert_ne!(Seed::from("alpha"), Seed::from("beta"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawSeed", into = "String")]
pub struct Seed(String);

impl Seed {
    /// Returns the canonical text of the seed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn key(&self) -> [u8; 32] {
        Sha256::digest(self.0.as_bytes()).into()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Seed> for String {
    fn from(value: Seed) -> Self {
        value.0
    }
}

macro_rules! seed_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Seed {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

seed_from_integer!(u32, u64, i32, i64, usize);

/// Accepts either a JSON number or a JSON string as a seed.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeed {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl From<RawSeed> for Seed {
    fn from(raw: RawSeed) -> Self {
        match raw {
            RawSeed::Unsigned(value) => Self::from(value),
            RawSeed::Signed(value) => Self::from(value),
            RawSeed::Text(value) => Self(value),
        }
    }
}

/// A seeded source of fractions, integers and picks.
///
/// The sampler is not meant to be shared: interleaving calls from several
/// callers changes what each of them observes.
#[derive(Debug, Clone)]
pub struct SeededSampler {
    seed: Seed,
    rng: ChaCha8Rng,
}

impl SeededSampler {
    /// Creates a sampler from an optional seed.
    ///
    /// Without a seed a fresh one is drawn from the thread-local entropy
    /// source; [`SeededSampler::seed`] reports it so the run can be repeated.
    #[must_use]
    pub fn new(seed: Option<Seed>) -> Self {
        let resolved = seed.unwrap_or_else(|| Seed::from(rand::rng().random::<u64>()));
        Self::from_seed(resolved)
    }

    /// Creates a sampler keyed from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use fake_records::{Seed, SeededSampler};
    ///
    /// let mut first = SeededSampler::from_seed(Seed::from(7_u64));
    /// let mut second = SeededSampler::from_seed(Seed::from(7_u64));
    /// assert_eq!(first.next_fraction(), second.next_fraction());
    /// ```
    #[must_use]
    pub fn from_seed(seed: Seed) -> Self {
        let rng = ChaCha8Rng::from_seed(seed.key());
        Self { seed, rng }
    }

    /// Returns the seed this sampler was keyed from.
    #[must_use]
    pub const fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Returns the next fraction in `[0, 1)`.
    pub fn next_fraction(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Returns an integer in `[min, max]`, both inclusive.
    ///
    /// The value is `floor(fraction * (max - min + 1)) + min`. Spans wider
    /// than 2^53 lose resolution but never leave the bounds.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRange`] when `min > max`.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        reason = "the sampling formula scales a fraction onto the integer span"
    )]
    pub fn next_int(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        if min > max {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        let span = i128::from(max) - i128::from(min) + 1;
        let scaled = (self.next_fraction() * span as f64).floor() as i128;
        let offset = scaled.clamp(0, span - 1);
        i64::try_from(i128::from(min) + offset).map_err(|_| GeneratorError::InvalidRange { min, max })
    }

    /// Picks one element of `items` uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptySequence`] when `items` is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use fake_records::{Seed, SeededSampler};
    ///
    /// let mut sampler = SeededSampler::from_seed(Seed::from("pick"));
    /// assert_eq!(sampler.pick_one(&["only"]), Ok(&"only"));
    /// assert!(sampler.pick_one::<&str>(&[]).is_err());
    /// ```
    pub fn pick_one<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GeneratorError> {
        let last = items
            .len()
            .checked_sub(1)
            .ok_or(GeneratorError::EmptySequence)?;
        let upper = i64::try_from(last).map_err(|_| GeneratorError::InvalidRange {
            min: 0,
            max: i64::MAX,
        })?;
        let index = usize::try_from(self.next_int(0, upper)?).unwrap_or(last);
        items.get(index).ok_or(GeneratorError::EmptySequence)
    }

    /// Picks `count` elements with replacement.
    ///
    /// A `count` of zero returns an empty vector without advancing the
    /// stream, even when `items` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptySequence`] when `count > 0` and `items`
    /// is empty.
    pub fn pick_many<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
    ) -> Result<Vec<T>, GeneratorError> {
        (0..count)
            .map(|_| self.pick_one(items).cloned())
            .collect()
    }
}
