use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SampleSet;

/// Seed for deterministic sample generation.
///
/// A 128-bit seed for the generator's PRNG. Using the same seed with the same
/// count and ranges reproduces the same samples, which makes generated
/// datasets replayable and tests deterministic.
///
/// Serialized as a 32-character lowercase hex string.
///
/// # Example
///
/// ```
/// use cpkit_engine::{SampleGenerator, SampleSeed};
/// use rand::Rng as _;
///
/// let seed: SampleSeed = rand::rng().random();
///
/// let a = SampleGenerator::with_seed(seed).generate(10, 0.01, 0.01);
/// let b = SampleGenerator::with_seed(seed).generate(10, 0.01, 0.01);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSeed([u8; 16]);

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    InvalidDigit(#[error(not(source))] String),
}

impl SampleSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for SampleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for SampleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::InvalidLength(s.len()));
        }
        let num =
            u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::InvalidDigit(s.to_owned()))?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SampleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SampleSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `SampleSeed` values with `rng.random()`.
impl Distribution<SampleSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SampleSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SampleSeed(seed)
    }
}

/// Generates uniformly distributed deviation samples.
///
/// Each axis value is drawn independently from `[-range, +range)`.
#[derive(Debug, Clone)]
pub struct SampleGenerator {
    seed: SampleSeed,
    rng: Pcg32,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleGenerator {
    /// Creates a generator with a seed drawn from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible output.
    #[must_use]
    pub fn with_seed(seed: SampleSeed) -> Self {
        Self {
            seed,
            rng: Pcg32::from_seed(seed.0),
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> SampleSeed {
        self.seed
    }

    /// Draws `count` samples with indices `1..=count`.
    ///
    /// Ranges are expected to be positive; [`crate::CapabilityConfig`]
    /// guarantees this for configured values.
    pub fn generate(&mut self, count: usize, range_x: f64, range_y: f64) -> SampleSet {
        generate_samples(&mut self.rng, count, range_x, range_y)
    }
}

/// Draws `count` samples from an arbitrary RNG.
///
/// Each axis value is uniform on `[-range, +range)`. The unit draw is scaled
/// by `range` so that any finite range stays finite, including `f64::MAX`.
pub fn generate_samples<R>(rng: &mut R, count: usize, range_x: f64, range_y: f64) -> SampleSet
where
    R: Rng,
{
    let range_x = range_x.abs();
    let range_y = range_y.abs();
    SampleSet::from_pairs((0..count).map(|_| {
        let x = symmetric_unit(rng) * range_x;
        let y = symmetric_unit(rng) * range_y;
        (x, y)
    }))
}

fn symmetric_unit<R>(rng: &mut R) -> f64
where
    R: Rng,
{
    rng.random::<f64>() * 2.0 - 1.0
}
