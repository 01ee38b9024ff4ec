use serde::{Deserialize, Serialize};

/// User-tunable inputs of a capability analysis.
///
/// All values are strictly positive and the sample count is at most
/// [`CapabilityConfig::MAX_SAMPLE_COUNT`]. The `*_text` setters mirror free-form
/// text entry: input that does not parse or is not positive is ignored, the
/// previous value is kept, and `false` is returned.
///
/// # Example
///
/// ```
/// use cpkit_engine::CapabilityConfig;
///
/// let mut config = CapabilityConfig::default();
/// assert!(config.set_sample_count_text("50"));
/// assert!(!config.set_sample_count_text("-5"));
/// assert_eq!(config.sample_count(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CapabilityConfigRepr")]
pub struct CapabilityConfig {
    sample_count: usize,
    range_x: f64,
    range_y: f64,
    spec_limit: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid configuration: {field} is out of range")]
pub struct InvalidConfigError {
    field: &'static str,
}

#[derive(Deserialize)]
struct CapabilityConfigRepr {
    sample_count: usize,
    range_x: f64,
    range_y: f64,
    spec_limit: f64,
}

impl TryFrom<CapabilityConfigRepr> for CapabilityConfig {
    type Error = InvalidConfigError;

    fn try_from(repr: CapabilityConfigRepr) -> Result<Self, Self::Error> {
        let mut config = Self::default();
        let checks = [
            (config.set_sample_count(repr.sample_count), "sample_count"),
            (config.set_range_x(repr.range_x), "range_x"),
            (config.set_range_y(repr.range_y), "range_y"),
            (config.set_spec_limit(repr.spec_limit), "spec_limit"),
        ];
        match checks.into_iter().find(|(ok, _)| !ok) {
            Some((_, field)) => Err(InvalidConfigError { field }),
            None => Ok(config),
        }
    }
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            sample_count: Self::DEFAULT_SAMPLE_COUNT,
            range_x: Self::DEFAULT_RANGE,
            range_y: Self::DEFAULT_RANGE,
            spec_limit: Self::DEFAULT_SPEC_LIMIT,
        }
    }
}

impl CapabilityConfig {
    pub const DEFAULT_SAMPLE_COUNT: usize = 30;
    pub const DEFAULT_RANGE: f64 = 0.01;
    pub const DEFAULT_SPEC_LIMIT: f64 = 0.02;
    /// Largest accepted sample count (`i32::MAX`).
    pub const MAX_SAMPLE_COUNT: usize = 2_147_483_647;

    /// Number of samples to generate.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Half-width of the x generation interval.
    #[must_use]
    pub fn range_x(&self) -> f64 {
        self.range_x
    }

    /// Half-width of the y generation interval.
    #[must_use]
    pub fn range_y(&self) -> f64 {
        self.range_y
    }

    /// Symmetric specification limit (precision) used for CPK.
    #[must_use]
    pub fn spec_limit(&self) -> f64 {
        self.spec_limit
    }

    pub fn set_sample_count(&mut self, count: usize) -> bool {
        accept(&mut self.sample_count, valid_count(count))
    }

    pub fn set_range_x(&mut self, range: f64) -> bool {
        accept(&mut self.range_x, positive(range))
    }

    pub fn set_range_y(&mut self, range: f64) -> bool {
        accept(&mut self.range_y, positive(range))
    }

    pub fn set_spec_limit(&mut self, limit: f64) -> bool {
        accept(&mut self.spec_limit, positive(limit))
    }

    pub fn set_sample_count_text(&mut self, text: &str) -> bool {
        // Parse as signed so "-5" is a rejected value rather than a parse error.
        let count = text
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|c| usize::try_from(c).ok())
            .and_then(valid_count);
        accept(&mut self.sample_count, count)
    }

    pub fn set_range_x_text(&mut self, text: &str) -> bool {
        accept(&mut self.range_x, parse_positive(text))
    }

    pub fn set_range_y_text(&mut self, text: &str) -> bool {
        accept(&mut self.range_y, parse_positive(text))
    }

    pub fn set_spec_limit_text(&mut self, text: &str) -> bool {
        accept(&mut self.spec_limit, parse_positive(text))
    }
}

fn accept<T>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}

fn valid_count(count: usize) -> Option<usize> {
    (1..=CapabilityConfig::MAX_SAMPLE_COUNT)
        .contains(&count)
        .then_some(count)
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn parse_positive(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().and_then(positive)
}
