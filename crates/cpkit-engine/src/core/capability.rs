use cpkit_stats::descriptive;
use serde::{Deserialize, Serialize};

use crate::{CapabilityError, Sample, Suggestion};

/// Capability figures for a single measured axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisCapability {
    /// Arithmetic mean of the deviations.
    pub mean: f64,
    /// Sample standard deviation (divisor `n - 1`).
    pub std_dev: f64,
    /// One-sided-minimum process capability index.
    pub cpk: f64,
}

impl AxisCapability {
    /// Computes mean, standard deviation, and CPK for one axis.
    #[must_use]
    pub fn from_values(values: &[f64], spec_limit: f64) -> Self {
        let mean = descriptive::mean(values);
        let std_dev = descriptive::sample_std_dev(values, mean);
        Self {
            mean,
            std_dev,
            cpk: cpk(mean, std_dev, spec_limit),
        }
    }
}

/// Result of a capability calculation over both axes.
///
/// Always recomputed in full from the current samples. The [`Default`] value
/// (all zeros) stands for "nothing computed yet".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilityResult {
    pub x: AxisCapability,
    pub y: AxisCapability,
}

impl CapabilityResult {
    /// Advisory category for this result, if any applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<Suggestion> {
        Suggestion::classify(self.x.cpk, self.y.cpk)
    }
}

/// Process capability index for a tolerance of `±spec_limit` around zero.
///
/// `CPK = min[(USL - μ) / 3σ, (μ - LSL) / 3σ]` with `USL = spec_limit` and
/// `LSL = -spec_limit`.
///
/// A zero standard deviation yields `0.0`. Strictly speaking a process without
/// variation has unbounded capability; reporting zero keeps the figure finite
/// and matches what is displayed for an empty dataset.
#[must_use]
pub fn cpk(mean: f64, std_dev: f64, spec_limit: f64) -> f64 {
    if std_dev > 0.0 {
        let upper = (spec_limit - mean) / (3.0 * std_dev);
        let lower = (mean + spec_limit) / (3.0 * std_dev);
        upper.min(lower)
    } else {
        0.0
    }
}

/// Computes the capability of both axes from `samples`.
///
/// # Errors
///
/// Returns [`CapabilityError::EmptySamples`] without computing anything when
/// `samples` is empty.
pub fn compute_capability(
    samples: &[Sample],
    spec_limit: f64,
) -> Result<CapabilityResult, CapabilityError> {
    if samples.is_empty() {
        return Err(CapabilityError::EmptySamples);
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = samples.iter().map(|s| (s.x, s.y)).unzip();

    Ok(CapabilityResult {
        x: AxisCapability::from_values(&xs, spec_limit),
        y: AxisCapability::from_values(&ys, spec_limit),
    })
}
