use std::path::Path;

use crate::{
    CapabilityConfig, CapabilityError, CapabilityResult, ImportError, ImportOutcome,
    SampleGenerator, SampleSet, Suggestion, compute_capability, importer,
};

/// Working state of one capability analysis.
///
/// Holds the configuration, the current samples, and the last computed
/// result. The driver (a CLI command or a session script) owns the session
/// and applies actions to it one at a time.
///
/// # Example
///
/// ```
/// use cpkit_engine::{AnalysisSession, SampleGenerator, SampleSeed};
///
/// let mut session = AnalysisSession::new();
/// let mut generator = SampleGenerator::with_seed(SampleSeed::from_bytes([7; 16]));
///
/// session.generate(&mut generator);
/// let result = session.calculate().unwrap();
/// assert!(result.x.std_dev > 0.0);
///
/// session.clear();
/// assert!(session.calculate().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    config: CapabilityConfig,
    samples: SampleSet,
    result: CapabilityResult,
}

impl AnalysisSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: CapabilityConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &CapabilityConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut CapabilityConfig {
        &mut self.config
    }

    #[must_use]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// The last successfully computed result, zeros if none.
    #[must_use]
    pub fn result(&self) -> &CapabilityResult {
        &self.result
    }

    /// Advisory category for the current result.
    #[must_use]
    pub fn suggestion(&self) -> Option<Suggestion> {
        self.result.suggestion()
    }

    /// Replaces the samples with `sample_count` freshly generated ones.
    pub fn generate(&mut self, generator: &mut SampleGenerator) -> &SampleSet {
        let config = &self.config;
        self.samples =
            generator.generate(config.sample_count(), config.range_x(), config.range_y());
        log::debug!(
            "generated {} samples (range_x={}, range_y={})",
            self.samples.len(),
            config.range_x(),
            config.range_y()
        );
        &self.samples
    }

    /// Replaces the samples with the contents of a delimited text file.
    ///
    /// The file is parsed completely before the session is touched: on error
    /// the previous samples are kept. When at least one row is accepted the
    /// configured sample count follows the imported count.
    pub fn import_file<P>(&mut self, path: P) -> Result<ImportOutcome, ImportError>
    where
        P: AsRef<Path>,
    {
        let outcome = importer::import_file(path)?;
        self.config.set_sample_count(outcome.samples.len());
        self.load_samples(outcome.samples.clone());
        Ok(outcome)
    }

    /// Replaces the samples with an already loaded set.
    ///
    /// An empty set also resets the result to zeros.
    pub fn load_samples(&mut self, samples: SampleSet) {
        self.samples = samples;
        if self.samples.is_empty() {
            self.result = CapabilityResult::default();
        }
    }

    /// Recomputes the result from the current samples and specification limit.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::EmptySamples`] when there is nothing to
    /// compute; the result is left untouched.
    pub fn calculate(&mut self) -> Result<&CapabilityResult, CapabilityError> {
        self.result = compute_capability(&self.samples, self.config.spec_limit())?;
        Ok(&self.result)
    }

    /// Drops all samples and resets the result to zeros.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.result = CapabilityResult::default();
    }
}
