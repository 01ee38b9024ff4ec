use chrono::{DateTime, Utc};
use cpkit_engine::{
    AnalysisSession, CapabilityConfig, CapabilityResult, SampleSeed, SampleSet, Suggestion,
};
use serde::{Deserialize, Serialize};

/// Sample set saved together with the configuration it was produced under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Timestamp when the record was written (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Seed of the generator, absent for imported data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SampleSeed>,
    pub config: CapabilityConfig,
    pub samples: SampleSet,
}

impl SampleRecord {
    pub fn from_session(session: &AnalysisSession, seed: Option<SampleSeed>) -> Self {
        Self {
            recorded_at: Utc::now(),
            seed,
            config: *session.config(),
            samples: session.samples().clone(),
        }
    }

    pub fn into_session(self) -> AnalysisSession {
        let mut session = AnalysisSession::with_config(self.config);
        session.load_samples(self.samples);
        session
    }
}

/// Machine-readable form of a calculation result
#[derive(Debug, Clone, Serialize)]
pub struct ResultReport {
    pub spec_limit: f64,
    pub sample_count: usize,
    pub result: CapabilityResult,
    pub suggestion: Option<Suggestion>,
}

impl ResultReport {
    pub fn from_session(session: &AnalysisSession) -> Self {
        Self {
            spec_limit: session.config().spec_limit(),
            sample_count: session.samples().len(),
            result: *session.result(),
            suggestion: session.suggestion(),
        }
    }
}
