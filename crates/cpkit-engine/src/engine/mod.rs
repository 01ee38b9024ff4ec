//! Workflow around the capability calculation.
//!
//! - [`CapabilityConfig`] - Sample count, generation ranges, and spec limit
//! - [`SampleGenerator`] / [`SampleSeed`] - Seeded uniform sample generation
//! - [`importer`] - Comma/tab delimited text import
//! - [`AnalysisSession`] - Owns config, samples, and the latest result
//!
//! # Workflow
//!
//! 1. Adjust the [`CapabilityConfig`] (invalid entries are ignored)
//! 2. Fill the session with samples, either generated or imported
//! 3. [`AnalysisSession::calculate`] to recompute the result
//! 4. Present the result and its [`crate::Suggestion`]

pub use self::{config::*, importer::ImportOutcome, sample_generator::*, session::*};

mod config;
pub mod importer;
mod sample_generator;
mod session;
