//! Process capability analysis for paired deviation samples.
//!
//! - [`core`]: sample model, the CPK calculation, and advisory classification
//! - [`engine`]: configuration, sample generation, file import, and the
//!   [`AnalysisSession`] that owns the working state

use std::{io, path::PathBuf};

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CapabilityError {
    #[display("no samples available to compute CPK")]
    EmptySamples,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum ImportError {
    #[display("failed to open sample file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to read sample file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
}
