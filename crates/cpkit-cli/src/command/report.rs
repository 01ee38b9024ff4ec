use std::path::PathBuf;

use anyhow::Context as _;
use cpkit_engine::{AnalysisSession, SampleSeed};

use crate::{
    schema::record::{ResultReport, SampleRecord},
    util::Output,
    view,
};

/// How the outcome of a one-shot command is written.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Print the per-sample deviation table before the result
    #[arg(long)]
    pub table: bool,
    /// Write the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Output file path for the result (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Also save the samples and configuration as a JSON record
    #[arg(long)]
    pub save: Option<PathBuf>,
}

impl ReportArg {
    pub(crate) fn emit(
        &self,
        session: &AnalysisSession,
        seed: Option<SampleSeed>,
    ) -> anyhow::Result<()> {
        if let Some(path) = &self.save {
            let record = SampleRecord::from_session(session, seed);
            Output::save_json(&record, Some(path.as_path()))?;
            eprintln!(
                "Saved {} samples to {}",
                session.samples().len(),
                path.display()
            );
        }

        if self.json {
            let report = ResultReport::from_session(session);
            return Output::save_json(&report, self.output.as_deref());
        }

        let mut output = Output::from_output_path(self.output.as_deref())?;
        view::write_report(&mut output, session, self.table)
            .with_context(|| format!("Failed to write report to {}", output.display_path()))?;
        output.finish()
    }
}
