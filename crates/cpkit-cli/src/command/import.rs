use std::path::PathBuf;

use anyhow::Context as _;
use cpkit_engine::AnalysisSession;

use super::{report::ReportArg, settings::Setting};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ImportArg {
    /// Path to a text file with one `x,y` (or tab separated) sample per line
    file: PathBuf,
    /// Specification limit (precision) used for CPK [default: 0.02]
    #[arg(long, allow_hyphen_values = true)]
    precision: Option<String>,
    #[clap(flatten)]
    report: ReportArg,
}

pub(crate) fn run(arg: &ImportArg) -> anyhow::Result<()> {
    let ImportArg {
        file,
        precision,
        report,
    } = arg;

    let mut session = AnalysisSession::new();
    if let Some(text) = precision {
        Setting::Precision.apply(session.config_mut(), text);
    }

    let outcome = session.import_file(file)?;
    eprintln!(
        "Imported {} samples from {} ({} lines skipped)",
        outcome.samples.len(),
        file.display(),
        outcome.skipped_lines
    );

    session
        .calculate()
        .with_context(|| format!("Cannot compute CPK for {}", file.display()))?;

    report.emit(&session, None)
}
