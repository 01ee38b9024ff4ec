use std::path::PathBuf;

use anyhow::Context as _;

use super::{report::ReportArg, settings::Setting};
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CalcArg {
    /// Path to a sample record written with `--save`
    record: PathBuf,
    /// Override the specification limit stored in the record
    #[arg(long, allow_hyphen_values = true)]
    precision: Option<String>,
    #[clap(flatten)]
    report: ReportArg,
}

pub(crate) fn run(arg: &CalcArg) -> anyhow::Result<()> {
    let CalcArg {
        record,
        precision,
        report,
    } = arg;

    let saved = util::read_record_file(record)?;
    let seed = saved.seed;
    log::info!(
        "loaded {} samples recorded at {}",
        saved.samples.len(),
        saved.recorded_at
    );

    let mut session = saved.into_session();
    if let Some(text) = precision {
        Setting::Precision.apply(session.config_mut(), text);
    }

    session
        .calculate()
        .with_context(|| format!("Cannot compute CPK for {}", record.display()))?;

    report.emit(&session, seed)
}
