use anyhow::Context as _;
use cpkit_engine::{AnalysisSession, SampleGenerator, SampleSeed};

use super::{report::ReportArg, settings::ConfigArg};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    #[clap(flatten)]
    config: ConfigArg,
    /// Seed for reproducible samples (32 hex characters)
    #[arg(long)]
    seed: Option<SampleSeed>,
    #[clap(flatten)]
    report: ReportArg,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        config,
        seed,
        report,
    } = arg;

    let mut session = AnalysisSession::new();
    config.apply(session.config_mut());

    let mut generator = match seed {
        Some(seed) => SampleGenerator::with_seed(*seed),
        None => SampleGenerator::new(),
    };
    log::info!("generating with seed {}", generator.seed());

    session.generate(&mut generator);
    session
        .calculate()
        .context("Cannot compute CPK for the generated samples")?;

    report.emit(&session, Some(generator.seed()))
}
