//! Text presentation of samples and capability results.

use std::io::{self, Write};

use cpkit_engine::{AnalysisSession, CapabilityConfig, CapabilityResult, SampleSet, Suggestion};
use cpkit_stats::descriptive::DescriptiveStats;

/// Decimal places used for computed results.
const RESULT_PRECISION: usize = 4;
/// Decimal places used for raw per-sample deviations.
const SAMPLE_PRECISION: usize = 6;

/// The four headline figures, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedResult {
    pub mean_x: String,
    pub mean_y: String,
    pub cpk_x: String,
    pub cpk_y: String,
}

impl FormattedResult {
    pub fn new(result: &CapabilityResult) -> Self {
        Self {
            mean_x: format_result_value(result.x.mean),
            mean_y: format_result_value(result.y.mean),
            cpk_x: format_result_value(result.x.cpk),
            cpk_y: format_result_value(result.y.cpk),
        }
    }
}

pub fn format_result_value(value: f64) -> String {
    format!("{value:.prec$}", prec = RESULT_PRECISION)
}

pub fn format_sample_value(value: f64) -> String {
    format!("{value:.prec$}", prec = SAMPLE_PRECISION)
}

pub fn suggestion_text(suggestion: Suggestion) -> &'static str {
    match suggestion {
        Suggestion::Excellent => "CPK is excellent, consider reducing cost",
        Suggestion::Good => "Process is in good condition, maintain the current state",
        Suggestion::Poor => "Too many defects, process capability must be improved",
        Suggestion::Inadequate => {
            "Process capability is poor, reconsider the overall process design"
        }
    }
}

pub fn write_config<W>(out: &mut W, config: &CapabilityConfig) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Sample count: {}", config.sample_count())?;
    writeln!(out, "Range x:      {}", config.range_x())?;
    writeln!(out, "Range y:      {}", config.range_y())?;
    writeln!(out, "Precision:    {}", config.spec_limit())?;
    Ok(())
}

pub fn write_sample_table<W>(out: &mut W, samples: &SampleSet) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{:>5} | {:>12} | {:>12}", "#", "x deviation", "y deviation")?;
    writeln!(out, "{:-<5}-+-{:-<12}-+-{:-<12}", "", "", "")?;
    for sample in samples {
        writeln!(
            out,
            "{:>5} | {:>12} | {:>12}",
            sample.index,
            format_sample_value(sample.x),
            format_sample_value(sample.y)
        )?;
    }

    let x_stats = DescriptiveStats::new(samples.iter().map(|s| s.x));
    let y_stats = DescriptiveStats::new(samples.iter().map(|s| s.y));
    if let (Some(x_stats), Some(y_stats)) = (x_stats, y_stats) {
        writeln!(out, "{:-<5}-+-{:-<12}-+-{:-<12}", "", "", "")?;
        writeln!(
            out,
            "{:>5} | {:>12} | {:>12}",
            "min",
            format_sample_value(x_stats.min),
            format_sample_value(y_stats.min)
        )?;
        writeln!(
            out,
            "{:>5} | {:>12} | {:>12}",
            "max",
            format_sample_value(x_stats.max),
            format_sample_value(y_stats.max)
        )?;
    }
    Ok(())
}

pub fn write_result<W>(out: &mut W, result: &CapabilityResult) -> io::Result<()>
where
    W: Write,
{
    let formatted = FormattedResult::new(result);
    writeln!(out, "{:<8} {:>10} {:>10}", "", "x", "y")?;
    writeln!(
        out,
        "{:<8} {:>10} {:>10}",
        "Mean", formatted.mean_x, formatted.mean_y
    )?;
    writeln!(
        out,
        "{:<8} {:>10} {:>10}",
        "Std dev",
        format_result_value(result.x.std_dev),
        format_result_value(result.y.std_dev)
    )?;
    writeln!(
        out,
        "{:<8} {:>10} {:>10}",
        "CPK", formatted.cpk_x, formatted.cpk_y
    )?;
    if let Some(suggestion) = result.suggestion() {
        writeln!(out, "Suggestion: {}", suggestion_text(suggestion))?;
    }
    Ok(())
}

/// Writes the result of `session`, preceded by its samples when `table` is set.
pub fn write_report<W>(out: &mut W, session: &AnalysisSession, table: bool) -> io::Result<()>
where
    W: Write,
{
    if table {
        write_sample_table(out, session.samples())?;
        writeln!(out)?;
    }
    writeln!(
        out,
        "CPK over {} samples (precision {}):",
        session.samples().len(),
        session.config().spec_limit()
    )?;
    write_result(out, session.result())
}
