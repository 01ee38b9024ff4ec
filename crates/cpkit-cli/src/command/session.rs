//! Line-oriented analysis session.
//!
//! Each script line is one user action against a single [`AnalysisSession`]:
//!
//! ```text
//! # comment
//! count 50
//! range-x 0.02
//! precision 0.05
//! generate
//! table
//! import data.csv
//! calc
//! show
//! save record.json
//! clear
//! ```
//!
//! Failures (unknown commands, unreadable files, calculating without
//! samples) are reported and the script continues.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use cpkit_engine::{AnalysisSession, SampleGenerator, SampleSeed};

use super::settings::Setting;
use crate::{schema::record::SampleRecord, util::Output, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SessionArg {
    /// Script with one command per line (reads stdin if omitted)
    script: Option<PathBuf>,
    /// Seed for reproducible `generate` commands (32 hex characters)
    #[arg(long)]
    seed: Option<SampleSeed>,
}

#[derive(Debug, Clone, PartialEq)]
enum ScriptCommand {
    Set(Setting, String),
    Generate,
    Import(PathBuf),
    Calc,
    Clear,
    Show,
    Table,
    Save(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
enum ScriptError {
    #[display("unknown command `{_0}`")]
    UnknownCommand(#[error(not(source))] String),
    #[display("`{_0}` expects an argument")]
    MissingArgument(#[error(not(source))] String),
}

fn parse_command(line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (name, argument) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, rest)| (name, rest.trim()));
    let required = || {
        if argument.is_empty() {
            Err(ScriptError::MissingArgument(name.to_owned()))
        } else {
            Ok(argument)
        }
    };

    let command = match name {
        "generate" => ScriptCommand::Generate,
        "import" => ScriptCommand::Import(PathBuf::from(required()?)),
        "calc" => ScriptCommand::Calc,
        "clear" => ScriptCommand::Clear,
        "show" => ScriptCommand::Show,
        "table" => ScriptCommand::Table,
        "save" => ScriptCommand::Save(PathBuf::from(required()?)),
        _ => match Setting::from_name(name) {
            Some(setting) => ScriptCommand::Set(setting, required()?.to_owned()),
            None => return Err(ScriptError::UnknownCommand(name.to_owned())),
        },
    };
    Ok(Some(command))
}

struct ScriptRunner<'a, W> {
    session: AnalysisSession,
    generator: SampleGenerator,
    /// Seed of the generator when the current samples were generated.
    samples_seed: Option<SampleSeed>,
    out: &'a mut W,
}

impl<'a, W> ScriptRunner<'a, W>
where
    W: Write,
{
    fn new(generator: SampleGenerator, out: &'a mut W) -> Self {
        Self {
            session: AnalysisSession::new(),
            generator,
            samples_seed: None,
            out,
        }
    }

    fn execute(&mut self, command: ScriptCommand) -> io::Result<()> {
        match command {
            ScriptCommand::Set(setting, text) => {
                setting.apply(self.session.config_mut(), &text);
            }
            ScriptCommand::Generate => {
                let count = self.session.generate(&mut self.generator).len();
                self.samples_seed = Some(self.generator.seed());
                writeln!(self.out, "Generated {count} samples")?;
                self.calculate()?;
            }
            ScriptCommand::Import(path) => match self.session.import_file(&path) {
                Ok(outcome) => {
                    self.samples_seed = None;
                    writeln!(
                        self.out,
                        "Imported {} samples ({} lines skipped)",
                        outcome.samples.len(),
                        outcome.skipped_lines
                    )?;
                    self.calculate()?;
                }
                Err(err) => writeln!(self.out, "error: {err}")?,
            },
            ScriptCommand::Calc => self.calculate()?,
            ScriptCommand::Clear => {
                self.session.clear();
                self.samples_seed = None;
                writeln!(self.out, "Cleared samples")?;
                view::write_result(self.out, self.session.result())?;
            }
            ScriptCommand::Show => {
                view::write_config(self.out, self.session.config())?;
                writeln!(self.out, "Samples:      {}", self.session.samples().len())?;
                view::write_result(self.out, self.session.result())?;
            }
            ScriptCommand::Table => view::write_sample_table(self.out, self.session.samples())?,
            ScriptCommand::Save(path) => {
                let record = SampleRecord::from_session(&self.session, self.samples_seed);
                match Output::save_json(&record, Some(path.as_path())) {
                    Ok(()) => writeln!(self.out, "Saved samples to {}", path.display())?,
                    Err(err) => writeln!(self.out, "error: {err:#}")?,
                }
            }
        }
        Ok(())
    }

    fn calculate(&mut self) -> io::Result<()> {
        match self.session.calculate() {
            Ok(result) => view::write_result(self.out, result),
            Err(err) => writeln!(self.out, "warning: {err}"),
        }
    }
}

/// Runs every line of `reader` against a fresh session and returns it.
fn run_script<R, W>(
    reader: R,
    out: &mut W,
    generator: SampleGenerator,
) -> anyhow::Result<AnalysisSession>
where
    R: BufRead,
    W: Write,
{
    let mut runner = ScriptRunner::new(generator, out);
    for (line_index, line) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line.with_context(|| format!("Failed to read script line {line_number}"))?;
        log::debug!("script line {line_number}: {line}");
        match parse_command(&line) {
            Ok(Some(command)) => runner
                .execute(command)
                .context("Failed to write session output")?,
            Ok(None) => {}
            Err(err) => writeln!(runner.out, "line {line_number}: {err}")
                .context("Failed to write session output")?,
        }
    }
    runner.out.flush().context("Failed to flush session output")?;
    Ok(runner.session)
}

pub(crate) fn run(arg: &SessionArg) -> anyhow::Result<()> {
    let SessionArg { script, seed } = arg;

    let generator = match seed {
        Some(seed) => SampleGenerator::with_seed(*seed),
        None => SampleGenerator::new(),
    };
    let mut out = Output::stdout();

    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script file: {}", path.display()))?;
            run_script(BufReader::new(file), &mut out, generator)?;
        }
        None => {
            run_script(io::stdin().lock(), &mut out, generator)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use cpkit_engine::{CapabilityConfig, CapabilityResult};

    use super::*;

    fn seeded() -> SampleGenerator {
        SampleGenerator::with_seed(SampleSeed::from_bytes([5; 16]))
    }

    fn run_text(script: &str) -> (AnalysisSession, String) {
        let mut out = Vec::new();
        let session = run_script(Cursor::new(script), &mut out, seeded()).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# note"), Ok(None));
        assert_eq!(parse_command("generate"), Ok(Some(ScriptCommand::Generate)));
        assert_eq!(
            parse_command("count  -5 "),
            Ok(Some(ScriptCommand::Set(Setting::Count, "-5".to_owned())))
        );
        assert_eq!(
            parse_command("import data dir/a b.csv"),
            Ok(Some(ScriptCommand::Import(PathBuf::from("data dir/a b.csv"))))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_command("explode"),
            Err(ScriptError::UnknownCommand("explode".to_owned()))
        );
        assert_eq!(
            parse_command("precision"),
            Err(ScriptError::MissingArgument("precision".to_owned()))
        );
        assert_eq!(
            parse_command("save "),
            Err(ScriptError::MissingArgument("save".to_owned()))
        );
    }

    #[test]
    fn test_rejected_settings_keep_previous_values() {
        let (session, _) = run_text("count 12\ncount -5\ncount 0\nprecision abc\n");
        assert_eq!(session.config().sample_count(), 12);
        assert_eq!(
            session.config().spec_limit(),
            CapabilityConfig::DEFAULT_SPEC_LIMIT
        );
    }

    #[test]
    fn test_generate_calculates_automatically() {
        let (session, output) = run_text("count 20\ngenerate\n");
        assert_eq!(session.samples().len(), 20);
        assert_ne!(*session.result(), CapabilityResult::default());
        assert!(output.contains("Generated 20 samples"));
        assert!(output.contains("CPK"));
    }

    #[test]
    fn test_calc_without_samples_warns_and_continues() {
        let (session, output) = run_text("calc\nbogus\ncount 3\n");
        assert!(output.contains("warning: no samples available to compute CPK"));
        assert!(output.contains("line 2: unknown command `bogus`"));
        assert_eq!(session.config().sample_count(), 3);
    }

    #[test]
    fn test_clear_resets_result() {
        let (session, output) = run_text("generate\nclear\n");
        assert!(session.samples().is_empty());
        assert_eq!(*session.result(), CapabilityResult::default());
        assert!(output.contains("Cleared samples"));
        assert!(output.contains("0.0000"));
    }

    #[test]
    fn test_import_and_failed_import() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.csv");
        std::fs::write(&data, "1.0,2.0\n,\nbad,line\n3.0\t4.0\n").unwrap();
        let missing = dir.path().join("missing.csv");

        let script = format!("import {}\nimport {}\n", data.display(), missing.display());
        let (session, output) = run_text(&script);

        assert!(output.contains("Imported 2 samples (2 lines skipped)"));
        assert!(output.contains("error: failed to open sample file"));
        assert_eq!(session.samples().len(), 2);
        assert_eq!(session.config().sample_count(), 2);
    }

    #[test]
    fn test_save_writes_record_with_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");

        let script = format!("count 4\ngenerate\nsave {}\n", path.display());
        let (session, output) = run_text(&script);
        assert!(output.contains("Saved samples to"));

        let record = crate::util::read_record_file(&path).unwrap();
        assert_eq!(record.seed, Some(SampleSeed::from_bytes([5; 16])));
        assert_eq!(record.samples.len(), session.samples().len());
    }
}
