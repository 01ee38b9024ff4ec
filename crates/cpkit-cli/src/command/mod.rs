use clap::{Parser, Subcommand};

use self::{calc::CalcArg, generate::GenerateArg, import::ImportArg, session::SessionArg};

mod calc;
mod generate;
mod import;
mod report;
mod session;
mod settings;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate random deviation samples and compute their CPK
    Generate(#[clap(flatten)] GenerateArg),
    /// Import deviation samples from a comma/tab separated file and compute their CPK
    Import(#[clap(flatten)] ImportArg),
    /// Recompute the CPK of a saved sample record
    Calc(#[clap(flatten)] CalcArg),
    /// Run analysis commands line by line from a script or stdin
    Session(#[clap(flatten)] SessionArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Import(arg) => import::run(&arg)?,
        Mode::Calc(arg) => calc::run(&arg)?,
        Mode::Session(arg) => session::run(&arg)?,
    }
    Ok(())
}
