// crates/integral-cli/src/main.rs

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use integral_core::SatError;

mod cmd;
mod stats;

/// Exit status when two builders disagree on shape or on any cell.
const EXIT_DIVERGENCE: u8 = 2;
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(name = "integral")]
#[command(about = "Summed-area table builder and benchmark harness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cross-validate builders on a seeded grid, then time them
    Bench(cmd::bench::BenchArgs),

    /// Build a table and print the sum of one inclusive rectangle
    Query(cmd::query::QueryArgs),

    /// Check builders against each other and against direct summation
    Verify(cmd::verify::VerifyArgs),
}

fn main() -> ExitCode {
    env_logger::init();

    // clap exits with 2 on usage errors; 2 is reserved for divergence here.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let res = match cli.cmd {
        Commands::Bench(args) => cmd::bench::run(args),
        Commands::Query(args) => cmd::query::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(e: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status_for(e))
}

/// 2 when any error in the chain is a builder divergence, 1 otherwise.
fn exit_status_for(e: &anyhow::Error) -> u8 {
    let diverged = e
        .chain()
        .any(|c| c.downcast_ref::<SatError>().is_some_and(SatError::is_divergence));
    if diverged {
        EXIT_DIVERGENCE
    } else {
        EXIT_FAILURE
    }
}
