//! Daily puzzle answer check runner.
//!
//! Runs a fixed sequence of puzzle checks against hardcoded expected answers
//! and stops at the first mismatch with a stable exit code. Check results are
//! printed to stdout; diagnostics go to stderr via `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use solver::core::check::{CheckOutcome, CheckReport};
use solver::io::config::{SolverConfig, load_config, write_config};
use solver::suite::{self, SuiteOutcome};
use solver::{exit_codes, logging};

#[derive(Parser)]
#[command(name = "solver", version, about = "Daily puzzle answer check runner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default `solver.toml`.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Run only the built-in sample checks (no input files needed).
    Samples,
    /// Run the full suite, including the puzzle input regressions.
    Run {
        /// Path to the solver configuration.
        #[arg(long, default_value = "solver.toml")]
        config: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(force),
        Command::Samples => report(suite::run_samples(print_check)?),
        Command::Run { config } => {
            let config = load_config(&config)?;
            report(suite::run_full(&config, print_check)?)
        }
    }
}

fn cmd_init(force: bool) -> Result<i32> {
    let path = PathBuf::from("solver.toml");
    if path.exists() && !force {
        bail!("solver.toml exists (use --force to overwrite)");
    }
    write_config(&path, &SolverConfig::default())?;
    println!("wrote solver.toml");
    Ok(exit_codes::OK)
}

fn print_check(report: &CheckReport) {
    match report.outcome {
        CheckOutcome::Pass => println!("ok {}", report.name),
        CheckOutcome::Mismatch { expected, actual } => {
            println!("FAIL {}: expected {expected}, actual {actual}", report.name);
        }
    }
}

fn report(outcome: SuiteOutcome) -> Result<i32> {
    match outcome {
        SuiteOutcome::Passed { checks } => {
            println!("{checks} checks passed");
            Ok(exit_codes::OK)
        }
        SuiteOutcome::Mismatch { passed, .. } => {
            println!("stopped after {passed} passing checks");
            Ok(exit_codes::MISMATCH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_samples() {
        let cli = Cli::parse_from(["solver", "samples"]);
        assert!(matches!(cli.command, Command::Samples));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["solver", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true }));
    }

    #[test]
    fn parse_run_with_config_path() {
        let cli = Cli::parse_from(["solver", "run", "--config", "custom.toml"]);
        match cli.command {
            Command::Run { config } => assert_eq!(config, PathBuf::from("custom.toml")),
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn report_maps_outcomes_to_exit_codes() {
        let passed = SuiteOutcome::Passed { checks: 10 };
        assert_eq!(report(passed).expect("report"), exit_codes::OK);

        let mismatch = SuiteOutcome::Mismatch {
            passed: 3,
            failed: solver::core::check::evaluate("dial input", 0, 1105),
        };
        assert_eq!(report(mismatch).expect("report"), exit_codes::MISMATCH);
    }
}
