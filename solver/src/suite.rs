//! The fixed check sequence tying puzzle cores to inputs and answers.
//!
//! Checks run in a stable order and the suite halts at the first mismatch:
//! later checks do not run and later input files are not read. Sample checks
//! need no files; the full suite also replays each puzzle against its input
//! file and a pinned regression answer.

use anyhow::Result;
use tracing::debug;

use crate::core::check::{self, CheckReport, MismatchError};
use crate::core::dial::{self, CountRule};
use crate::core::ids::{self, RepeatRule};
use crate::core::joltage;
use crate::core::rolls;
use crate::io::config::SolverConfig;
use crate::io::input::read_input;

/// Verdict of a whole suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteOutcome {
    /// Every check passed.
    Passed { checks: u32 },
    /// A check failed; the suite stopped there.
    Mismatch { passed: u32, failed: CheckReport },
}

const DIAL_SAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";

const ID_RANGES_SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
                                1698522-1698528,446443-446449,38593856-38593862,\
                                565653-565659,824824821-824824827,2121212118-2121212124";

const JOLTAGE_SAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111";

const ROLLS_SAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

/// Battery budgets exercised by the joltage checks.
const PAIR_BUDGET: usize = 2;
const FULL_BUDGET: usize = 12;

/// Run only the built-in sample checks (no input files needed).
pub fn run_samples<F: FnMut(&CheckReport)>(on_check: F) -> Result<SuiteOutcome> {
    let mut run = SuiteRun::new(on_check);
    let result = sample_checks(&mut run);
    run.into_outcome(result)
}

/// Run the full suite: samples plus the input-file regressions.
pub fn run_full<F: FnMut(&CheckReport)>(
    config: &SolverConfig,
    on_check: F,
) -> Result<SuiteOutcome> {
    let mut run = SuiteRun::new(on_check);
    let result = sample_checks(&mut run).and_then(|()| input_checks(&mut run, config));
    run.into_outcome(result)
}

/// Tracks progress and reports each evaluated check to the caller.
struct SuiteRun<F: FnMut(&CheckReport)> {
    passed: u32,
    on_check: F,
}

impl<F: FnMut(&CheckReport)> SuiteRun<F> {
    fn new(on_check: F) -> Self {
        Self { passed: 0, on_check }
    }

    /// Evaluate one check; a mismatch halts the suite via [`MismatchError`].
    fn check(&mut self, name: &str, actual: i64, expected: i64) -> Result<()> {
        let report = check::evaluate(name, actual, expected);
        (self.on_check)(&report);
        if report.passed() {
            self.passed += 1;
            return Ok(());
        }
        Err(MismatchError(report).into())
    }

    /// Convert a section result into an outcome, passing other errors through.
    fn into_outcome(self, result: Result<()>) -> Result<SuiteOutcome> {
        match result {
            Ok(()) => Ok(SuiteOutcome::Passed {
                checks: self.passed,
            }),
            Err(err) => match err.downcast::<MismatchError>() {
                Ok(MismatchError(failed)) => Ok(SuiteOutcome::Mismatch {
                    passed: self.passed,
                    failed,
                }),
                Err(other) => Err(other),
            },
        }
    }
}

fn sample_checks<F: FnMut(&CheckReport)>(run: &mut SuiteRun<F>) -> Result<()> {
    debug!("running sample checks");

    let moves = dial::parse_moves(DIAL_SAMPLE);
    run.check(
        "dial sample, end-of-move",
        dial::zero_hits(&moves, CountRule::EndOfMove),
        3,
    )?;
    run.check(
        "dial sample, every-step",
        dial::zero_hits(&moves, CountRule::EveryStep),
        6,
    )?;
    let full_turns = dial::parse_moves("L300");
    run.check(
        "dial full rotations, every-step",
        dial::zero_hits(&full_turns, CountRule::EveryStep),
        3,
    )?;

    let doubles = ids::parse_ranges("11-22,95-115");
    run.check(
        "id ranges two-digit doubles",
        ids::invalid_id_sum(&doubles, RepeatRule::HalvesOnly),
        132,
    )?;
    let sample_ranges = ids::parse_ranges(ID_RANGES_SAMPLE);
    run.check(
        "id ranges sample",
        ids::invalid_id_sum(&sample_ranges, RepeatRule::HalvesOnly),
        1_227_775_554,
    )?;
    let boundary = ids::parse_ranges("2-17");
    run.check(
        "id ranges small boundary",
        ids::invalid_id_sum(&boundary, RepeatRule::HalvesOnly),
        11,
    )?;

    let banks = joltage::parse_banks(JOLTAGE_SAMPLE);
    run.check(
        "joltage sample, two batteries",
        joltage::total_joltage(&banks, PAIR_BUDGET),
        357,
    )?;
    run.check(
        "joltage sample, twelve batteries",
        joltage::total_joltage(&banks, FULL_BUDGET),
        3_121_910_778_619,
    )?;

    let grid = rolls::parse_grid(ROLLS_SAMPLE);
    run.check("rolls sample, accessible", rolls::accessible_rolls(&grid), 13)?;
    run.check("rolls sample, removed", rolls::remove_rolls(grid), 43)?;

    Ok(())
}

/// Regression checks against the real puzzle inputs.
///
/// Each input file is read once, at the start of its puzzle's section.
fn input_checks<F: FnMut(&CheckReport)>(
    run: &mut SuiteRun<F>,
    config: &SolverConfig,
) -> Result<()> {
    debug!(input_dir = %config.input_dir.display(), "running input-file checks");

    let dial_text = read_input(&config.input_path(&config.dial_input))?;
    let moves = dial::parse_moves(&dial_text);
    run.check(
        "dial input, end-of-move",
        dial::zero_hits(&moves, CountRule::EndOfMove),
        1105,
    )?;
    run.check(
        "dial input, every-step",
        dial::zero_hits(&moves, CountRule::EveryStep),
        6599,
    )?;

    let ranges_text = read_input(&config.input_path(&config.id_ranges_input))?;
    let ranges = ids::parse_ranges(&ranges_text);
    run.check(
        "id ranges input, halves only",
        ids::invalid_id_sum(&ranges, RepeatRule::HalvesOnly),
        15_873_079_081,
    )?;
    run.check(
        "id ranges input, any block",
        ids::invalid_id_sum(&ranges, RepeatRule::AnyBlock),
        22_617_871_034,
    )?;

    let joltage_text = read_input(&config.input_path(&config.joltage_input))?;
    let banks = joltage::parse_banks(&joltage_text);
    run.check(
        "joltage input, two batteries",
        joltage::total_joltage(&banks, PAIR_BUDGET),
        17_330,
    )?;
    run.check(
        "joltage input, twelve batteries",
        joltage::total_joltage(&banks, FULL_BUDGET),
        171_518_260_283_767,
    )?;

    let rolls_text = read_input(&config.input_path(&config.rolls_input))?;
    let grid = rolls::parse_grid(&rolls_text);
    run.check("rolls input, accessible", rolls::accessible_rolls(&grid), 1508)?;
    run.check("rolls input, removed", rolls::remove_rolls(grid), 8538)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn samples_all_pass() {
        let mut seen = Vec::new();
        let outcome = run_samples(|report| seen.push(report.clone())).expect("samples");
        assert_eq!(outcome, SuiteOutcome::Passed { checks: 10 });
        assert_eq!(seen.len(), 10);
        assert!(seen.iter().all(CheckReport::passed));
    }

    #[test]
    fn full_suite_halts_at_first_mismatch() {
        let temp = tempfile::tempdir().expect("tempdir");
        // Not the real puzzle input, so the first dial regression check
        // must fail and halt the suite.
        fs::write(temp.path().join("input01.txt"), "L68\nL30\n").expect("write");
        let config = SolverConfig {
            input_dir: temp.path().to_path_buf(),
            ..SolverConfig::default()
        };

        let mut seen = Vec::new();
        let outcome = run_full(&config, |report| seen.push(report.clone())).expect("suite");

        match outcome {
            SuiteOutcome::Mismatch { passed, failed } => {
                assert_eq!(passed, 10);
                assert_eq!(failed.name, "dial input, end-of-move");
            }
            SuiteOutcome::Passed { .. } => panic!("expected a mismatch"),
        }
        // The failing check is reported; nothing after it runs.
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn full_suite_requires_input_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config = SolverConfig {
            input_dir: temp.path().to_path_buf(),
            ..SolverConfig::default()
        };
        let err = run_full(&config, |_| {}).unwrap_err();
        assert!(format!("{err:#}").contains("input01.txt"));
    }
}
