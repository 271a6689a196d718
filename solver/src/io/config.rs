//! Solver configuration stored in `solver.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Solver configuration (TOML).
///
/// This file is intended to be edited by humans. Missing fields (or a
/// missing file) default to the conventional input filenames in the working
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Directory the puzzle input files are read from.
    pub input_dir: PathBuf,

    /// Input file for the dial puzzle.
    pub dial_input: String,

    /// Input file for the id ranges puzzle.
    pub id_ranges_input: String,

    /// Input file for the battery joltage puzzle.
    pub joltage_input: String,

    /// Input file for the roll accessibility puzzle.
    pub rolls_input: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            dial_input: "input01.txt".to_string(),
            id_ranges_input: "input02.txt".to_string(),
            joltage_input: "input03.txt".to_string(),
            rolls_input: "input04.txt".to_string(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("dial_input", &self.dial_input),
            ("id_ranges_input", &self.id_ranges_input),
            ("joltage_input", &self.joltage_input),
            ("rolls_input", &self.rolls_input),
        ] {
            if name.trim().is_empty() {
                return Err(anyhow!("{field} must be a non-empty filename"));
            }
        }
        Ok(())
    }

    /// Resolve a configured filename against `input_dir`.
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.input_dir.join(name)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SolverConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');

    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, &buf)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SolverConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("solver.toml");
        let cfg = SolverConfig {
            input_dir: PathBuf::from("inputs"),
            ..SolverConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_missing_fields_from_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("solver.toml");
        fs::write(&path, "input_dir = \"puzzles\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.input_dir, PathBuf::from("puzzles"));
        assert_eq!(cfg.dial_input, "input01.txt");
    }

    #[test]
    fn empty_filename_is_rejected() {
        let cfg = SolverConfig {
            dial_input: String::new(),
            ..SolverConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("dial_input"));
    }
}
