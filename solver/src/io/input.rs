//! Puzzle input files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a puzzle input file to a string.
///
/// A missing or unreadable file is fatal to the run; there is no fallback.
pub fn read_input(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading puzzle input");
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_contents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("input.txt");
        fs::write(&path, "L68\n").expect("write");
        assert_eq!(read_input(&path).expect("read"), "L68\n");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = read_input(&temp.path().join("missing.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}
