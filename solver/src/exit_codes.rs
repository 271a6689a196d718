//! Stable exit codes for solver CLI commands.

/// All checks passed (or the command succeeded).
pub const OK: i32 = 0;
/// A check mismatched its expected answer; the run halted there.
pub const MISMATCH: i32 = 1;
/// The run failed before reaching a verdict (unreadable input, bad config).
pub const ERROR: i32 = 2;
