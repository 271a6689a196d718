//! Scan integer ranges for ids whose digits are a repeated block.
//!
//! An id like `446446` reads as `446` written twice; such ids are invalid
//! and their sum is the puzzle answer. Sums exceed 32-bit range, so
//! accumulation is `i64` throughout.

/// Inclusive integer interval to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: i64,
    pub end: i64,
}

/// Which digit-block repetitions make an id invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatRule {
    /// Only an even-length rendering split into two equal halves.
    HalvesOnly,
    /// Any block width dividing the length, repeated to the full length.
    AnyBlock,
}

/// Parse comma-separated `start-end` ranges.
///
/// Tokens are trimmed; malformed or empty tokens are skipped silently.
pub fn parse_ranges(input: &str) -> Vec<IdRange> {
    input
        .split(',')
        .filter_map(|token| {
            let (start, end) = token.trim().split_once('-')?;
            Some(IdRange {
                start: start.parse().ok()?,
                end: end.parse().ok()?,
            })
        })
        .collect()
}

/// Sum every id in the given ranges whose rendering is a repeated block.
///
/// An id counts once even when several block widths match.
pub fn invalid_id_sum(ranges: &[IdRange], rule: RepeatRule) -> i64 {
    ranges
        .iter()
        .map(|range| {
            (range.start..=range.end)
                .filter(|&id| is_repeated(id, rule))
                .sum::<i64>()
        })
        .sum()
}

/// True if the decimal rendering of `id` is a digit block repeated.
fn is_repeated(id: i64, rule: RepeatRule) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    let half = len / 2;

    match rule {
        RepeatRule::HalvesOnly => len % 2 == 0 && digits[..half] == digits[half..],
        RepeatRule::AnyBlock => (1..=half)
            .any(|width| len % width == 0 && digits[..width].repeat(len / width) == digits),
    }
}
