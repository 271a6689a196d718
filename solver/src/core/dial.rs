//! Circular dial simulation: count visits to position zero.
//!
//! The dial has 100 discrete positions (0..100) and starts at 50. Each move
//! rotates it one step at a time, left (decrement) or right (increment),
//! wrapping with true modulo so the position never leaves `[0, 100)`.

use std::sync::LazyLock;

use regex::Regex;

/// Number of discrete dial positions.
const DIAL_POSITIONS: i64 = 100;
/// Position the dial points at before the first move.
const START_POSITION: i64 = 50;

/// Rotation direction of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// One parsed rotation instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub direction: Direction,
    pub distance: u32,
}

/// When a zero visit counts during simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountRule {
    /// Count once per move whose final position is zero.
    EndOfMove,
    /// Count every single step that lands on zero; a move of 100 or more
    /// steps can count several times.
    EveryStep,
}

/// Parse moves from multi-line text, one `L<digits>`/`R<digits>` per line.
///
/// Lines that don't match are skipped silently.
pub fn parse_moves(input: &str) -> Vec<Move> {
    static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(L|R)(\d+)").unwrap());

    input
        .lines()
        .filter_map(|line| {
            let caps = MOVE_RE.captures(line)?;
            let direction = match &caps[1] {
                "L" => Direction::Left,
                _ => Direction::Right,
            };
            let distance = caps[2].parse().ok()?;
            Some(Move {
                direction,
                distance,
            })
        })
        .collect()
}

/// Simulate all moves from the start position and count zero visits.
pub fn zero_hits(moves: &[Move], rule: CountRule) -> i64 {
    let mut position = START_POSITION;
    let mut hits = 0i64;

    for mv in moves {
        for _ in 0..mv.distance {
            position = step(position, mv.direction);
            if rule == CountRule::EveryStep && position == 0 {
                hits += 1;
            }
        }
        if rule == CountRule::EndOfMove && position == 0 {
            hits += 1;
        }
    }

    hits
}

/// Advance one step, wrapping so the result stays in `[0, DIAL_POSITIONS)`.
fn step(position: i64, direction: Direction) -> i64 {
    let next = match direction {
        Direction::Left => position - 1,
        Direction::Right => position + 1,
    };
    next.rem_euclid(DIAL_POSITIONS)
}
