//! Roll accessibility on a storage grid.
//!
//! A cell holds a roll (`@`) or is empty (`.`). A roll is accessible when
//! fewer than 4 of its 8 neighbors hold rolls; cells outside the grid count
//! as empty.

/// Parse a grid, one row per line; `@` marks a roll.
pub fn parse_grid(input: &str) -> Vec<Vec<bool>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c == '@').collect())
        .collect()
}

/// Count rolls that are accessible in the unmodified grid.
pub fn accessible_rolls(grid: &[Vec<bool>]) -> i64 {
    let mut accessible = 0i64;
    for row in 0..grid.len() {
        for col in 0..grid[row].len() {
            if grid[row][col] && neighbour_rolls(grid, row, col) < 4 {
                accessible += 1;
            }
        }
    }
    accessible
}

/// Remove accessible rolls until a full sweep removes none; returns the total.
///
/// Sweeps run in row-major order and remove in place, so a removal uncovers
/// cells later in the same sweep. That ordering is observable in the totals.
pub fn remove_rolls(mut grid: Vec<Vec<bool>>) -> i64 {
    let mut removed = 0i64;
    loop {
        let mut removed_this_sweep = 0i64;
        for row in 0..grid.len() {
            for col in 0..grid[row].len() {
                if grid[row][col] && neighbour_rolls(&grid, row, col) < 4 {
                    grid[row][col] = false;
                    removed_this_sweep += 1;
                }
            }
        }
        removed += removed_this_sweep;
        if removed_this_sweep == 0 {
            return removed;
        }
    }
}

/// Number of the 8 neighbors holding a roll.
fn neighbour_rolls(grid: &[Vec<bool>], row: usize, col: usize) -> usize {
    const DIRECTIONS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    let mut count = 0;
    for (dr, dc) in DIRECTIONS {
        let Some(r) = row.checked_add_signed(dr) else {
            continue;
        };
        let Some(c) = col.checked_add_signed(dc) else {
            continue;
        };
        if grid.get(r).is_some_and(|cells| cells.get(c) == Some(&true)) {
            count += 1;
        }
    }
    count
}
