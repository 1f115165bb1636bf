use super::board::{Grid, COLS, ROWS};

const RUN: usize = 4;

/// Check whether the mark at `(row, col)` completes four in a row on a
/// single player's scorecard.
///
/// The horizontal and both diagonal checks scan the whole line through the
/// cell. The vertical check only looks downward, and only when at least
/// three rows lie below `row`: a piece that just landed has nothing above it.
pub fn has_win_at(scorecard: &Grid, row: usize, col: usize) -> bool {
    if scorecard[row][col] != 1 {
        return false;
    }

    check_horizontal(scorecard, row)
        || check_vertical(scorecard, row, col)
        || check_main_diagonal(scorecard, row, col)
        || check_anti_diagonal(scorecard, row, col)
}

fn has_run(line: &[u8]) -> bool {
    line.len() >= RUN && line.windows(RUN).any(|w| w.iter().all(|&v| v == 1))
}

fn check_horizontal(scorecard: &Grid, row: usize) -> bool {
    has_run(&scorecard[row])
}

fn check_vertical(scorecard: &Grid, row: usize, col: usize) -> bool {
    if row > ROWS - RUN {
        return false;
    }
    (row..row + RUN).all(|r| scorecard[r][col] == 1)
}

/// Cells `(i, i + offset)` that fall inside the grid, top to bottom.
fn diagonal(offset: isize, cell: impl Fn(usize, usize) -> u8) -> Vec<u8> {
    (0..ROWS)
        .filter_map(|r| {
            let c = r as isize + offset;
            (0..COLS as isize).contains(&c).then(|| cell(r, c as usize))
        })
        .collect()
}

/// Diagonal "\" through the cell.
fn check_main_diagonal(scorecard: &Grid, row: usize, col: usize) -> bool {
    let offset = col as isize - row as isize;
    has_run(&diagonal(offset, |r, c| scorecard[r][c]))
}

/// Diagonal "/" through the cell, taken as the "\" diagonal of the
/// left-right mirrored grid.
fn check_anti_diagonal(scorecard: &Grid, row: usize, col: usize) -> bool {
    let mirrored_col = COLS - 1 - col;
    let offset = mirrored_col as isize - row as isize;
    has_run(&diagonal(offset, |r, c| scorecard[r][COLS - 1 - c]))
}
