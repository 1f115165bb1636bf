use super::player::Player;
use super::win::has_win_at;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Row-major integer grid. Row 0 is the top, row 5 is the bottom.
pub type Grid = [[u8; COLS]; ROWS];

const EMPTY: Grid = [[0; COLS]; ROWS];

/// Placement grid plus one scorecard per player.
///
/// `gameplay` holds player marks (0 empty, 1 Red, 2 Yellow). Each scorecard
/// holds 1 where its player has a piece and 0 elsewhere, so a cell is set on
/// at most one scorecard and only where `gameplay` is non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    gameplay: Grid,
    red_scorecard: Grid,
    yellow_scorecard: Grid,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            gameplay: EMPTY,
            red_scorecard: EMPTY,
            yellow_scorecard: EMPTY,
        }
    }

    pub fn gameplay(&self) -> &Grid {
        &self.gameplay
    }

    pub fn red_scorecard(&self) -> &Grid {
        &self.red_scorecard
    }

    pub fn yellow_scorecard(&self) -> &Grid {
        &self.yellow_scorecard
    }

    pub fn scorecard(&self, player: Player) -> &Grid {
        match player {
            Player::Red => &self.red_scorecard,
            Player::Yellow => &self.yellow_scorecard,
        }
    }

    /// Drop a piece into a column, returning the `(row, col)` where it landed.
    ///
    /// Returns `None` without touching the board when the column is full or
    /// out of range.
    pub fn drop(&mut self, col: usize, player: Player) -> Option<(usize, usize)> {
        if col >= COLS {
            return None;
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS).rev().find(|&row| self.gameplay[row][col] == 0)?;
        self.gameplay[row][col] = player.id();
        match player {
            Player::Red => self.red_scorecard[row][col] = 1,
            Player::Yellow => self.yellow_scorecard[row][col] = 1,
        }
        Some((row, col))
    }

    /// Check if the piece at `(row, col)` completed four in a row for its owner.
    ///
    /// Empty and out-of-range cells have no winner.
    pub fn check_win(&self, row: usize, col: usize) -> Option<Player> {
        if row >= ROWS || col >= COLS {
            return None;
        }
        let player = Player::from_id(self.gameplay[row][col])?;
        has_win_at(self.scorecard(player), row, col).then_some(player)
    }

    /// Columns whose top cell is still empty, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.gameplay[0][col] == 0).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.gameplay[0].iter().all(|&cell| cell != 0)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
