use super::{BoardState, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// A placed piece. Created once per successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
    pub player: Player,
}

/// One game episode: the board, whose turn it is, and the result once decided.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: BoardState,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: BoardState::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current player's piece. The turn only passes on success.
    pub fn play(&mut self, column: usize) -> Result<Move, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= super::COLS {
            return Err(MoveError::InvalidColumn);
        }

        let player = self.current_player;
        let (row, column) = self
            .board
            .drop(column, player)
            .ok_or(MoveError::ColumnFull)?;

        if let Some(winner) = self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = player.other();

        Ok(Move {
            row,
            column,
            player,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_play() {
        let mut state = GameState::initial();
        let mv = state.play(3).unwrap();

        assert_eq!(
            mv,
            Move {
                row: 5,
                column: 3,
                player: Player::Red
            }
        );
        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().gameplay()[5][3], 1);
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut state = GameState::initial();
        for _ in 0..ROWS {
            state.play(0).unwrap();
        }
        let player = state.current_player();
        assert_eq!(state.play(0), Err(MoveError::ColumnFull));
        assert_eq!(state.current_player(), player);
    }

    #[test]
    fn test_invalid_column() {
        let mut state = GameState::initial();
        assert_eq!(state.play(COLS), Err(MoveError::InvalidColumn));
        assert_eq!(state.current_player(), Player::Red);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state.play(col).unwrap(); // Red
            if col < 3 {
                state.play(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_columns().is_empty());
        assert_eq!(state.play(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Column-pair fill order that never lines up four
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5,
            4, 5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
        ];

        for &col in &pattern {
            state.play(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
