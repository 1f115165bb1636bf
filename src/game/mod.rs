//! Core Connect Four game logic: placement grid with per-player scorecards,
//! scorecard-based win detection, and the turn-keeping game state.

mod board;
mod player;
mod state;
mod win;

pub use board::{BoardState, Grid, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, Move, MoveError};
pub use win::has_win_at;
