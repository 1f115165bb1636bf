use crate::advisor::MoveAdvisor;
use crate::game::{GameOutcome, GameState, MoveError, Player, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

/// Yellow is the AI side in Player vs AI mode.
const AI_PLAYER: Player = Player::Yellow;

pub struct App {
    game_state: GameState,
    advisor: MoveAdvisor,
    ai_opponent: bool,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(advisor: MoveAdvisor, ai_opponent: bool) -> Self {
        App {
            game_state: GameState::initial(),
            advisor,
            ai_opponent,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Draw the human move before blocking on the advisor
            if self.ai_to_move() {
                self.play_ai_turn();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press, unless it announces the result
        if !self.game_state.is_terminal() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.ai_to_move() {
                    self.drop_piece(self.selected_column);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.reset();
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('a') => {
                self.ai_opponent = !self.ai_opponent;
                self.reset();
                self.message = Some(format!("{} mode", self.mode_name()));
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.game_state = GameState::initial();
        self.selected_column = 3;
        info!(mode = self.mode_name(), "new game");
    }

    fn ai_to_move(&self) -> bool {
        self.ai_opponent
            && !self.game_state.is_terminal()
            && self.game_state.current_player() == AI_PLAYER
    }

    fn play_ai_turn(&mut self) {
        let legal = self.game_state.legal_columns();
        if legal.is_empty() {
            return;
        }
        let column = self
            .advisor
            .suggest_move(self.game_state.board().gameplay(), &legal);
        self.drop_piece(column);
    }

    /// Drop the current player's piece in `column`
    fn drop_piece(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'n' for a new game.".to_string());
            return;
        }

        match self.game_state.play(column) {
            Ok(mv) => {
                info!(player = mv.player.name(), row = mv.row, column = mv.column, "piece dropped");
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    info!(?outcome, "game over");
                    self.message = Some(self.outcome_text(outcome));
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn outcome_text(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(player) if self.ai_opponent && player == AI_PLAYER => {
                "AI WINS!".to_string()
            }
            GameOutcome::Winner(player) => format!("{} WINS!", player.name().to_uppercase()),
            GameOutcome::Draw => "It's a draw!".to_string(),
        }
    }

    fn mode_name(&self) -> &'static str {
        if self.ai_opponent {
            "Player vs AI"
        } else {
            "Player vs Player"
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.mode_name(),
            self.advisor.is_available(),
        );
    }
}
