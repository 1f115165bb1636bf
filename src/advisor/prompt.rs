use crate::error::AdvisorError;
use crate::game::{Grid, COLS, ROWS};

pub const SYSTEM_PROMPT: &str =
    "You are a Connect 4 expert that only responds with a single number.";

/// Render a grid as one line per row, cells separated by spaces.
pub fn render_board(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_columns(legal: &[usize]) -> String {
    legal
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// User message asking for Yellow's next column.
pub fn user_prompt(grid: &Grid, legal: &[usize]) -> String {
    format!(
        "You are an expert Connect 4 player. It is your turn to play as Yellow (2).\n\
         The current board state is below (0=empty, 1=Red, 2=Yellow).\n\
         The board has {ROWS} rows and {COLS} columns; row 0 is the top.\n\
         \n\
         Board:\n\
         {board}\n\
         \n\
         Legal columns: {columns}\n\
         Which column do you choose? Your answer must be only a single number from the legal columns.",
        board = render_board(grid),
        columns = render_columns(legal),
    )
}

/// Parse a service reply into a column that must be one of `legal`.
pub fn parse_reply(reply: &str, legal: &[usize]) -> Result<usize, AdvisorError> {
    let column: usize = reply
        .trim()
        .parse()
        .map_err(|_| AdvisorError::Malformed {
            reply: reply.to_string(),
        })?;
    if !legal.contains(&column) {
        return Err(AdvisorError::IllegalColumn {
            column,
            legal: legal.to_vec(),
        });
    }
    Ok(column)
}
