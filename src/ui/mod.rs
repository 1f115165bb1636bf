//! Terminal UI: board with column selector, the gameplay and scorecard
//! matrices, and New Game / Play AI / Quit controls.

mod app;
mod game_view;

pub use app::App;
