//! # LLM Connect Four
//!
//! Connect Four in the terminal, human vs. human or human vs. an AI whose
//! moves come from a remote large-language-model advisor.
//!
//! ## Modules
//!
//! - [`game`]: Placement grid, per-player scorecards, win detection, turn state
//! - [`advisor`]: Move advisor: prompt, chat client, LRU memo, random fallback
//! - [`ui`]: Terminal UI: board, matrix panel, controls
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`telemetry`]: Log file setup

pub mod advisor;
pub mod config;
pub mod error;
pub mod game;
pub mod telemetry;
pub mod ui;
