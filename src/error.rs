use std::path::PathBuf;

/// Errors from a single move-suggestion attempt. `MoveAdvisor` absorbs all of
/// them into the random fallback; they only surface in logs.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("no API key set (checked DEEPSEEK_API_KEY, OPENAI_API_KEY)")]
    Unavailable,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("reply contained no message content")]
    EmptyReply,

    #[error("reply {reply:?} is not a column index")]
    Malformed { reply: String },

    #[error("suggested column {column} is not legal (legal: {legal:?})")]
    IllegalColumn { column: usize, legal: Vec<usize> },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
