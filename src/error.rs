use std::path::PathBuf;

/// Rejected game actions. Each leaves the engine exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: i64, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already won; restart to play again")]
    GameAlreadyWon,

    #[error("a drop is still in progress")]
    DropInProgress,

    #[error("no drop is in progress")]
    NoDropInProgress,
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
