use std::path::PathBuf;

/// Reasons a move can be rejected by the board or the turn state machine.
///
/// None of these leave the game half-mutated: a rejected move never touches
/// the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the board (0..{cols})")]
    InvalidColumn { column: usize, cols: usize },

    #[error("input is locked: a move is in progress or the game is over")]
    InputLocked,

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("no move is waiting to be resolved")]
    NoMoveInProgress,
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
