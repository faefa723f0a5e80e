use std::path::PathBuf;

/// Caller contract violations rejected by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} is out of range (expected 0..{max})", max = crate::game::COLS)]
    InvalidColumn { column: usize },

    #[error(
        "cell ({row}, {col}) is out of range (expected rows 0..{rows}, columns 0..{cols})",
        rows = crate::game::ROWS,
        cols = crate::game::COLS
    )]
    InvalidCell { row: usize, col: usize },
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
