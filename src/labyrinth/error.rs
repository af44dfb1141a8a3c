// error.rs - erreurs de validation des entrées utilisateur

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabyError {
    #[error("rows must be between 10 and 100, got {0}")]
    InvalidRows(usize),

    #[error("cols must be between 10 and 100, got {0}")]
    InvalidCols(usize),

    #[error("step delay must be between 0 and 200 ms, got {0}")]
    InvalidDelay(u64),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LabyError>;
