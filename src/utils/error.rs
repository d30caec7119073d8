use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("Failed to open file: {path}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Out of memory while storing a vehicle")]
    OutOfMemory(#[from] std::collections::TryReserveError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid config value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LotError>;
