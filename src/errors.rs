use thiserror::Error;

use crate::decoder::DecodeError;
use crate::interaction::InteractionError;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Transaction decoding
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Segment expand/collapse commands
    #[error("Interaction error: {0}")]
    Interaction(#[from] InteractionError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input that is not a transaction at all (empty file, missing argument)
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
