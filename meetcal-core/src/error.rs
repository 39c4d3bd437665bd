//! Error types for meetcal.

use thiserror::Error;

/// Errors that can occur in meetcal operations.
#[derive(Error, Debug)]
pub enum MeetcalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for meetcal operations.
pub type MeetcalResult<T> = Result<T, MeetcalError>;
