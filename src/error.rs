use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodonsearchError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid DNA length: {length} is not a multiple of 3")]
    InvalidLength { length: usize },

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodonsearchError>;
