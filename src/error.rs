use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid input, please try again")]
    InvalidInput,

    #[error("Missing page anchor: {0}")]
    MissingAnchor(String),

    #[error("Invalid project ID: {0:?}")]
    InvalidProjectId(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
