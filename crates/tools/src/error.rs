use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolsError>;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    PayloadError(#[from] storage::dto::PayloadError),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),

    #[error("Document error: {0}")]
    DocumentError(#[from] documents::DocumentError),

    #[error("Password hashing failed: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
