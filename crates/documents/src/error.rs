use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("QR payload serialization failed: {0}")]
    Payload(#[from] serde_json::Error),
}

impl DocumentError {
    pub(crate) fn pdf(error: impl std::fmt::Display) -> Self {
        Self::Pdf(error.to_string())
    }
}
