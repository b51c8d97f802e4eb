//! Error types for DOCX operations

use thiserror::Error;

/// Errors that can occur during DOCX export
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("invalid style: {0}")]
    Style(#[from] doc_model::DocModelError),
}

/// Result type for DOCX operations
pub type DocxResult<T> = std::result::Result<T, DocxError>;
