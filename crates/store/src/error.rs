//! Error types for export and file operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("document model error: {0}")]
    DocModel(#[from] doc_model::DocModelError),

    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("unsupported file type: {0} (expected txt, rtf, doc, or docx)")]
    UnsupportedImport(String),

    #[error("PDF export error: {0}")]
    Pdf(#[from] crate::pdf::PdfError),

    #[error("DOCX export error: {0}")]
    Docx(#[from] crate::docx::DocxError),

    #[error("file not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
