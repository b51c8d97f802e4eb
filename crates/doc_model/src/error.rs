//! Error types for the document model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("custom page size selected but no dimensions were provided")]
    MissingCustomPageSize,

    #[error("invalid page dimensions: {width}cm x {height}cm (both must be positive)")]
    InvalidPageDimensions { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, DocModelError>;
