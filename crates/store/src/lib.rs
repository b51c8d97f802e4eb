//! Store - Export serializers and file I/O
//!
//! This crate turns the editor's text buffer plus a [`doc_model::TextStyle`]
//! into the three supported output encodings (plain text with a UTF-8 BOM,
//! paginated right-to-left PDF, structured DOCX), routes save requests
//! through a single format dispatch, reads supported document types back in,
//! and persists the editor settings.

mod error;
mod export;
mod file_io;
mod settings;
mod txt;
pub mod docx;
pub mod pdf;

pub use error::*;
pub use export::*;
pub use file_io::*;
pub use settings::*;
pub use txt::*;

// Re-export the exporter entry points at the crate root
pub use docx::{export_docx, export_docx_bytes, DocxError, DocxResult};
pub use pdf::{export_pdf, export_pdf_bytes, PdfError, PdfResult};
