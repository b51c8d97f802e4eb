//! Export dispatch
//!
//! A single entry point routes a save request to the matching serializer.
//! The format tag is a closed sum so every exporter is handled exhaustively;
//! an unrecognized tag is rejected before any serialization or I/O starts.

use crate::{export_txt_bytes, Result, StoreError};
use doc_model::{LyricsMetadata, TextStyle};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain text with a UTF-8 BOM
    Txt,
    /// Paginated right-to-left PDF
    Pdf,
    /// Office Open XML word document
    Docx,
    /// Plain text with the lyrics metadata header
    Lyrics,
}

impl ExportFormat {
    /// File extension written for this format (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt | ExportFormat::Lyrics => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(ExportFormat::Txt),
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "lyrics" => Ok(ExportFormat::Lyrics),
            other => Err(StoreError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Lyrics => "lyrics",
        };
        write!(f, "{}", tag)
    }
}

/// A finished export: the target file name (extension included) and its bytes
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Serialize `text` in the requested format.
///
/// `file_name` is the bare name chosen by the user; the format's extension is
/// appended here. The style is read-only and validated before any PDF/DOCX
/// work begins.
pub fn export_bytes(
    text: &str,
    format: ExportFormat,
    style: &TextStyle,
    file_name: &str,
    metadata: Option<&LyricsMetadata>,
) -> Result<ExportedFile> {
    tracing::debug!(%format, file_name, "exporting document");

    let bytes = match format {
        ExportFormat::Txt | ExportFormat::Lyrics => export_txt_bytes(text, metadata),
        ExportFormat::Pdf => crate::pdf::export_pdf_bytes(text, style, metadata).map_err(|e| {
            tracing::error!(error = %e, "PDF export failed");
            StoreError::from(e)
        })?,
        ExportFormat::Docx => {
            crate::docx::export_docx_bytes(text, style, metadata).map_err(|e| {
                tracing::error!(error = %e, "DOCX export failed");
                StoreError::from(e)
            })?
        }
    };

    Ok(ExportedFile {
        file_name: format!("{}.{}", file_name, format.extension()),
        bytes,
    })
}

/// Export and write the result into `dir`, returning the written path.
pub async fn export_to_path(
    text: &str,
    format: ExportFormat,
    style: &TextStyle,
    file_name: &str,
    metadata: Option<&LyricsMetadata>,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let exported = export_bytes(text, format, style, file_name, metadata)?;
    let path = dir.as_ref().join(&exported.file_name);
    tokio::fs::write(&path, &exported.bytes).await?;
    tracing::info!(path = %path.display(), size = exported.bytes.len(), "export written");
    Ok(path)
}

/// Synchronous variant of [`export_to_path`]
pub fn export_to_path_sync(
    text: &str,
    format: ExportFormat,
    style: &TextStyle,
    file_name: &str,
    metadata: Option<&LyricsMetadata>,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let exported = export_bytes(text, format, style, file_name, metadata)?;
    let path = dir.as_ref().join(&exported.file_name);
    std::fs::write(&path, &exported.bytes)?;
    tracing::info!(path = %path.display(), size = exported.bytes.len(), "export written");
    Ok(path)
}
