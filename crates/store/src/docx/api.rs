//! DOCX export entry points

use super::error::DocxResult;
use super::writer::DocxWriter;
use doc_model::{LyricsMetadata, PageSizePreset, TextStyle};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Validate the style before serialization starts.
///
/// Only the Custom-page-size invariant can fail; named presets always have
/// geometry.
fn check_style(style: &TextStyle) -> DocxResult<()> {
    if style.page_size == PageSizePreset::Custom {
        style.page_dimensions()?;
    }
    Ok(())
}

/// Export text to DOCX bytes in memory
pub fn export_docx_bytes(
    text: &str,
    style: &TextStyle,
    metadata: Option<&LyricsMetadata>,
) -> DocxResult<Vec<u8>> {
    check_style(style)?;
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(text, style, metadata)?;
    Ok(cursor.into_inner())
}

/// Export text to a DOCX file on disk
pub fn export_docx(
    text: &str,
    style: &TextStyle,
    metadata: Option<&LyricsMetadata>,
    path: impl AsRef<Path>,
) -> DocxResult<()> {
    check_style(style)?;
    let file = File::create(path)?;
    DocxWriter::new(BufWriter::new(file)).write(text, style, metadata)?;
    Ok(())
}
