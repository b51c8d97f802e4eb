//! PDF export entry points

use super::document::DocumentInfo;
use super::fonts::StandardFont;
use super::layout;
use super::writer::{PdfDocumentWriter, PdfResult};
use doc_model::{LyricsMetadata, TextStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Export text to PDF bytes in memory.
///
/// Resolves the page geometry first: a `Custom` page size without dimensions
/// fails here, before any rendering starts.
pub fn export_pdf_bytes(
    text: &str,
    style: &TextStyle,
    metadata: Option<&LyricsMetadata>,
) -> PdfResult<Vec<u8>> {
    let dims = style.page_dimensions()?;
    let font = StandardFont::resolve(&style.font_family);
    let pages = layout::compose(text, style, metadata, dims, font);

    let mut info = DocumentInfo::new();
    if let Some(meta) = metadata {
        if !meta.title.is_empty() {
            info.title = Some(meta.title.clone());
        }
    }

    PdfDocumentWriter::new(info, font, style.color_rgb()).write_to_bytes(&pages)
}

/// Export text to a PDF file on disk
pub fn export_pdf(
    text: &str,
    style: &TextStyle,
    metadata: Option<&LyricsMetadata>,
    path: impl AsRef<Path>,
) -> PdfResult<()> {
    let bytes = export_pdf_bytes(text, style, metadata)?;
    let mut writer = BufWriter::new(File::create(path)?);
    std::io::Write::write_all(&mut writer, &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::PdfError;
    use doc_model::{CustomPageSize, PageSizePreset};

    #[test]
    fn test_export_basic() {
        let style = TextStyle::default();
        let bytes = export_pdf_bytes("salaam", &style, None).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_custom_page_size_flows_into_media_box() {
        let style = TextStyle::default().with_custom_page_size(CustomPageSize::new(10.0, 15.0));
        let bytes = export_pdf_bytes("x", &style, None).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("/MediaBox [0.0 0.0 283.5 425.25]"));
    }

    #[test]
    fn test_custom_without_dimensions_refused() {
        let mut style = TextStyle::default().with_page_size(PageSizePreset::Custom);
        style.custom_page_size = None;
        let err = export_pdf_bytes("x", &style, None).unwrap_err();
        assert!(matches!(err, PdfError::Style(_)));
    }

    #[test]
    fn test_metadata_title_reaches_info() {
        let style = TextStyle::default();
        let meta = LyricsMetadata::new("Raat Yun Dil", "Faiz");
        let bytes = export_pdf_bytes("body", &style, Some(&meta)).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("Raat Yun Dil"));
    }

    #[test]
    fn test_long_document_multiple_pages() {
        let style = TextStyle::default();
        let text = "misra ".repeat(5000);
        let bytes = export_pdf_bytes(&text, &style, None).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);
        let count_line = pdf
            .lines()
            .find(|l| l.contains("/Count"))
            .expect("page tree present");
        let count: i64 = count_line
            .split("/Count ")
            .nth(1)
            .and_then(|s| s.split_whitespace().next())
            .and_then(|s| s.parse().ok())
            .unwrap();
        assert!(count > 1);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        export_pdf("text", &TextStyle::default(), None, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
