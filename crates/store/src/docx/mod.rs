//! DOCX Export Module
//!
//! Writes Microsoft Word DOCX files (Office Open XML, ECMA-376). A DOCX file
//! is a ZIP archive of XML parts:
//!
//! - `[Content_Types].xml` - content type definitions
//! - `_rels/.rels` - root relationships
//! - `word/document.xml` - the document body and section setup
//! - `word/styles.xml` - document default formatting
//! - `word/_rels/document.xml.rels` - document relationships
//!
//! The exporter emits one section carrying page geometry and margins, an
//! optional bidirectional lyrics-header paragraph, and one bidirectional body
//! paragraph holding the full text in a single run.

mod api;
mod content_types;
mod document_writer;
mod error;
mod relationships;
mod styles_writer;
mod writer;

pub use api::{export_docx, export_docx_bytes};
pub use error::{DocxError, DocxResult};
pub use writer::DocxWriter;

/// XML namespaces used in DOCX files
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
}

/// Relationship type URIs
pub mod relationship_types {
    pub const DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
}

/// Twentieths of a point per point - OOXML's native length unit
pub const TWIPS_PER_POINT: f64 = 20.0;

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("Mir & Ghalib"), "Mir &amp; Ghalib");
        assert_eq!(escape_xml("<w:t>"), "&lt;w:t&gt;");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
    }
}
