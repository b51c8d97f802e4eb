//! PDF Export Module
//!
//! Converts the text buffer plus a [`doc_model::TextStyle`] into a paginated,
//! right-to-left PDF. The module carries its own minimal PDF engine:
//!
//! - `objects` - the basic PDF object model and its serializer
//! - `content` - content stream builder (text and color operators)
//! - `fonts` - standard Type1 fonts and the text-measurement facility
//! - `layout` - RTL line wrapping and pagination
//! - `document` - version, info dictionary, and media box types
//! - `writer` - file structure (header, body, xref, trailer)

mod api;
mod content;
mod document;
pub mod fonts;
pub mod layout;
mod objects;
mod writer;

pub use api::{export_pdf, export_pdf_bytes};
pub use content::ContentStream;
pub use document::{DocumentInfo, MediaBox, PdfVersion};
pub use layout::{PageLayout, PositionedText};
pub use objects::{PdfDictionary, PdfObject, PdfStream};
pub use writer::{PdfDocumentWriter, PdfError, PdfResult, PdfWriter};
