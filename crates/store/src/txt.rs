//! Plain-text export
//!
//! Output layout: UTF-8 byte-order mark, then the optional lyrics header
//! block, then the body verbatim. The body is never escaped or re-encoded.

use doc_model::LyricsMetadata;

/// UTF-8 byte-order mark written at the start of every text export
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Serialize text (plus an optional metadata header) to bytes.
///
/// Plain-text export cannot fail for well-formed input.
pub fn export_txt_bytes(text: &str, metadata: Option<&LyricsMetadata>) -> Vec<u8> {
    let header = metadata.map(|m| m.header_block()).unwrap_or_default();

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + header.len() + text.len());
    bytes.extend_from_slice(&UTF8_BOM);
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(text.as_bytes());
    bytes
}
