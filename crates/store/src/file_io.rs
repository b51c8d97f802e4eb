//! File I/O - the document import boundary
//!
//! Files are accepted by extension, read as UTF-8 text, and have a single
//! leading byte-order mark stripped. Anything else is rejected with a
//! user-facing error and no state change.

use crate::{Result, StoreError};
use std::path::Path;

/// Extensions the open dialog accepts
pub const IMPORT_EXTENSIONS: &[&str] = &["txt", "rtf", "doc", "docx"];

/// Whether the path's extension is one of the supported import types
pub fn is_supported_import(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            IMPORT_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(e))
        })
        .unwrap_or(false)
}

fn check_import_path(path: &Path) -> Result<()> {
    if !is_supported_import(path) {
        return Err(StoreError::UnsupportedImport(path.display().to_string()));
    }
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Strip one leading U+FEFF, if present
fn strip_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    }
}

/// Open a document as UTF-8 text
pub async fn open_text_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    check_import_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    Ok(strip_bom(content))
}

/// Synchronous variant of [`open_text_document`]
pub fn open_text_document_sync(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    check_import_path(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(strip_bom(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_extension_whitelist() {
        assert!(is_supported_import("song.txt"));
        assert!(is_supported_import("SONG.TXT"));
        assert!(is_supported_import("a/b/notes.docx"));
        assert!(is_supported_import("old.rtf"));
        assert!(is_supported_import("legacy.doc"));
        assert!(!is_supported_import("sheet.csv"));
        assert!(!is_supported_import("noextension"));
    }

    #[test]
    fn test_unsupported_import_rejected() {
        let err = open_text_document_sync("data.csv").unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedImport(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = open_text_document_sync("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound(_)));
    }

    #[test]
    fn test_bom_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("with_bom.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0xEF, 0xBB, 0xBF]).unwrap();
        file.write_all("salaam".as_bytes()).unwrap();
        drop(file);

        let content = open_text_document_sync(&path).unwrap();
        assert_eq!(content, "salaam");
    }

    #[test]
    fn test_no_bom_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        std::fs::write(&path, "hello").unwrap();
        assert_eq!(open_text_document_sync(&path).unwrap(), "hello");
    }

    #[test]
    fn test_invalid_utf8_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.docx");
        std::fs::write(&path, [0x50, 0x4B, 0x03, 0x04, 0xFF, 0xFE, 0x80]).unwrap();
        let err = open_text_document_sync(&path).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[tokio::test]
    async fn test_async_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("async.txt");
        std::fs::write(&path, "async body").unwrap();
        assert_eq!(open_text_document(&path).await.unwrap(), "async body");
    }
}
