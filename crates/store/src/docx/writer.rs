//! DOCX writer infrastructure
//!
//! Creates the ZIP archive with correct DOCX structure.

use super::content_types::create_default_content_types;
use super::document_writer::DocumentWriter;
use super::error::DocxResult;
use super::relationships::{create_document_rels, create_root_rels};
use super::styles_writer::StylesWriter;
use doc_model::{LyricsMetadata, TextStyle};
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
        }
    }

    /// Write a complete DOCX file and return the inner writer
    pub fn write(
        mut self,
        text: &str,
        style: &TextStyle,
        metadata: Option<&LyricsMetadata>,
    ) -> DocxResult<W> {
        let document_xml = DocumentWriter::new().write(text, style, metadata);
        self.write_file("word/document.xml", &document_xml)?;

        let styles_xml = StylesWriter::new().write(style);
        self.write_file("word/styles.xml", &styles_xml)?;

        self.write_file("_rels/.rels", &create_root_rels().to_xml())?;
        self.write_file(
            "word/_rels/document.xml.rels",
            &create_document_rels().to_xml(),
        )?;

        self.write_file(
            "[Content_Types].xml",
            &create_default_content_types().to_xml(),
        )?;

        Ok(self.zip.finish()?)
    }

    /// Write one file into the ZIP archive
    fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_package_parts() {
        let cursor = DocxWriter::new(Cursor::new(Vec::new()))
            .write("hello", &TextStyle::default(), None)
            .unwrap();
        let bytes = cursor.into_inner();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"[Content_Types].xml".to_string()));
        assert!(names.contains(&"_rels/.rels".to_string()));
        assert!(names.contains(&"word/document.xml".to_string()));
        assert!(names.contains(&"word/styles.xml".to_string()));
        assert!(names.contains(&"word/_rels/document.xml.rels".to_string()));
    }

    #[test]
    fn test_document_part_content() {
        use std::io::Read;

        let cursor = DocxWriter::new(Cursor::new(Vec::new()))
            .write("salaam", &TextStyle::default(), None)
            .unwrap();
        let bytes = cursor.into_inner();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut part = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut part)
            .unwrap();
        assert!(part.contains("<w:t>salaam</w:t>"));
    }
}
