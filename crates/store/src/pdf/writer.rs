//! PDF file generation
//!
//! [`PdfWriter`] handles the file structure: header, numbered indirect
//! objects, the cross-reference table, and the trailer. [`PdfDocumentWriter`]
//! assembles a whole document from composed pages: catalog, page tree, font,
//! info dictionary, and one content stream per page.

use super::content::ContentStream;
use super::document::{DocumentInfo, MediaBox, PdfVersion};
use super::fonts::{create_font_dict, StandardFont};
use super::layout::{visual_order, PageLayout};
use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid style: {0}")]
    Style(#[from] doc_model::DocModelError),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for PDF operations
pub type PdfResult<T> = std::result::Result<T, PdfError>;

/// Low-level PDF file writer
pub struct PdfWriter<W: Write> {
    writer: W,
    /// Current byte position in the file
    position: u64,
    /// `(object number, byte offset)` for the xref table
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    version: PdfVersion,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, version: PdfVersion) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            version,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> PdfResult<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> PdfResult<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Allocate the next object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the file header and binary marker
    pub fn write_header(&mut self) -> PdfResult<()> {
        self.write_str(&format!("%PDF-{}\n", self.version.as_str()))?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: PdfObject) -> PdfResult<()> {
        self.offsets.push((obj_num, self.position));
        self.write_str(&format!("{} 0 obj\n", obj_num))?;

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&object)?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_str("\nendobj\n")
    }

    /// Write a stream object, flate-compressing the data when enabled
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> PdfResult<()> {
        if self.compress && !stream.compressed {
            stream = compress_stream(stream)?;
        }
        stream
            .dict
            .insert("Length", PdfObject::Integer(stream.data.len() as i64));
        self.write_object(obj_num, PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(
        &mut self,
        catalog_ref: u32,
        info_ref: Option<u32>,
    ) -> PdfResult<()> {
        let xref_offset = self.position;
        self.offsets.sort_by_key(|&(num, _)| num);

        self.write_str("xref\n")?;
        self.write_str(&format!("0 {}\n", self.next_obj_num))?;
        self.write_str("0000000000 65535 f \n")?;

        let entries = self.offsets.clone();
        let mut expected = 1u32;
        for (obj_num, offset) in entries {
            while expected < obj_num {
                self.write_str("0000000000 65535 f \n")?;
                expected += 1;
            }
            self.write_str(&format!("{:010} 00000 n \n", offset))?;
            expected = obj_num + 1;
        }

        self.write_str("trailer\n")?;
        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(self.next_obj_num as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref, 0));
        if let Some(info) = info_ref {
            trailer.insert("Info", PdfObject::Reference(info, 0));
        }

        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&PdfObject::Dictionary(trailer))?;
        self.write_bytes(&serializer.into_inner())?;
        self.write_str("\n")?;

        self.write_str("startxref\n")?;
        self.write_str(&format!("{}\n", xref_offset))?;
        self.write_str("%%EOF\n")
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> PdfResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> PdfResult<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&stream.data)?;
    stream.data = encoder.finish()?;
    stream.compressed = true;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

/// Assembles a complete document from composed pages
pub struct PdfDocumentWriter {
    info: DocumentInfo,
    font: StandardFont,
    /// Fill color, 0.0 to 1.0 per channel
    color: (f64, f64, f64),
    compress: bool,
    /// Whether lines are emitted in mirrored (right-to-left) order
    rtl: bool,
}

impl PdfDocumentWriter {
    pub fn new(info: DocumentInfo, font: StandardFont, color_rgb: (u8, u8, u8)) -> Self {
        Self {
            info,
            font,
            color: (
                color_rgb.0 as f64 / 255.0,
                color_rgb.1 as f64 / 255.0,
                color_rgb.2 as f64 / 255.0,
            ),
            compress: true,
            rtl: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Write a complete document to `writer`
    pub fn write<W: Write>(&self, pages: &[PageLayout], writer: W) -> PdfResult<()> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("no pages to export".to_string()));
        }

        let mut pdf = PdfWriter::new(writer, PdfVersion::default());
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();
        let font_ref = pdf.allocate_object();

        let mut page_refs = Vec::with_capacity(pages.len());
        let mut content_refs = Vec::with_capacity(pages.len());
        for _ in pages {
            page_refs.push(pdf.allocate_object());
            content_refs.push(pdf.allocate_object());
        }

        // Catalog
        let mut catalog = PdfDictionary::new().with_type("Catalog");
        catalog.insert("Pages", PdfObject::Reference(pages_ref, 0));
        pdf.write_object(catalog_ref, PdfObject::Dictionary(catalog))?;

        // Page tree
        let mut pages_dict = PdfDictionary::new().with_type("Pages");
        pages_dict.insert(
            "Kids",
            PdfObject::Array(
                page_refs
                    .iter()
                    .map(|&r| PdfObject::Reference(r, 0))
                    .collect(),
            ),
        );
        pages_dict.insert("Count", PdfObject::Integer(pages.len() as i64));
        pdf.write_object(pages_ref, PdfObject::Dictionary(pages_dict))?;

        // Info and font
        pdf.write_object(info_ref, PdfObject::Dictionary(self.info.to_dictionary()))?;
        pdf.write_object(font_ref, PdfObject::Dictionary(create_font_dict(self.font)))?;

        // Pages and their content streams
        for (i, page) in pages.iter().enumerate() {
            let content = self.render_page(page);
            pdf.write_stream_object(content_refs[i], PdfStream::new(content.into_bytes()))?;

            let mut page_dict = PdfDictionary::new().with_type("Page");
            page_dict.insert("Parent", PdfObject::Reference(pages_ref, 0));
            page_dict.insert(
                "MediaBox",
                MediaBox::from_dimensions(page.width, page.height).to_array(),
            );
            page_dict.insert("Contents", PdfObject::Reference(content_refs[i], 0));

            let mut font_dict = PdfDictionary::new();
            font_dict.insert("F1", PdfObject::Reference(font_ref, 0));
            let mut resources = PdfDictionary::new();
            resources.insert("Font", PdfObject::Dictionary(font_dict));
            resources.insert(
                "ProcSet",
                PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]),
            );
            page_dict.insert("Resources", PdfObject::Dictionary(resources));

            pdf.write_object(page_refs[i], PdfObject::Dictionary(page_dict))?;
        }

        pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
        pdf.finish()?;
        Ok(())
    }

    /// Write a complete document to bytes
    pub fn write_to_bytes(&self, pages: &[PageLayout]) -> PdfResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(pages, &mut buffer)?;
        Ok(buffer)
    }

    /// Render one composed page to a content stream.
    ///
    /// Layout coordinates have the origin at the top-left; PDF's is at the
    /// bottom-left, so y flips here.
    fn render_page(&self, page: &PageLayout) -> ContentStream {
        let mut content = ContentStream::new();
        if page.texts.is_empty() {
            return content;
        }

        content.begin_text();
        content.set_fill_rgb(self.color.0, self.color.1, self.color.2);

        let mut current_size: Option<f64> = None;
        for text in &page.texts {
            if current_size != Some(text.font_size) {
                content.set_font("F1", text.font_size);
                current_size = Some(text.font_size);
            }
            content.set_text_position(text.x, page.height - text.y);
            if self.rtl {
                content.show_text(&visual_order(&text.text));
            } else {
                content.show_text(&text.text);
            }
        }

        content.end_text();
        content
    }
}
