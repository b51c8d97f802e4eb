//! document.xml writer
//!
//! Builds the WordprocessingML body: an optional lyrics-header paragraph, one
//! body paragraph holding the full text, and the section properties carrying
//! page geometry and margins. Both paragraphs are marked bidirectional for
//! Urdu text flow.

use super::{escape_xml, namespaces, TWIPS_PER_POINT};
use doc_model::{LyricsMetadata, PageSizePreset, TextStyle, CM_TO_PT};

/// Half-point font size of the lyrics header (12pt)
const METADATA_SIZE_HALF_POINTS: i32 = 24;

/// `w:spacing` value of the lyrics header (double spacing, 1.5 x 240)
const METADATA_LINE_SPACING: i32 = 360;

/// Writer for document.xml
#[derive(Debug, Default)]
pub struct DocumentWriter;

impl DocumentWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate document.xml content
    pub fn write(
        &self,
        text: &str,
        style: &TextStyle,
        metadata: Option<&LyricsMetadata>,
    ) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        if let Some(meta) = metadata {
            self.write_metadata_paragraph(&mut xml, meta);
        }
        self.write_body_paragraph(&mut xml, text, style);
        self.write_section_properties(&mut xml, style);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        xml
    }

    /// The lyrics header: one 12pt run per present field, joined by explicit
    /// line breaks, double-spaced, bidirectional, ending in a blank run.
    fn write_metadata_paragraph(&self, xml: &mut String, meta: &LyricsMetadata) {
        let fields = meta.fields();
        if fields.is_empty() {
            return;
        }

        xml.push_str("<w:p>");
        xml.push_str(&format!(
            r#"<w:pPr><w:spacing w:line="{}" w:lineRule="auto"/><w:bidi/></w:pPr>"#,
            METADATA_LINE_SPACING
        ));

        for (i, (label, value)) in fields.iter().enumerate() {
            xml.push_str("<w:r>");
            write_run_size(xml, METADATA_SIZE_HALF_POINTS);
            if i > 0 {
                xml.push_str("<w:br/>");
            }
            write_text_element(xml, &format!("{}: {}", label, value));
            xml.push_str("</w:r>");
        }

        // trailing blank line before the body
        xml.push_str("<w:r>");
        write_run_size(xml, METADATA_SIZE_HALF_POINTS);
        xml.push_str("<w:br/><w:br/>");
        xml.push_str("</w:r>");

        xml.push_str("</w:p>");
    }

    /// The body: a single run carrying the full text with the style's
    /// character formatting, alignment, line spacing, and bidi flag.
    fn write_body_paragraph(&self, xml: &mut String, text: &str, style: &TextStyle) {
        xml.push_str("<w:p>");

        xml.push_str("<w:pPr>");
        xml.push_str(&format!(
            r#"<w:jc w:val="{}"/>"#,
            style.text_align.docx_value()
        ));
        let line = (style.line_height * 240.0) as i32;
        xml.push_str(&format!(
            r#"<w:spacing w:line="{}" w:lineRule="auto"/>"#,
            line
        ));
        xml.push_str("<w:bidi/>");
        xml.push_str("</w:pPr>");

        xml.push_str("<w:r>");
        xml.push_str("<w:rPr>");
        let family = escape_xml(&style.font_family);
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
            family, family, family
        ));
        if style.bold {
            xml.push_str("<w:b/>");
        }
        if style.italic {
            xml.push_str("<w:i/>");
        }
        if style.underline {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        // w:sz is in half-points
        let half_points = (style.font_size * 2.0) as i32;
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_points));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_points));
        xml.push_str("</w:rPr>");

        write_run_text(xml, text);
        xml.push_str("</w:r>");

        xml.push_str("</w:p>");
    }

    /// Section setup: explicit page size only for Custom (in twips), margins
    /// always.
    fn write_section_properties(&self, xml: &mut String, style: &TextStyle) {
        xml.push_str("<w:sectPr>");

        if style.page_size == PageSizePreset::Custom {
            if let Some(custom) = style.custom_page_size {
                let w = (custom.width * CM_TO_PT * TWIPS_PER_POINT).round() as i32;
                let h = (custom.height * CM_TO_PT * TWIPS_PER_POINT).round() as i32;
                xml.push_str(&format!(r#"<w:pgSz w:w="{}" w:h="{}"/>"#, w, h));
            }
        }

        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="0" w:footer="0" w:gutter="0"/>"#,
            (style.margin_top * TWIPS_PER_POINT) as i32,
            (style.margin_right * TWIPS_PER_POINT) as i32,
            (style.margin_bottom * TWIPS_PER_POINT) as i32,
            (style.margin_left * TWIPS_PER_POINT) as i32,
        ));

        xml.push_str("</w:sectPr>");
    }
}

fn write_run_size(xml: &mut String, half_points: i32) {
    xml.push_str(&format!(
        r#"<w:rPr><w:sz w:val="{}"/><w:szCs w:val="{}"/></w:rPr>"#,
        half_points, half_points
    ));
}

/// Write run content, mapping `\n` to `w:br` and `\t` to `w:tab`
fn write_run_text(xml: &mut String, text: &str) {
    let parts: Vec<&str> = text.split('\n').collect();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        let segments: Vec<&str> = part.split('\t').collect();
        for (j, segment) in segments.iter().enumerate() {
            if j > 0 {
                xml.push_str("<w:tab/>");
            }
            if !segment.is_empty() {
                write_text_element(xml, segment);
            }
        }
    }
}

/// Write a `w:t`, preserving significant leading/trailing whitespace
fn write_text_element(xml: &mut String, text: &str) {
    if text.starts_with(' ') || text.ends_with(' ') {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&escape_xml(text));
    xml.push_str("</w:t>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Alignment, CustomPageSize};

    fn write(text: &str, style: &TextStyle, meta: Option<&LyricsMetadata>) -> String {
        DocumentWriter::new().write(text, style, meta)
    }

    #[test]
    fn test_basic_structure() {
        let xml = write("hello", &TextStyle::default(), None);
        assert!(xml.contains("<w:document"));
        assert!(xml.contains("<w:body>"));
        assert!(xml.contains("<w:sectPr>"));
        assert!(xml.contains("<w:t>hello</w:t>"));
    }

    #[test]
    fn test_body_run_properties() {
        let style = TextStyle::default()
            .with_bold(true)
            .with_underline(true)
            .with_font_size(16.0);
        let xml = write("x", &style, None);
        assert!(xml.contains("<w:b/>"));
        assert!(!xml.contains("<w:i/>"));
        assert!(xml.contains(r#"<w:u w:val="single"/>"#));
        // 16pt -> 32 half-points
        assert!(xml.contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml.contains(r#"<w:rFonts w:ascii="Jameel Noori Nastaleeq""#));
    }

    #[test]
    fn test_body_paragraph_properties() {
        let style = TextStyle::default().with_alignment(Alignment::Center);
        let xml = write("x", &style, None);
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        // line height 1.5 -> 360
        assert!(xml.contains(r#"<w:spacing w:line="360" w:lineRule="auto"/>"#));
        assert!(xml.contains("<w:bidi/>"));
    }

    #[test]
    fn test_newlines_and_tabs() {
        let xml = write("a\nb\tc", &TextStyle::default(), None);
        assert!(xml.contains("<w:t>a</w:t><w:br/><w:t>b</w:t><w:tab/><w:t>c</w:t>"));
    }

    #[test]
    fn test_whitespace_preserved() {
        let xml = write(" padded ", &TextStyle::default(), None);
        assert!(xml.contains(r#"<w:t xml:space="preserve"> padded </w:t>"#));
    }

    #[test]
    fn test_metadata_paragraph() {
        let meta = LyricsMetadata::new("A", "B").with_raag("Des");
        let xml = write("body", &TextStyle::default(), Some(&meta));

        let title_pos = xml.find("<w:t>Title: A</w:t>").unwrap();
        let singer_pos = xml.find("<w:t>Singer: B</w:t>").unwrap();
        let raag_pos = xml.find("<w:t>Raag: Des</w:t>").unwrap();
        assert!(title_pos < singer_pos && singer_pos < raag_pos);

        // header runs are 12pt and double spaced
        assert!(xml.contains(r#"<w:sz w:val="24"/>"#));
        assert!(xml.contains(r#"<w:spacing w:line="360" w:lineRule="auto"/>"#));
        // later runs are preceded by a break; the block ends with a blank run
        assert!(xml.contains(r#"<w:br/><w:t>Singer: B</w:t>"#));
        assert!(xml.contains("<w:br/><w:br/>"));
    }

    #[test]
    fn test_no_metadata_no_header_paragraph() {
        let xml = write("body", &TextStyle::default(), None);
        assert!(!xml.contains("Title:"));
        // only the body paragraph
        assert_eq!(xml.matches("<w:p>").count(), 1);
    }

    #[test]
    fn test_named_size_omits_pgsz() {
        let xml = write("x", &TextStyle::default(), None);
        assert!(!xml.contains("<w:pgSz"));
        // margins are always present, in twips (72pt -> 1440)
        assert!(xml.contains(r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#));
    }

    #[test]
    fn test_custom_size_in_twips() {
        let style =
            TextStyle::default().with_custom_page_size(CustomPageSize::new(21.0, 29.7));
        let xml = write("x", &style, None);
        // 21cm x 28.35 x 20 = 11907; 29.7cm -> 16840
        assert!(xml.contains(r#"<w:pgSz w:w="11907" w:h="16840"/>"#));
    }

    #[test]
    fn test_text_escaped() {
        let xml = write("a < b & c", &TextStyle::default(), None);
        assert!(xml.contains("a &lt; b &amp; c"));
    }
}
