//! styles.xml writer
//!
//! Emits document defaults carrying the configured family and size so
//! consuming applications fall back to the right formatting.

use super::{escape_xml, namespaces};
use doc_model::TextStyle;

/// Writer for styles.xml
#[derive(Debug, Default)]
pub struct StylesWriter;

impl StylesWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self, style: &TextStyle) -> String {
        let family = escape_xml(&style.font_family);
        let half_points = (style.font_size * 2.0) as i32;

        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, namespaces::W));

        xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
            family, family, family
        ));
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_points));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_points));
        xml.push_str("</w:rPr></w:rPrDefault></w:docDefaults>");

        xml.push_str(
            r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>"#,
        );

        xml.push_str("</w:styles>");
        xml
    }
}
