//! [Content_Types].xml generation
//!
//! Declares the content type of every part in the package.

use super::{escape_xml, namespaces};
use std::collections::BTreeMap;

/// Content types for the parts this exporter writes
#[derive(Debug, Clone, Default)]
pub struct ContentTypes {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by part name
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    pub fn new() -> Self {
        let mut ct = Self::default();
        ct.add_default(
            "rels",
            "application/vnd.openxmlformats-package.relationships+xml",
        );
        ct.add_default("xml", "application/xml");
        ct
    }

    pub fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    pub fn add_override(&mut self, part_name: &str, content_type: &str) {
        self.overrides
            .insert(part_name.to_string(), content_type.to_string());
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespaces::CT));
        for (extension, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(extension),
                escape_xml(content_type)
            ));
        }
        for (part_name, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part_name),
                escape_xml(content_type)
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Content types for the standard export package
pub fn create_default_content_types() -> ContentTypes {
    let mut ct = ContentTypes::new();
    ct.add_override(
        "/word/document.xml",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
    );
    ct.add_override(
        "/word/styles.xml",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
    );
    ct
}
