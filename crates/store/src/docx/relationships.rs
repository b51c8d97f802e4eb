//! Relationships (.rels) file generation
//!
//! Relationships connect package parts: the root .rels points at the main
//! document, the document .rels at its styles part.

use super::{escape_xml, namespaces, relationship_types};

/// A single relationship entry
#[derive(Debug, Clone)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// An ordered collection of relationships
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    relationships: Vec<Relationship>,
    next_id: u32,
}

impl Relationships {
    pub fn new() -> Self {
        Self {
            relationships: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a relationship and return its generated ID
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.next_id);
        self.next_id += 1;
        self.relationships.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    pub fn get_by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.rel_type == rel_type)
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespaces::PKG_REL
        ));
        for rel in &self.relationships {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(&rel.id),
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// Root relationships: package -> main document
pub fn create_root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::DOCUMENT, "word/document.xml");
    rels
}

/// Document relationships: document -> styles
pub fn create_document_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::STYLES, "styles.xml");
    rels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_rels() {
        let rels = create_root_rels();
        let rel = rels.get_by_type(relationship_types::DOCUMENT).unwrap();
        assert_eq!(rel.id, "rId1");
        assert_eq!(rel.target, "word/document.xml");
    }

    #[test]
    fn test_ids_increment() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add("t", "a"), "rId1");
        assert_eq!(rels.add("t", "b"), "rId2");
    }

    #[test]
    fn test_to_xml() {
        let xml = create_document_rels().to_xml();
        assert!(xml.contains(r#"Target="styles.xml""#));
        assert!(xml.contains(namespaces::PKG_REL));
    }
}
