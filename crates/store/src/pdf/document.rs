//! High-level PDF document types: version, info dictionary, media box

use super::objects::{PdfDictionary, PdfObject};

/// PDF version written in the file header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfVersion {
    /// PDF 1.4 (Acrobat 5)
    #[default]
    V1_4,
    /// PDF 1.7 (Acrobat 8)
    V1_7,
}

impl PdfVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_7 => "1.7",
        }
    }
}

/// Document information dictionary
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// PDF date string, e.g. `D:20240101120000+00'00'`
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self {
            creator: Some("Qalam".to_string()),
            producer: Some("Qalam PDF Export".to_string()),
            creation_date: Some(pdf_date_now()),
            ..Default::default()
        }
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        if let Some(ref title) = self.title {
            dict.insert("Title", PdfObject::string(title));
        }
        if let Some(ref author) = self.author {
            dict.insert("Author", PdfObject::string(author));
        }
        if let Some(ref creator) = self.creator {
            dict.insert("Creator", PdfObject::string(creator));
        }
        if let Some(ref producer) = self.producer {
            dict.insert("Producer", PdfObject::string(producer));
        }
        if let Some(ref date) = self.creation_date {
            dict.insert("CreationDate", PdfObject::string(date));
        }
        dict
    }
}

/// Current time in PDF date-string format
fn pdf_date_now() -> String {
    chrono::Utc::now().format("D:%Y%m%d%H%M%S+00'00'").to_string()
}

/// Page media box; origin at the lower-left corner
#[derive(Debug, Clone, Copy)]
pub struct MediaBox {
    pub width: f64,
    pub height: f64,
}

impl MediaBox {
    pub fn from_dimensions(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_array(&self) -> PdfObject {
        PdfObject::Array(vec![
            PdfObject::Real(0.0),
            PdfObject::Real(0.0),
            PdfObject::Real(self.width),
            PdfObject::Real(self.height),
        ])
    }
}
