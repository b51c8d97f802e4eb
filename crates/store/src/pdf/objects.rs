//! PDF object model
//!
//! The handful of object kinds from the PDF Reference that this exporter
//! emits, plus a serializer that writes them in file syntax. Dictionaries use
//! a BTreeMap so output is deterministic.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// A PDF object
#[derive(Debug, Clone)]
pub enum PdfObject {
    Integer(i64),
    Real(f64),
    /// Literal string; escaped on write
    String(Vec<u8>),
    /// Name object, written with a leading slash
    Name(String),
    Array(Vec<PdfObject>),
    Dictionary(PdfDictionary),
    Stream(PdfStream),
    /// Indirect reference `(object number, generation)`
    Reference(u32, u16),
}

impl PdfObject {
    pub fn string(s: &str) -> Self {
        PdfObject::String(s.as_bytes().to_vec())
    }

    pub fn name(s: impl Into<String>) -> Self {
        PdfObject::Name(s.into())
    }
}

/// Ordered key-value pairs
#[derive(Debug, Clone, Default)]
pub struct PdfDictionary {
    entries: BTreeMap<String, PdfObject>,
}

impl PdfDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_name: &str) -> Self {
        self.insert("Type", PdfObject::name(type_name));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PdfObject) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&PdfObject> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PdfObject)> {
        self.entries.iter()
    }
}

/// A stream object: dictionary plus raw data
#[derive(Debug, Clone)]
pub struct PdfStream {
    pub dict: PdfDictionary,
    pub data: Vec<u8>,
    /// Set once the data has been flate-encoded
    pub compressed: bool,
}

impl PdfStream {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            dict: PdfDictionary::new(),
            data,
            compressed: false,
        }
    }
}

/// Serializer for PDF objects
pub struct PdfSerializer<W: Write> {
    writer: W,
}

impl<W: Write> PdfSerializer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write_object(&mut self, obj: &PdfObject) -> io::Result<()> {
        match obj {
            PdfObject::Integer(n) => write!(self.writer, "{}", n),
            PdfObject::Real(n) => write!(self.writer, "{}", format_real(*n)),
            PdfObject::String(data) => self.write_string(data),
            PdfObject::Name(name) => write!(self.writer, "/{}", name),
            PdfObject::Array(items) => {
                write!(self.writer, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(self.writer, " ")?;
                    }
                    self.write_object(item)?;
                }
                write!(self.writer, "]")
            }
            PdfObject::Dictionary(dict) => self.write_dictionary(dict),
            PdfObject::Stream(stream) => {
                self.write_dictionary(&stream.dict)?;
                write!(self.writer, "\nstream\n")?;
                self.writer.write_all(&stream.data)?;
                write!(self.writer, "\nendstream")
            }
            PdfObject::Reference(obj_num, gen_num) => {
                write!(self.writer, "{} {} R", obj_num, gen_num)
            }
        }
    }

    fn write_dictionary(&mut self, dict: &PdfDictionary) -> io::Result<()> {
        write!(self.writer, "<<")?;
        for (key, value) in dict.iter() {
            write!(self.writer, " /{} ", key)?;
            self.write_object(value)?;
        }
        write!(self.writer, " >>")
    }

    fn write_string(&mut self, data: &[u8]) -> io::Result<()> {
        write!(self.writer, "(")?;
        for &byte in data {
            match byte {
                b'(' | b')' | b'\\' => write!(self.writer, "\\{}", byte as char)?,
                0x0A => write!(self.writer, "\\n")?,
                0x0D => write!(self.writer, "\\r")?,
                0x09 => write!(self.writer, "\\t")?,
                0x20..=0x7E => write!(self.writer, "{}", byte as char)?,
                _ => write!(self.writer, "\\{:03o}", byte)?,
            }
        }
        write!(self.writer, ")")
    }
}

/// Format a real number without trailing zeros
pub(super) fn format_real(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        let s = format!("{:.5}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(obj: &PdfObject) -> String {
        let mut ser = PdfSerializer::new(Vec::new());
        ser.write_object(obj).unwrap();
        String::from_utf8(ser.into_inner()).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(serialize(&PdfObject::Integer(42)), "42");
        assert_eq!(serialize(&PdfObject::Real(595.28)), "595.28");
        assert_eq!(serialize(&PdfObject::Real(72.0)), "72.0");
        assert_eq!(serialize(&PdfObject::name("Page")), "/Page");
        assert_eq!(serialize(&PdfObject::Reference(3, 0)), "3 0 R");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(serialize(&PdfObject::string("a(b)c")), "(a\\(b\\)c)");
        // Non-ASCII bytes are written as octal escapes
        let urdu = serialize(&PdfObject::string("\u{62f}"));
        assert!(urdu.starts_with('(') && urdu.contains("\\3"));
    }

    #[test]
    fn test_dictionary_deterministic() {
        let mut dict = PdfDictionary::new().with_type("Catalog");
        dict.insert("Pages", PdfObject::Reference(2, 0));
        let out = serialize(&PdfObject::Dictionary(dict));
        assert_eq!(out, "<< /Pages 2 0 R /Type /Catalog >>");
    }

    #[test]
    fn test_stream_framing() {
        let mut stream = PdfStream::new(b"BT ET".to_vec());
        stream.dict.insert("Length", PdfObject::Integer(5));
        let out = serialize(&PdfObject::Stream(stream));
        assert!(out.contains("stream\nBT ET\nendstream"));
    }
}
