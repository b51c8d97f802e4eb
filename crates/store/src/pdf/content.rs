//! Content stream generation
//!
//! Builder for the operator sequences that paint a page. Only the operators
//! the text flow needs are exposed: BT/ET text objects, Tf font selection,
//! Tm positioning, Tj text showing, and rg fill color.

use super::objects::format_real;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn push_line(&mut self, line: &str) {
        self.data.extend_from_slice(line.as_bytes());
        self.data.push(b'\n');
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.push_line("BT");
        self
    }

    /// End the text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.push_line("ET");
        self
    }

    /// Select a font resource and size (Tf)
    pub fn set_font(&mut self, name: &str, size: f64) -> &mut Self {
        self.push_line(&format!("/{} {} Tf", name, format_real(size)));
        self
    }

    /// Set the text matrix to a translation (Tm)
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.push_line(&format!(
            "1.0 0.0 0.0 1.0 {} {} Tm",
            format_real(x),
            format_real(y)
        ));
        self
    }

    /// Set the non-stroking color (rg)
    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.push_line(&format!(
            "{} {} {} rg",
            format_real(r),
            format_real(g),
            format_real(b)
        ));
        self
    }

    /// Show a text string (Tj), escaping delimiters and non-ASCII bytes
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.data.push(b'(');
        for &byte in text.as_bytes() {
            match byte {
                b'(' | b')' | b'\\' => {
                    self.data.push(b'\\');
                    self.data.push(byte);
                }
                0x0A => self.data.extend_from_slice(b"\\n"),
                0x0D => self.data.extend_from_slice(b"\\r"),
                0x09 => self.data.extend_from_slice(b"\\t"),
                0x20..=0x7E => self.data.push(byte),
                _ => self.data.extend_from_slice(format!("\\{:03o}", byte).as_bytes()),
            }
        }
        self.push_line(") Tj");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_object() {
        let mut content = ContentStream::new();
        content
            .begin_text()
            .set_font("F1", 16.0)
            .set_fill_rgb(0.0, 0.0, 0.0)
            .set_text_position(100.0, 700.0)
            .show_text("hello")
            .end_text();

        let out = String::from_utf8(content.into_bytes()).unwrap();
        assert!(out.starts_with("BT\n"));
        assert!(out.contains("/F1 16.0 Tf"));
        assert!(out.contains("0.0 0.0 0.0 rg"));
        assert!(out.contains("1.0 0.0 0.0 1.0 100.0 700.0 Tm"));
        assert!(out.contains("(hello) Tj"));
        assert!(out.ends_with("ET\n"));
    }

    #[test]
    fn test_show_text_escapes() {
        let mut content = ContentStream::new();
        content.show_text("a(b)\\c");
        let out = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(out, "(a\\(b\\)\\\\c) Tj\n");
    }
}
