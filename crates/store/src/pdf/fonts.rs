//! PDF font handling
//!
//! Exports use the standard Type1 fonts built into every PDF viewer. Family
//! names from the style are matched against the standard set; anything
//! unmatched - including all of the editor's Nastaleeq typefaces - falls back
//! to Helvetica, mirroring the editor's long-standing Unicode substitution.
//!
//! `estimate_text_width` is the text-measurement facility the line wrapper
//! delegates to; it uses per-font average character widths.

use super::objects::{PdfDictionary, PdfObject};

/// Standard Type1 text fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    /// The BaseFont name for this font
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Match a family name to a standard font, or `None` when nothing fits
    pub fn from_name(name: &str, bold: bool, italic: bool) -> Option<Self> {
        let name = name.to_lowercase();

        if name.contains("times") || name.contains("serif") {
            return Some(match (bold, italic) {
                (false, false) => StandardFont::TimesRoman,
                (true, false) => StandardFont::TimesBold,
                (false, true) => StandardFont::TimesItalic,
                (true, true) => StandardFont::TimesBoldItalic,
            });
        }

        if name.contains("helvetica") || name.contains("arial") || name.contains("sans") {
            return Some(match (bold, italic) {
                (false, false) => StandardFont::Helvetica,
                (true, false) => StandardFont::HelveticaBold,
                (false, true) => StandardFont::HelveticaOblique,
                (true, true) => StandardFont::HelveticaBoldOblique,
            });
        }

        if name.contains("courier") || name.contains("mono") {
            return Some(match (bold, italic) {
                (false, false) => StandardFont::Courier,
                (true, false) => StandardFont::CourierBold,
                (false, true) => StandardFont::CourierOblique,
                (true, true) => StandardFont::CourierBoldOblique,
            });
        }

        None
    }

    /// Resolve a style family to a usable font, falling back to Helvetica
    pub fn resolve(family: &str) -> Self {
        Self::from_name(family, false, false).unwrap_or(StandardFont::Helvetica)
    }

    /// Average glyph width as a fraction of the font size
    fn average_width(&self) -> f64 {
        match self {
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => 0.6,
            StandardFont::Helvetica | StandardFont::HelveticaOblique => 0.5,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => 0.52,
            StandardFont::TimesRoman | StandardFont::TimesItalic => 0.45,
            StandardFont::TimesBold | StandardFont::TimesBoldItalic => 0.48,
        }
    }
}

/// Estimate the rendered width of `text` in points.
///
/// The engine's measurement facility: character count times the font's
/// average glyph width. Wrapping decisions are made against this estimate.
pub fn estimate_text_width(text: &str, font: StandardFont, font_size: f64) -> f64 {
    text.chars().count() as f64 * font.average_width() * font_size
}

/// Build the font dictionary for a standard font
pub fn create_font_dict(font: StandardFont) -> PdfDictionary {
    let mut dict = PdfDictionary::new().with_type("Font");
    dict.insert("Subtype", PdfObject::name("Type1"));
    dict.insert("BaseFont", PdfObject::name(font.pdf_name()));
    dict.insert("Encoding", PdfObject::name("WinAnsiEncoding"));
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_matching() {
        assert_eq!(
            StandardFont::from_name("Arial", false, false),
            Some(StandardFont::Helvetica)
        );
        assert_eq!(
            StandardFont::from_name("Times New Roman", true, false),
            Some(StandardFont::TimesBold)
        );
        assert_eq!(
            StandardFont::from_name("Courier New", false, true),
            Some(StandardFont::CourierOblique)
        );
        assert_eq!(StandardFont::from_name("Jameel Noori Nastaleeq", false, false), None);
    }

    #[test]
    fn test_nastaleeq_resolves_to_helvetica() {
        for family in doc_model::fonts::FAMILIES {
            assert_eq!(StandardFont::resolve(family), StandardFont::Helvetica);
        }
    }

    #[test]
    fn test_estimate_width_scales() {
        let narrow = estimate_text_width("abc", StandardFont::Helvetica, 12.0);
        let wide = estimate_text_width("abcabc", StandardFont::Helvetica, 12.0);
        assert!((wide - narrow * 2.0).abs() < 1e-9);
        assert!(estimate_text_width("", StandardFont::Helvetica, 12.0) == 0.0);
    }

    #[test]
    fn test_font_dict() {
        let dict = create_font_dict(StandardFont::Helvetica);
        assert!(matches!(dict.get("BaseFont"), Some(PdfObject::Name(n)) if n == "Helvetica"));
        assert!(dict.get("Encoding").is_some());
    }
}
