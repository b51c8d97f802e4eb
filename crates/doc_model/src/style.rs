//! Text style configuration
//!
//! A flat value type describing typography and page geometry for the whole
//! document. The editor replaces the value wholesale on every edit; exporters
//! receive it by reference and never mutate it.

use crate::{fonts, CustomPageSize, PageDimensions, PageSizePreset, Result};
use serde::{Deserialize, Serialize};

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The OOXML `w:jc` value for this alignment
    pub fn docx_value(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Where page numbers are placed when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageNumberPosition {
    Left,
    Center,
    Right,
}

/// Complete style configuration for the text surface and exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font family name
    pub font_family: String,
    /// Font size in points
    pub font_size: f64,
    /// Line height as a unitless multiplier of the font size
    pub line_height: f64,
    /// Additional spacing between letters, in points
    pub letter_spacing: f64,
    /// Additional spacing between words, in points
    pub word_spacing: f64,
    /// Foreground color as a hex string (e.g. "#000000")
    pub color: String,
    /// Background color as a hex string
    pub background_color: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Horizontal alignment
    pub text_align: Alignment,
    /// Named page size, or `Custom`
    pub page_size: PageSizePreset,
    /// Margins in points
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// First-line indent in points
    pub first_line_indent: f64,
    pub indent_left: f64,
    pub indent_right: f64,
    /// Whether to print page numbers
    pub page_numbers: bool,
    pub page_number_position: PageNumberPosition,
    /// Whether the on-screen ruler is shown
    pub show_ruler: bool,
    /// Dimensions in centimeters, used only when `page_size` is `Custom`
    #[serde(default)]
    pub custom_page_size: Option<CustomPageSize>,
    /// Tab width in characters
    pub tab_size: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: fonts::DEFAULT_FAMILY.to_string(),
            font_size: 16.0,
            line_height: 1.5,
            letter_spacing: 0.0,
            word_spacing: 1.0,
            color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            bold: false,
            italic: false,
            underline: false,
            text_align: Alignment::Right,
            page_size: PageSizePreset::A4,
            margin_top: 72.0,
            margin_right: 72.0,
            margin_bottom: 72.0,
            margin_left: 72.0,
            first_line_indent: 0.0,
            indent_left: 0.0,
            indent_right: 0.0,
            page_numbers: false,
            page_number_position: PageNumberPosition::Center,
            show_ruler: false,
            custom_page_size: Some(CustomPageSize::new(21.0, 29.7)),
            tab_size: 4,
        }
    }
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the configured page size to point geometry.
    ///
    /// Errors when `Custom` is selected without usable dimensions.
    pub fn page_dimensions(&self) -> Result<PageDimensions> {
        crate::resolve_page_size(self.page_size, self.custom_page_size)
    }

    /// Check the style's internal invariants
    pub fn validate(&self) -> Result<()> {
        self.page_dimensions().map(|_| ())
    }

    /// Parse the foreground color into RGB components.
    ///
    /// Malformed strings fall back to black rather than failing the export.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.color).unwrap_or((0, 0, 0))
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_line_height(mut self, multiplier: f64) -> Self {
        self.line_height = multiplier;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.text_align = alignment;
        self
    }

    pub fn with_page_size(mut self, preset: PageSizePreset) -> Self {
        self.page_size = preset;
        self
    }

    pub fn with_custom_page_size(mut self, size: CustomPageSize) -> Self {
        self.page_size = PageSizePreset::Custom;
        self.custom_page_size = Some(size);
        self
    }

    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_right = right;
        self.margin_bottom = bottom;
        self.margin_left = left;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// Parse a `#rrggbb` (or `#rgb`) color string
fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocModelError;

    #[test]
    fn test_defaults() {
        let style = TextStyle::default();
        assert_eq!(style.font_family, "Jameel Noori Nastaleeq");
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.text_align, Alignment::Right);
        assert_eq!(style.page_size, PageSizePreset::A4);
        assert_eq!(style.margin_top, 72.0);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_builder_replaces_value() {
        let base = TextStyle::default();
        let edited = base.clone().with_font_size(24.0).with_bold(true);

        assert_eq!(base.font_size, 16.0);
        assert!(!base.bold);
        assert_eq!(edited.font_size, 24.0);
        assert!(edited.bold);
    }

    #[test]
    fn test_custom_without_dimensions_fails_validation() {
        let mut style = TextStyle::default().with_page_size(PageSizePreset::Custom);
        style.custom_page_size = None;
        assert!(matches!(
            style.validate(),
            Err(DocModelError::MissingCustomPageSize)
        ));
    }

    #[test]
    fn test_color_parsing() {
        let style = TextStyle::default().with_font_size(16.0);
        assert_eq!(style.color_rgb(), (0, 0, 0));

        let mut red = TextStyle::default();
        red.color = "#ff0000".to_string();
        assert_eq!(red.color_rgb(), (255, 0, 0));

        let mut short = TextStyle::default();
        short.color = "#fff".to_string();
        assert_eq!(short.color_rgb(), (255, 255, 255));

        let mut bad = TextStyle::default();
        bad.color = "papayawhip".to_string();
        assert_eq!(bad.color_rgb(), (0, 0, 0));
    }

    #[test]
    fn test_serde_camel_case() {
        let style = TextStyle::default();
        let json = serde_json::to_string(&style).unwrap();
        assert!(json.contains("\"fontFamily\""));
        assert!(json.contains("\"marginTop\""));
        assert!(json.contains("\"textAlign\":\"right\""));

        let parsed: TextStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, style);
    }
}
