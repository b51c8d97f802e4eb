//! Right-to-left page composition
//!
//! Turns text plus style into pages of positioned lines:
//!
//! 1. an optional lyrics header, rendered at a fixed 12pt and advanced by
//!    1.5x that size per line, with one body-font-size gap after the block;
//! 2. body paragraphs split on explicit newlines, each word-wrapped to the
//!    width between the margins against the engine's width estimate;
//! 3. every line is right-aligned at the right margin; a cursor past
//!    `page height - bottom margin` starts a new page before the line is
//!    placed, so a single paragraph may span many pages.

use super::fonts::{estimate_text_width, StandardFont};
use doc_model::{LyricsMetadata, PageDimensions, TextStyle};
use unicode_segmentation::UnicodeSegmentation;

/// Font size used for the lyrics header block
pub const METADATA_FONT_SIZE: f64 = 12.0;

/// Line spacing multiplier for the lyrics header block
pub const METADATA_LINE_SPACING: f64 = 1.5;

/// A line placed on a page; `x`/`y` are in points from the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedText {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

/// One composed page
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: f64,
    pub height: f64,
    pub texts: Vec<PositionedText>,
}

impl PageLayout {
    fn new(dims: PageDimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            texts: Vec::new(),
        }
    }
}

struct Composer<'a> {
    style: &'a TextStyle,
    dims: PageDimensions,
    font: StandardFont,
    pages: Vec<PageLayout>,
    cursor: f64,
}

impl<'a> Composer<'a> {
    fn new(style: &'a TextStyle, dims: PageDimensions, font: StandardFont) -> Self {
        Self {
            style,
            dims,
            font,
            pages: vec![PageLayout::new(dims)],
            cursor: style.margin_top,
        }
    }

    fn bottom_limit(&self) -> f64 {
        self.dims.height - self.style.margin_bottom
    }

    /// Place one line right-aligned at the right margin, then advance.
    ///
    /// The overflow check runs before placement, so no line's baseline ever
    /// passes the bottom margin.
    fn place_line(&mut self, text: &str, font_size: f64, advance: f64) {
        if self.cursor > self.bottom_limit() {
            self.pages.push(PageLayout::new(self.dims));
            self.cursor = self.style.margin_top;
        }
        if !text.is_empty() {
            let width = estimate_text_width(text, self.font, font_size);
            let x = self.dims.width - self.style.margin_right - width;
            let page = self.pages.last_mut().expect("at least one page");
            page.texts.push(PositionedText {
                text: text.to_string(),
                x,
                y: self.cursor,
                font_size,
            });
        }
        self.cursor += advance;
    }

    fn finish(self) -> Vec<PageLayout> {
        self.pages
    }
}

/// Compose pages from text, style, and optional lyrics metadata.
///
/// The caller resolves `dims` and `font` up front; composition itself cannot
/// fail.
pub fn compose(
    text: &str,
    style: &TextStyle,
    metadata: Option<&LyricsMetadata>,
    dims: PageDimensions,
    font: StandardFont,
) -> Vec<PageLayout> {
    let mut composer = Composer::new(style, dims, font);
    let text_width = dims.width - style.margin_left - style.margin_right;

    if let Some(meta) = metadata {
        let lines = meta.header_lines();
        for line in &lines {
            composer.place_line(
                line,
                METADATA_FONT_SIZE,
                METADATA_FONT_SIZE * METADATA_LINE_SPACING,
            );
        }
        if !lines.is_empty() {
            composer.cursor += style.font_size;
        }
    }

    let line_advance = style.font_size * style.line_height;
    for paragraph in text.split('\n') {
        for line in wrap_paragraph(paragraph, font, style.font_size, text_width) {
            composer.place_line(&line, style.font_size, line_advance);
        }
    }

    composer.finish()
}

/// Greedily wrap one paragraph to `max_width` points.
///
/// Break opportunities come from UAX-29 word boundaries; a single segment
/// wider than the line is split at grapheme boundaries. An empty paragraph
/// yields one empty line so blank lines still advance the cursor.
pub fn wrap_paragraph(
    text: &str,
    font: StandardFont,
    font_size: f64,
    max_width: f64,
) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    let fits = |s: &str| estimate_text_width(s, font, font_size) <= max_width;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for segment in text.split_word_bounds() {
        let mut candidate = current.clone();
        candidate.push_str(segment);
        if fits(&candidate) {
            current = candidate;
            continue;
        }

        if !current.trim_end().is_empty() {
            lines.push(current.trim_end().to_string());
        }
        current.clear();

        if segment.trim().is_empty() {
            // whitespace at a break is consumed by the break itself
            continue;
        }

        if fits(segment) {
            current.push_str(segment);
        } else {
            // a single over-long word: hard-split at grapheme boundaries
            for grapheme in segment.graphemes(true) {
                let mut candidate = current.clone();
                candidate.push_str(grapheme);
                if !fits(&candidate) && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current.push_str(grapheme);
                } else {
                    current = candidate;
                }
            }
        }
    }

    if !current.trim_end().is_empty() {
        lines.push(current.trim_end().to_string());
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Reorder a logical-order line for right-to-left display.
///
/// The engine renders strings left-to-right, so RTL mode emits the line's
/// graphemes mirrored.
pub fn visual_order(text: &str) -> String {
    text.graphemes(true).rev().collect()
}
