//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// A paragraph of text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a paragraph carrying a named style.
    pub fn styled(style_name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style.style_name = Some(style_name.into());
        p
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether the paragraph produces output.
    ///
    /// A paragraph with at least one run is kept even when that run is
    /// blank, so styled empty lines survive.
    pub fn is_renderable(&self) -> bool {
        !self.plain_text().trim().is_empty() || !self.runs.is_empty()
    }

    /// Resolve the heading level (1-6) of this paragraph.
    ///
    /// An explicit outline level wins over the style name.
    pub fn heading_level(&self) -> Option<u8> {
        match self.style.outline_level {
            Some(level) => Some(level.clamp(1, 6)),
            None => self
                .style
                .style_name
                .as_deref()
                .and_then(heading_level_from_style_name),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }
}

/// Derive a heading level from a style name such as `"Heading 2"`.
///
/// Names containing `heading` (any case) are headings. The last
/// whitespace-separated token is the level; anything unparseable means
/// level 1 and the result is clamped to 1..=6, including integers too
/// large to represent.
pub fn heading_level_from_style_name(name: &str) -> Option<u8> {
    let lower = name.to_lowercase();
    if !lower.contains("heading") {
        return None;
    }

    let level = lower
        .split_whitespace()
        .last()
        .map(|token| match token.parse::<i64>() {
            Ok(level) => level,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
            Err(_) => 1,
        })
        .unwrap_or(1);

    Some(level.clamp(1, 6) as u8)
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Display name of the paragraph style
    pub style_name: Option<String>,

    /// Outline level (1-based) supplied by the source document
    pub outline_level: Option<u8>,

    /// Text alignment
    pub alignment: Alignment,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// CSS `text-align` keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }

    /// Check for the implicit default.
    pub fn is_left(&self) -> bool {
        matches!(self, Alignment::Left)
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic text run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Set the font size in points and return self.
    pub fn sized(mut self, points: f32) -> Self {
        self.style.font_size = Some(points);
        self
    }

    /// Set the text color and return self.
    pub fn colored(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text color
    pub color: Option<Rgb>,
}

impl TextStyle {
    /// Check if any non-default formatting is applied.
    pub fn has_formatting(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.font_size.is_some()
            || self.color.is_some()
    }
}

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse a `RRGGBB` hex string. `auto` and malformed values yield `None`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let value = value.trim().trim_start_matches('#');
        if value.len() != 6 || !value.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Six lowercase hex digits, without a leading `#`.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_text("!");

        assert_eq!(p.plain_text(), "Hello world!");
    }

    #[test]
    fn test_heading_from_style_name() {
        assert_eq!(heading_level_from_style_name("Heading 2"), Some(2));
        assert_eq!(heading_level_from_style_name("heading 9"), Some(6));
        assert_eq!(heading_level_from_style_name("Heading X"), Some(1));
        assert_eq!(heading_level_from_style_name("Heading1"), Some(1));
        assert_eq!(heading_level_from_style_name("Heading 0"), Some(1));
        assert_eq!(
            heading_level_from_style_name("Heading 99999999999999999999"),
            Some(6)
        );
        assert_eq!(
            heading_level_from_style_name("Heading -99999999999999999999"),
            Some(1)
        );
        assert_eq!(heading_level_from_style_name("Normal"), None);
    }

    #[test]
    fn test_outline_level_wins() {
        let mut p = Paragraph::styled("Normal", "Intro");
        assert!(!p.is_heading());

        p.style.outline_level = Some(3);
        assert_eq!(p.heading_level(), Some(3));

        p.style.outline_level = Some(9);
        assert_eq!(p.heading_level(), Some(6));
    }

    #[test]
    fn test_renderable() {
        assert!(!Paragraph::new().is_renderable());
        assert!(Paragraph::with_text("").is_renderable());
        assert!(Paragraph::with_text("text").is_renderable());
    }

    #[test]
    fn test_text_style() {
        let style = TextStyle::default();
        assert!(!style.has_formatting());

        let sized = TextStyle {
            font_size: Some(12.0),
            ..Default::default()
        };
        assert!(sized.has_formatting());
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::from_hex("FF0080"), Some(Rgb(255, 0, 128)));
        assert_eq!(Rgb::from_hex("auto"), None);
        assert_eq!(Rgb::from_hex("12345"), None);
        assert_eq!(Rgb::from_hex("GG0000"), None);
        assert_eq!(Rgb(0x1f, 0x4e, 0x79).to_hex(), "1f4e79");
        assert_eq!(Rgb(1, 2, 3).to_string(), "#010203");
    }
}
