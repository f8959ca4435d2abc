//! Run formatting to inline CSS declarations.

use std::fmt;

use crate::model::{Rgb, TextRun};

use super::RenderOptions;

/// A single inline CSS declaration derived from run formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleDeclaration {
    /// `font-weight: bold`
    Bold,
    /// `font-style: italic`
    Italic,
    /// `text-decoration: underline`
    Underline,
    /// `font-size` in points
    FontSize(f32),
    /// `color` as hex
    Color(Rgb),
}

impl fmt::Display for StyleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleDeclaration::Bold => f.write_str("font-weight: bold;"),
            StyleDeclaration::Italic => f.write_str("font-style: italic;"),
            StyleDeclaration::Underline => f.write_str("text-decoration: underline;"),
            StyleDeclaration::FontSize(pt) => write!(f, "font-size: {}pt;", format_points(*pt)),
            StyleDeclaration::Color(rgb) => write!(f, "color: {};", rgb),
        }
    }
}

/// Maps run formatting to style declarations.
#[derive(Debug, Clone, Copy)]
pub struct RunStyleMapper {
    font_scale: f32,
    min_font_size: f32,
    default_font_size: f32,
}

impl RunStyleMapper {
    /// Create a mapper from render options.
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            font_scale: options.font_scale,
            min_font_size: options.min_font_size,
            default_font_size: options.default_font_size,
        }
    }

    /// Declarations for a run, in fixed order.
    ///
    /// Every run with text or formatting gets an explicit font size;
    /// `None` only for a blank, unformatted run.
    pub fn map(&self, run: &TextRun) -> Option<Vec<StyleDeclaration>> {
        let style = &run.style;
        if run.text.is_empty() && !style.has_formatting() {
            return None;
        }

        let mut declarations = Vec::with_capacity(5);
        if style.bold {
            declarations.push(StyleDeclaration::Bold);
        }
        if style.italic {
            declarations.push(StyleDeclaration::Italic);
        }
        if style.underline {
            declarations.push(StyleDeclaration::Underline);
        }

        let size = match style.font_size {
            Some(points) => (points * self.font_scale).max(self.min_font_size),
            None => self.default_font_size,
        };
        declarations.push(StyleDeclaration::FontSize(size));

        if let Some(color) = style.color {
            declarations.push(StyleDeclaration::Color(color));
        }

        Some(declarations)
    }
}

impl Default for RunStyleMapper {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}

/// Join declarations into the value of a `style` attribute.
pub fn style_attribute(declarations: &[StyleDeclaration]) -> String {
    declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a point size with at most one decimal, dropping a trailing `.0`.
pub fn format_points(points: f32) -> String {
    let rounded = (points * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}
