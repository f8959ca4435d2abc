//! Rendering options and configuration.

/// Title used when neither the options nor the document supply one.
pub const DEFAULT_TITLE: &str = "Converted Document";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title, overriding the metadata title
    pub title: Option<String>,

    /// Factor applied to explicit run font sizes
    pub font_scale: f32,

    /// Smallest font size emitted for a run, in points
    pub min_font_size: f32,

    /// Font size emitted for runs without an explicit size, in points
    pub default_font_size: f32,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the font scale factor.
    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.font_scale = scale;
        self
    }

    /// Set the minimum font size in points.
    pub fn with_min_font_size(mut self, points: f32) -> Self {
        self.min_font_size = points;
        self
    }

    /// Set the default font size in points.
    pub fn with_default_font_size(mut self, points: f32) -> Self {
        self.default_font_size = points;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            font_scale: 0.7,
            min_font_size: 8.0,
            default_font_size: 10.0,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_title("Week 1")
            .with_font_scale(1.0)
            .with_min_font_size(6.0)
            .with_default_font_size(12.0)
            .with_stats(true);

        assert_eq!(options.title.as_deref(), Some("Week 1"));
        assert_eq!(options.font_scale, 1.0);
        assert_eq!(options.min_font_size, 6.0);
        assert_eq!(options.default_font_size, 12.0);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.title, None);
        assert_eq!(options.font_scale, 0.7);
        assert_eq!(options.min_font_size, 8.0);
        assert_eq!(options.default_font_size, 10.0);
    }
}
