use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Vertical metrics of one line of text, in logical pixels, y-up convention.
///
/// `ascent` is positive (above the baseline), `descent` is negative.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    /// Approximation used when no font is available.
    #[inline]
    pub fn fallback(size: f32) -> Self {
        Self { ascent: size * 0.8, descent: -size * 0.2 }
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.ascent - self.descent
    }

    /// Baseline that vertically centers the line box on `center_y` (y-down space).
    #[inline]
    pub fn centered_baseline(self, center_y: f32) -> f32 {
        center_y + (self.ascent + self.descent) * 0.5
    }
}

/// Owns a collection of loaded fonts.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {id:?} ({} bytes)", bytes.len());
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Ascent/descent for `size`, falling back to [`LineMetrics::fallback`]
    /// when `id` is `None` or unknown.
    pub fn line_metrics(&self, id: Option<FontId>, size: f32) -> LineMetrics {
        id.and_then(|id| self.get(id))
            .and_then(|font| font.horizontal_line_metrics(size))
            .map(|m| LineMetrics { ascent: m.ascent, descent: m.descent })
            .unwrap_or_else(|| LineMetrics::fallback(size))
    }

    /// Single-line bounds of `text`: advance width and line height.
    ///
    /// Without a usable font the width is 0 and the height follows
    /// [`LineMetrics::fallback`], so layout still produces a sane box.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: Option<FontId>, size: f32) -> Vec2 {
        let height = self.line_metrics(id, size).height();
        let Some(font) = id.and_then(|id| self.get(id)) else {
            return Vec2::new(0.0, height);
        };
        let width = text.chars().map(|c| font.metrics(c, size).advance_width).sum();
        Vec2::new(width, height)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_measures_with_fallback_metrics() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("Rust", None, 20.0);
        assert_eq!(size.x, 0.0);
        assert_eq!(size.y, 20.0);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
    }

    #[test]
    fn centered_baseline_sits_below_center() {
        let m = LineMetrics::fallback(10.0);
        // ascent 8, descent -2: baseline 3 px below the center line.
        assert_eq!(m.centered_baseline(20.0), 23.0);
    }
}
