//! TrueType metrics and rasterization backed by `fontdue`.

use std::collections::HashMap;

use fontdue::{Font, FontSettings};
use log::debug;

use super::metrics::TextMetrics;
use crate::error::{Error, Result};
use crate::surface::{Rgb, Surface};

/// Glyph metrics for a set of named font families.
///
/// Unknown family names fall back to the family the set was created with.
pub struct FontdueMetrics {
    fonts: HashMap<String, Font>,
    default_family: String,
}

impl FontdueMetrics {
    /// Create a font set whose default family is parsed from `data`.
    pub fn new(family: impl Into<String>, data: &[u8]) -> Result<Self> {
        let family = family.into();
        let mut fonts = HashMap::new();
        fonts.insert(family.clone(), parse(data)?);
        Ok(Self {
            fonts,
            default_family: family,
        })
    }

    /// Register another family.
    pub fn with_family(mut self, family: impl Into<String>, data: &[u8]) -> Result<Self> {
        self.fonts.insert(family.into(), parse(data)?);
        Ok(self)
    }

    /// The registered family names.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    fn font(&self, family: &str) -> &Font {
        if let Some(font) = self.fonts.get(family) {
            return font;
        }
        debug!("unknown font family {family:?}, using {:?}", self.default_family);
        &self.fonts[&self.default_family]
    }

    /// `(ascent, line height)` in whole pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn line(font: &Font, px: f32) -> (i32, u32) {
        font.horizontal_line_metrics(px).map_or((px.ceil() as i32, px.ceil() as u32), |line| {
            let ascent = line.ascent.ceil();
            (ascent as i32, (ascent - line.descent.floor()) as u32)
        })
    }
}

fn parse(data: &[u8]) -> Result<Font> {
    Font::from_bytes(data, FontSettings::default()).map_err(|e| Error::Font(e.to_string()))
}

impl TextMetrics for FontdueMetrics {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn measure(&self, text: &str, family: &str, size: u32) -> (u32, u32) {
        if size == 0 {
            return (0, 0);
        }
        let font = self.font(family);
        let px = size as f32;
        let advance: f32 = text.chars().map(|c| font.metrics(c, px).advance_width).sum();
        (advance.ceil() as u32, Self::line(font, px).1)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    fn render(&self, text: &str, family: &str, size: u32, fg: Rgb, bg: Option<Rgb>) -> Surface {
        let (width, height) = self.measure(text, family, size);
        let bg = bg.unwrap_or(Rgb::BLACK);
        let mut surface = Surface::filled(width, height, bg);
        if size == 0 {
            return surface;
        }

        let font = self.font(family);
        let px = size as f32;
        let (ascent, _) = Self::line(font, px);
        let mut pen = 0.0f32;
        for c in text.chars() {
            let (metrics, coverage) = font.rasterize(c, px);
            let left = pen.round() as i32 + metrics.xmin;
            let top = ascent - (metrics.ymin + metrics.height as i32);
            for (i, &alpha) in coverage.iter().enumerate() {
                if alpha == 0 {
                    continue;
                }
                let x = left + (i % metrics.width) as i32;
                let y = top + (i / metrics.width) as i32;
                surface.set(x, y, fg.blend_over(bg, alpha));
            }
            pen += metrics.advance_width;
        }
        surface
    }
}

impl std::fmt::Debug for FontdueMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueMetrics")
            .field("families", &self.fonts.keys().collect::<Vec<_>>())
            .field("default_family", &self.default_family)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fontdue_rejects_garbage() {
        let result = FontdueMetrics::new("Broken", b"not a font");
        assert!(matches!(result, Err(Error::Font(_))));
    }
}
