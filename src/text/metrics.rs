//! Text metrics: Measuring and rasterizing strings at a pixel size.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::geometry::Rect;
use crate::surface::{Rgb, Surface};

/// Font measurement and rasterization, keyed by family name and pixel size.
///
/// Implementations must be deterministic, and widths and heights must not
/// shrink as the size grows: the auto-fit search relies on both.
pub trait TextMetrics {
    /// Rendered `(width, height)` of `text` in pixels.
    ///
    /// Measuring an empty string yields zero width and the line height.
    fn measure(&self, text: &str, family: &str, size: u32) -> (u32, u32);

    /// Rasterize `text` into a surface exactly [`measure`](Self::measure)
    /// pixels large.
    ///
    /// Surfaces are opaque; without a background the glyphs are drawn
    /// over black.
    fn render(&self, text: &str, family: &str, size: u32, fg: Rgb, bg: Option<Rgb>) -> Surface;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn measure(&self, text: &str, family: &str, size: u32) -> (u32, u32) {
        (**self).measure(text, family, size)
    }

    fn render(&self, text: &str, family: &str, size: u32, fg: Rgb, bg: Option<Rgb>) -> Surface {
        (**self).render(text, family, size, fg, bg)
    }
}

/// A fixed-advance block font.
///
/// Every terminal column is `3/5` of the pixel size wide and every line is
/// exactly `size` pixels tall; wide (CJK) characters take two columns.
/// Glyphs are drawn as solid blocks. The family name is ignored.
///
/// This needs no font files, which makes it the metrics of choice for
/// headless rendering and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonoMetrics;

impl MonoMetrics {
    /// Create the block font.
    pub const fn new() -> Self {
        Self
    }

    /// Width of one column at `size`.
    #[inline]
    pub const fn advance(size: u32) -> u32 {
        size * 3 / 5
    }
}

impl TextMetrics for MonoMetrics {
    #[allow(clippy::cast_possible_truncation)]
    fn measure(&self, text: &str, _family: &str, size: u32) -> (u32, u32) {
        let columns = text.width() as u32;
        (columns * Self::advance(size), size)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&self, text: &str, family: &str, size: u32, fg: Rgb, bg: Option<Rgb>) -> Surface {
        let (width, height) = self.measure(text, family, size);
        let mut surface = Surface::filled(width, height, bg.unwrap_or(Rgb::BLACK));
        let advance = Self::advance(size);
        let inset_x = advance / 8;
        let inset_y = size / 8;

        let mut column = 0u32;
        for grapheme in text.graphemes(true) {
            let columns = grapheme.width() as u32;
            if !grapheme.trim().is_empty() {
                let glyph = Rect::new(
                    (column * advance + inset_x) as i32,
                    inset_y as i32,
                    (columns * advance).saturating_sub(inset_x * 2).max(1),
                    size.saturating_sub(inset_y * 2).max(1),
                );
                surface.fill_rect(glyph, fg);
            }
            column += columns;
        }
        surface
    }
}
