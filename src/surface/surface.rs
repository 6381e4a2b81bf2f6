//! Surface: An owned pixel buffer that widgets render into.
//!
//! Pixels are stored in row-major order in a contiguous `Vec`. Every
//! drawing operation clips against the surface bounds, so callers can
//! pass rectangles and offsets that hang off any edge.

use super::color::Rgb;
use crate::geometry::Rect;

/// A 2D grid of pixels.
///
/// Zero-sized surfaces are valid; they are what an empty text layout
/// produces and blitting them is a no-op. `Clone` is the copy operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    /// Contiguous pixel storage (row-major order).
    pixels: Vec<Rgb>,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl Surface {
    /// Create a black surface with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    /// Create a surface filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            pixels: vec![color; size],
            width,
            height,
        }
    }

    /// An empty (zero-sized) surface.
    pub const fn empty() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Get the surface width.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the surface height.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the size as `(width, height)`.
    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The surface bounds, anchored at the origin.
    #[inline]
    pub const fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Check if the surface has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get a reference to the underlying pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color;
            true
        } else {
            false
        }
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a rectangular region, clipped to the surface.
    #[allow(clippy::cast_sign_loss)]
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some(clip) = rect.intersection(&self.rect()) else {
            return;
        };
        let stride = self.width as usize;
        let (x0, w) = (clip.x as usize, clip.width as usize);
        for row in clip.y..clip.bottom() {
            let start = row as usize * stride + x0;
            self.pixels[start..start + w].fill(color);
        }
    }

    /// Stroke the outline of `rect` with lines `thickness` pixels wide,
    /// drawn inward from its edges.
    ///
    /// A thickness of zero fills the rect, matching the usual convention
    /// of "width 0 means solid".
    #[allow(clippy::cast_possible_wrap)]
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb, thickness: u32) {
        let doubled = thickness.saturating_mul(2);
        if thickness == 0 || doubled >= rect.width || doubled >= rect.height {
            self.fill_rect(rect, color);
            return;
        }
        let t = thickness as i32;
        let inner_height = rect.height - doubled;
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, thickness), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - t, rect.width, thickness), color);
        self.fill_rect(Rect::new(rect.x, rect.y + t, thickness, inner_height), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.y + t, thickness, inner_height), color);
    }

    /// Copy `src` onto this surface with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside this surface are dropped.
    #[allow(clippy::cast_sign_loss)]
    pub fn blit(&mut self, src: &Self, (x, y): (i32, i32)) {
        let placed = Rect::new(x, y, src.width, src.height);
        let Some(clip) = placed.intersection(&self.rect()) else {
            return;
        };
        let dst_stride = self.width as usize;
        let src_stride = src.width as usize;
        let w = clip.width as usize;
        let src_x = (clip.x - x) as usize;
        for row in clip.y..clip.bottom() {
            let src_row = (row - y) as usize;
            let src_start = src_row * src_stride + src_x;
            let dst_start = row as usize * dst_stride + clip.x as usize;
            self.pixels[dst_start..dst_start + w]
                .copy_from_slice(&src.pixels[src_start..src_start + w]);
        }
    }

    /// Return a copy scaled to `width` x `height` (nearest neighbour).
    #[must_use]
    pub fn scaled(&self, width: u32, height: u32) -> Self {
        if self.is_empty() {
            return Self::new(width, height);
        }
        let mut out = Self::new(width, height);
        let (sw, sh) = (u64::from(self.width), u64::from(self.height));
        for y in 0..height {
            let sy = (u64::from(y) * sh / u64::from(height)) as usize;
            for x in 0..width {
                let sx = (u64::from(x) * sw / u64::from(width)) as usize;
                out.pixels[(y as usize) * (width as usize) + x as usize] =
                    self.pixels[sy * (self.width as usize) + sx];
            }
        }
        out
    }

    /// Count pixels equal to `color`.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
