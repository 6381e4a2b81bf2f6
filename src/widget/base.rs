//! The record every widget shares: bounds, cached image and dirty flag.

use crate::geometry::Rect;
use crate::surface::Surface;

/// Bounds, cached image, visibility and dirty flag of a widget.
///
/// The image always matches the size of the rect. The dirty flag means
/// the image no longer reflects the widget's properties; it is cleared by
/// the redraw that brings the image up to date.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    /// Widget bounds.
    rect: Rect,
    /// Cached rendering, `rect`-sized.
    image: Surface,
    /// Needs redraw flag.
    dirty: bool,
    /// Hidden widgets are neither drawn nor hit by the pointer.
    visible: bool,
}

impl WidgetBase {
    /// Create a dirty base with a blank image.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            image: Surface::new(rect.width, rect.height),
            dirty: true,
            visible: true,
        }
    }

    /// Get the widget bounds.
    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the cached image.
    #[inline]
    pub const fn image(&self) -> &Surface {
        &self.image
    }

    #[inline]
    pub(crate) fn image_mut(&mut self) -> &mut Surface {
        &mut self.image
    }

    /// Check if the image is stale.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the image stale.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Check if the widget is drawn.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Move the top-left corner to `(x, y)`. The image is kept as is.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.rect = self.rect.moved_to(x, y);
    }

    /// Move by `(dx, dy)`. The image is kept as is.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect = self.rect.translate(dx, dy);
    }

    /// Change the size.
    ///
    /// The old image is rescaled so it stays `rect`-sized until the next
    /// redraw, and the widget is marked dirty.
    pub fn resize_to(&mut self, width: u32, height: u32) {
        self.rect.width = width;
        self.rect.height = height;
        self.image = self.image.scaled(width, height);
        self.dirty = true;
    }
}
