//! Rect: A pixel rectangle primitive for widget bounds and blitting.

/// A rectangle defined by position and size, in pixels.
///
/// Positions are signed so that partially off-screen widgets and
/// negative blit offsets can be represented; sizes are unsigned.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Get the area (number of pixels).
    #[inline]
    pub const fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the size as `(width, height)`.
    #[inline]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the right edge (exclusive).
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width as i32)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height as i32)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle intersects with another.
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// The overlapping part of two rectangles, or `None` if they are disjoint.
    #[allow(clippy::cast_sign_loss)]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Self::new(x, y, (right - x) as u32, (bottom - y) as u32))
    }

    /// Offset the rectangle by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.width, self.height)
    }

    /// Same size, top-left corner at `(x, y)`.
    #[inline]
    #[must_use]
    pub const fn moved_to(&self, x: i32, y: i32) -> Self {
        Self::new(x, y, self.width, self.height)
    }

    /// Same size, centered on the center of `outer`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn centered_in(&self, outer: &Self) -> Self {
        let cx = outer.x + (outer.width / 2) as i32;
        let cy = outer.y + (outer.height / 2) as i32;
        Self::new(
            cx - (self.width / 2) as i32,
            cy - (self.height / 2) as i32,
            self.width,
            self.height,
        )
    }

    /// Shrink the rectangle by a margin on all sides.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn shrink(&self, margin: u32) -> Self {
        let m2 = margin.saturating_mul(2);
        if self.width <= m2 || self.height <= m2 {
            return Self::ZERO;
        }
        Self::new(
            self.x + margin as i32,
            self.y + margin as i32,
            self.width - m2,
            self.height - m2,
        )
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}
