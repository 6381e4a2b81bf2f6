//! Anchor: Named reference points used to align one rect inside another.

use std::str::FromStr;

use super::rect::Rect;
use crate::error::Error;

/// A named corner or the center of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Top-left corner.
    #[default]
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
    /// Center point.
    Center,
}

impl Anchor {
    /// All anchors, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Center,
    ];

    /// The coordinates of this anchor on `rect`.
    ///
    /// Right and bottom edges are exclusive, matching [`Rect::right`].
    #[allow(clippy::cast_possible_wrap)]
    pub const fn point(self, rect: &Rect) -> (i32, i32) {
        match self {
            Self::TopLeft => (rect.x, rect.y),
            Self::TopRight => (rect.right(), rect.y),
            Self::BottomLeft => (rect.x, rect.bottom()),
            Self::BottomRight => (rect.right(), rect.bottom()),
            Self::Center => (
                rect.x + (rect.width / 2) as i32,
                rect.y + (rect.height / 2) as i32,
            ),
        }
    }

    /// Place a `width` x `height` rect so that its anchor point lands on
    /// the same-named anchor point of `target`.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn place(self, width: u32, height: u32, target: &Rect) -> Rect {
        let (tx, ty) = self.point(target);
        let (w, h) = (width as i32, height as i32);
        let (x, y) = match self {
            Self::TopLeft => (tx, ty),
            Self::TopRight => (tx - w, ty),
            Self::BottomLeft => (tx, ty - h),
            Self::BottomRight => (tx - w, ty - h),
            Self::Center => (tx - w / 2, ty - h / 2),
        };
        Rect::new(x, y, width, height)
    }

    /// The lowercase name used by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
            Self::Center => "center",
        }
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidAnchor(s.to_string()))
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
