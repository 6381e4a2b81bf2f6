//! Rgb: 24-bit color with clamped component-wise arithmetic.

use std::ops::{Add, Sub};

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Grey (190, 190, 190)
    pub const GREY: Self = Self::new(190, 190, 190);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Mix `self` over `bg` with an 8-bit coverage value.
    ///
    /// Coverage 255 yields `self`, 0 yields `bg`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn blend_over(self, bg: Self, coverage: u8) -> Self {
        const fn mix(fg: u8, bg: u8, a: u8) -> u8 {
            let a = a as u16;
            ((fg as u16 * a + bg as u16 * (255 - a) + 127) / 255) as u8
        }
        Self::new(
            mix(self.r, bg.r, coverage),
            mix(self.g, bg.g, coverage),
            mix(self.b, bg.b, coverage),
        )
    }
}

impl Add for Rgb {
    type Output = Self;

    /// Component-wise sum, clamped to 255.
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_add(rhs.r),
            self.g.saturating_add(rhs.g),
            self.b.saturating_add(rhs.b),
        )
    }
}

impl Sub for Rgb {
    type Output = Self;

    /// Component-wise difference, clamped to 0.
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r.saturating_sub(rhs.r),
            self.g.saturating_sub(rhs.g),
            self.b.saturating_sub(rhs.b),
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from(0xFF_55_00), Rgb::new(255, 85, 0));
    }

    #[test]
    fn test_rgb_arithmetic_clamps() {
        let base = Rgb::new(100, 0, 230);
        let highlight = Rgb::new(50, 50, 50);
        assert_eq!(base + highlight, Rgb::new(150, 50, 255));
        assert_eq!(base - highlight, Rgb::new(50, 0, 180));
    }

    #[test]
    fn test_blend_over_extremes() {
        let fg = Rgb::new(200, 10, 90);
        assert_eq!(fg.blend_over(Rgb::WHITE, 255), fg);
        assert_eq!(fg.blend_over(Rgb::WHITE, 0), Rgb::WHITE);
    }
}
