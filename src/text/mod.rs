//! Text module: Font metrics and the auto-fit layout search.
//!
//! [`TextMetrics`] is the seam to whatever rasterizes glyphs. [`MonoMetrics`]
//! is a built-in block font that needs no font files; with the `fontdue`
//! feature, `FontdueMetrics` renders real TrueType fonts.
//!
//! [`fit_text`] picks the largest font size at which a string, optionally
//! word-wrapped, fits a pixel box, and returns the rasterized rows.
//!
//! # Example
//!
//! ```rust
//! use pinwheel::text::{fit_text, FitConfig, FitRequest, MonoMetrics};
//! use pinwheel::{Anchor, Rgb};
//!
//! let request = FitRequest {
//!     text: "Hello",
//!     family: "Arial",
//!     width: 253,
//!     height: 29,
//!     wrap: true,
//!     fg: Rgb::BLACK,
//!     bg: Rgb::WHITE,
//!     anchor: Anchor::TopLeft,
//! };
//! let fitted = fit_text(&MonoMetrics, &request, &FitConfig::default());
//! assert_eq!(fitted.font_size, 29);
//! ```

mod fit;
#[cfg(feature = "fontdue")]
mod glyph;
mod metrics;

pub use fit::{fit_text, FitConfig, FitRequest, FittedRow, FittedText};
#[cfg(feature = "fontdue")]
pub use glyph::FontdueMetrics;
pub use metrics::{MonoMetrics, TextMetrics};
