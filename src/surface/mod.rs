//! Surface module: The pixel substrate widgets draw into.
//!
//! This module contains:
//! - [`Rgb`]: True-color representation with clamped arithmetic
//! - [`Surface`]: An owned pixel buffer with fill, stroke, blit and scale

mod color;
#[allow(clippy::module_inception)]
mod surface;

pub use color::Rgb;
pub use surface::Surface;
