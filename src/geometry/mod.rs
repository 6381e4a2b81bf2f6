//! Geometry module: Pixel rectangles and anchor alignment.
//!
//! Every widget owns exactly one [`Rect`]; text rows are aligned inside
//! their slots with an [`Anchor`].

mod anchor;
mod rect;

pub use anchor::Anchor;
pub use rect::Rect;
