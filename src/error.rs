//! Error types for widget construction and manager lookups.
//!
//! Per-frame work (update, draw, text fitting) never fails; only building
//! things and addressing widgets by id can.

use thiserror::Error;

use crate::manager::WidgetId;

/// Errors returned by pinwheel constructors and manager operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A discrete slider needs at least one value.
    #[error("a discrete slider needs at least one point")]
    EmptyPoints,

    /// The id does not belong to any registered widget.
    #[error("no widget registered with id {0}")]
    UnknownWidget(WidgetId),

    /// The widget exists but is not of the requested kind.
    #[error("widget {id} is a {actual}, not a {expected}")]
    WrongKind {
        /// The widget that was looked up.
        id: WidgetId,
        /// The kind the caller asked for.
        expected: &'static str,
        /// The kind actually registered.
        actual: &'static str,
    },

    /// Anchor names are `topleft`, `topright`, `bottomleft`, `bottomright`
    /// and `center`.
    #[error("invalid anchor name: {0:?}")]
    InvalidAnchor(String),

    /// Font data could not be parsed.
    #[error("font error: {0}")]
    Font(String),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
