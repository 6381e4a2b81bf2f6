//! Input module: Per-frame pointer and keyboard state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  InputEvent   ┌────────────┐  drain_into  ┌───────────────┐
//! │ Backend      │ ────────────▶ │ EventQueue │ ───────────▶ │ InputSnapshot │
//! │ (any thread) │  EventSender  └────────────┘  per frame   └───────────────┘
//! └──────────────┘                                                 │
//!                                                   read by widgets / manager
//! ```
//!
//! Held state (buttons, keys) is compared with the previous frame to find
//! edges; key presses also become [`TextEvent`]s that the focused text
//! widget drains exactly once.

mod event;
mod queue;
mod snapshot;
mod terminal;

pub use event::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseButtons, TextEvent};
pub use queue::{EventQueue, EventSender};
pub use snapshot::InputSnapshot;
pub use terminal::TerminalInput;
