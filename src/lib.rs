//! # Pinwheel
//!
//! A retained-mode widget toolkit over a plain RGB surface.
//!
//! Pinwheel supplies a small set of interactive controls and a manager
//! that routes one frame of input at a time to them. Widgets keep their
//! own rendered image and only repaint when something about them changed.
//!
//! ## Core Concepts
//!
//! - **Auto-fit text**: text boxes find the largest font size at which
//!   their text, optionally word-wrapped, fills the box
//! - **Dirty flags**: every widget caches its image and redraws only when
//!   a property it depends on changes
//! - **Focus routing**: Tab cycles focus, clicks focus the widget under
//!   the pointer, and only the focused input receives typed text
//! - **Pluggable fonts**: layout talks to a [`TextMetrics`] trait; a block
//!   font is built in and TrueType fonts come with the `fontdue` feature
//!
//! ## Example
//!
//! ```rust
//! use pinwheel::{InputEvent, InputSnapshot, MonoMetrics, Rect, Surface};
//! use pinwheel::widget::{Button, TextBox};
//! use pinwheel::WidgetManager;
//!
//! let mut manager = WidgetManager::new();
//! let label = manager.add(TextBox::new(Rect::new(0, 0, 256, 32), "Hello"));
//! manager.add(Button::new(Rect::new(0, 40, 64, 24)));
//!
//! let mut input = InputSnapshot::new();
//! input.begin_frame();
//! input.apply(&InputEvent::MouseMove { x: 10, y: 50 });
//! manager.update(&mut input, &MonoMetrics, 0);
//!
//! let mut screen = Surface::new(320, 240);
//! manager.draw(&mut screen);
//! assert_eq!(manager.focused_id(), Some(label));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod clock;
pub mod error;
pub mod geometry;
pub mod input;
pub mod manager;
pub mod surface;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use geometry::{Anchor, Rect};
pub use input::{EventQueue, EventSender, InputEvent, InputSnapshot, KeyCode, KeyModifiers, MouseButton, TextEvent};
pub use manager::{FocusCause, FocusChange, ManagerConfig, WidgetId, WidgetManager};
pub use surface::{Rgb, Surface};
pub use text::{fit_text, FitConfig, FitRequest, FittedText, MonoMetrics, TextMetrics};
pub use widget::{Widget, WidgetBase};
