//! Widgets: Retained-mode controls with cached images and dirty flags.
//!
//! Every widget owns a [`WidgetBase`] (bounds, `rect`-sized image, dirty
//! flag) and knows how to update itself from one frame of input. The
//! closed [`Widget`] enum is what the manager stores and dispatches on.
//!
//! # Update model
//!
//! - Pointer-driven widgets (button, sliders) look at the pointer every
//!   frame and repaint only when their visible state changes.
//! - Text widgets repaint only when dirty. A focused text input also
//!   consumes the frame's text events and runs its caret timer.
//!
//! # Example
//!
//! ```rust
//! use pinwheel::geometry::Rect;
//! use pinwheel::input::InputSnapshot;
//! use pinwheel::text::MonoMetrics;
//! use pinwheel::widget::{TextBox, UpdateContext, Widget};
//!
//! let mut widget = Widget::from(TextBox::new(Rect::new(0, 0, 256, 32), "Hello"));
//! let mut input = InputSnapshot::new();
//! let mut ctx = UpdateContext {
//!     input: &mut input,
//!     metrics: &MonoMetrics,
//!     now_ms: 0,
//!     focused: false,
//! };
//! widget.update(&mut ctx);
//! assert!(!widget.is_dirty());
//! assert_eq!(widget.as_text_box().map(|text_box| text_box.font_size()), Some(29));
//! ```

mod base;
mod button;
mod slider;
mod text_box;
mod text_input;

pub use base::WidgetBase;
pub use button::{Button, ButtonConfig, ButtonState};
pub use slider::{ContinuousSlider, Orientation, Slider, SliderConfig};
pub use text_box::{TextBox, TextBoxConfig};
pub use text_input::{TextInput, TextInputConfig};

use crate::geometry::Rect;
use crate::input::InputSnapshot;
use crate::surface::Surface;
use crate::text::TextMetrics;

/// Everything a widget may read or consume during one update.
pub struct UpdateContext<'a> {
    /// This frame's input. Text events are drained by the focused input.
    pub input: &'a mut InputSnapshot,
    /// Font measurement and rasterization.
    pub metrics: &'a dyn TextMetrics,
    /// Frame timestamp.
    pub now_ms: u64,
    /// Whether the widget being updated holds focus.
    pub focused: bool,
}

/// Any widget the manager can hold.
#[derive(Debug)]
pub enum Widget {
    /// A push button.
    Button(Button),
    /// A slider over a fixed list of values.
    Slider(Slider),
    /// A horizontal or vertical slider over a range.
    ContinuousSlider(ContinuousSlider),
    /// Static auto-fitted text.
    TextBox(TextBox),
    /// Editable auto-fitted text.
    TextInput(TextInput),
}

impl Widget {
    /// Name of the variant, for logs and errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::Slider(_) => "slider",
            Self::ContinuousSlider(_) => "continuous slider",
            Self::TextBox(_) => "text box",
            Self::TextInput(_) => "text input",
        }
    }

    /// The shared record.
    pub const fn base(&self) -> &WidgetBase {
        match self {
            Self::Button(w) => w.base(),
            Self::Slider(w) => w.base(),
            Self::ContinuousSlider(w) => w.base(),
            Self::TextBox(w) => w.base(),
            Self::TextInput(w) => w.base(),
        }
    }

    /// Mutable access to the shared record (moving, resizing).
    pub fn base_mut(&mut self) -> &mut WidgetBase {
        match self {
            Self::Button(w) => w.base_mut(),
            Self::Slider(w) => w.base_mut(),
            Self::ContinuousSlider(w) => w.base_mut(),
            Self::TextBox(w) => w.base_mut(),
            Self::TextInput(w) => w.base_mut(),
        }
    }

    /// Get the bounds.
    #[inline]
    pub const fn rect(&self) -> Rect {
        self.base().rect()
    }

    /// Get the cached image.
    #[inline]
    pub const fn image(&self) -> &Surface {
        self.base().image()
    }

    /// Check if the image is stale.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.base().is_dirty()
    }

    /// Check if the widget has work to do even without focus.
    pub const fn wants_update(&self) -> bool {
        match self {
            Self::Button(_) | Self::Slider(_) | Self::ContinuousSlider(_) => true,
            Self::TextBox(_) | Self::TextInput(_) => self.is_dirty(),
        }
    }

    /// Advance the widget by one frame.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        match self {
            Self::Button(w) => w.update(ctx),
            Self::Slider(w) => w.update(ctx),
            Self::ContinuousSlider(w) => w.update(ctx),
            Self::TextBox(w) => w.update(ctx),
            Self::TextInput(w) => w.update(ctx),
        }
    }

    /// Called when focus moves away from this widget.
    pub fn unfocus(&mut self) {
        if let Self::TextInput(w) = self {
            w.unfocus();
        }
    }

    /// The button, if this is one.
    pub const fn as_button(&self) -> Option<&Button> {
        match self {
            Self::Button(w) => Some(w),
            _ => None,
        }
    }

    /// The button, mutably, if this is one.
    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Self::Button(w) => Some(w),
            _ => None,
        }
    }

    /// The discrete slider, if this is one.
    pub const fn as_slider(&self) -> Option<&Slider> {
        match self {
            Self::Slider(w) => Some(w),
            _ => None,
        }
    }

    /// The discrete slider, mutably, if this is one.
    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match self {
            Self::Slider(w) => Some(w),
            _ => None,
        }
    }

    /// The continuous slider, if this is one.
    pub const fn as_continuous_slider(&self) -> Option<&ContinuousSlider> {
        match self {
            Self::ContinuousSlider(w) => Some(w),
            _ => None,
        }
    }

    /// The continuous slider, mutably, if this is one.
    pub fn as_continuous_slider_mut(&mut self) -> Option<&mut ContinuousSlider> {
        match self {
            Self::ContinuousSlider(w) => Some(w),
            _ => None,
        }
    }

    /// The text box, if this is one.
    pub const fn as_text_box(&self) -> Option<&TextBox> {
        match self {
            Self::TextBox(w) => Some(w),
            _ => None,
        }
    }

    /// The text box, mutably, if this is one.
    pub fn as_text_box_mut(&mut self) -> Option<&mut TextBox> {
        match self {
            Self::TextBox(w) => Some(w),
            _ => None,
        }
    }

    /// The text input, if this is one.
    pub const fn as_text_input(&self) -> Option<&TextInput> {
        match self {
            Self::TextInput(w) => Some(w),
            _ => None,
        }
    }

    /// The text input, mutably, if this is one.
    pub fn as_text_input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Self::TextInput(w) => Some(w),
            _ => None,
        }
    }
}

impl From<Button> for Widget {
    fn from(widget: Button) -> Self {
        Self::Button(widget)
    }
}

impl From<Slider> for Widget {
    fn from(widget: Slider) -> Self {
        Self::Slider(widget)
    }
}

impl From<ContinuousSlider> for Widget {
    fn from(widget: ContinuousSlider) -> Self {
        Self::ContinuousSlider(widget)
    }
}

impl From<TextBox> for Widget {
    fn from(widget: TextBox) -> Self {
        Self::TextBox(widget)
    }
}

impl From<TextInput> for Widget {
    fn from(widget: TextInput) -> Self {
        Self::TextInput(widget)
    }
}
