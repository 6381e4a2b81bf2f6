//! Button Widget: A filled rect that reacts to hover and press.
//!
//! The fill color follows the pointer state: idle is the base color
//! minus the highlight, hovered is the base color, pressed is the base
//! color plus the highlight (component-wise, clamped). The image is only
//! repainted when that state changes.

use super::base::WidgetBase;
use super::UpdateContext;
use crate::geometry::Rect;
use crate::input::MouseButton;
use crate::surface::Rgb;

/// Configuration for the button widget.
#[derive(Debug, Clone)]
pub struct ButtonConfig {
    /// Base (hovered) color.
    pub color: Rgb,
    /// Amount added when pressed and removed when idle.
    pub highlight_color: Rgb,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            color: Rgb::new(100, 0, 100),
            highlight_color: Rgb::new(50, 50, 50),
        }
    }
}

/// Pointer state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Pointer elsewhere.
    Idle,
    /// Pointer over the button.
    Hovered,
    /// Primary button went down over the button and is still held.
    Pressed,
}

/// A push button.
#[derive(Debug)]
pub struct Button {
    base: WidgetBase,
    config: ButtonConfig,
    hovered: bool,
    pressed: bool,
    /// Released over the button during the last update.
    clicked: bool,
}

impl Button {
    /// Create a new button with the given bounds.
    pub fn new(rect: Rect) -> Self {
        Self::with_config(rect, ButtonConfig::default())
    }

    /// Create a new button with custom configuration.
    pub fn with_config(rect: Rect, config: ButtonConfig) -> Self {
        Self {
            base: WidgetBase::new(rect),
            config,
            hovered: false,
            pressed: false,
            clicked: false,
        }
    }

    pub(crate) const fn base(&self) -> &WidgetBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Current pointer state.
    pub const fn state(&self) -> ButtonState {
        if self.pressed {
            ButtonState::Pressed
        } else if self.hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Idle
        }
    }

    /// Check if the press was released over the button in the last update.
    pub const fn was_clicked(&self) -> bool {
        self.clicked
    }

    /// Get the base color.
    pub const fn color(&self) -> Rgb {
        self.config.color
    }

    /// Set the base color.
    pub fn set_color(&mut self, color: Rgb) {
        self.config.color = color;
        self.base.mark_dirty();
    }

    /// Get the highlight color.
    pub const fn highlight_color(&self) -> Rgb {
        self.config.highlight_color
    }

    /// Set the highlight color.
    pub fn set_highlight_color(&mut self, color: Rgb) {
        self.config.highlight_color = color;
        self.base.mark_dirty();
    }

    /// The fill color for the current state.
    pub fn fill_color(&self) -> Rgb {
        match self.state() {
            ButtonState::Idle => self.config.color - self.config.highlight_color,
            ButtonState::Hovered => self.config.color,
            ButtonState::Pressed => self.config.color + self.config.highlight_color,
        }
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let previous = self.state();
        let (x, y) = ctx.input.mouse_position();
        self.hovered = self.base.rect().contains(x, y);

        let down = ctx.input.is_button_down(MouseButton::Left);
        self.clicked = self.pressed && !down && self.hovered;
        if down && self.hovered {
            self.pressed = true;
        } else if !down {
            self.pressed = false;
        }

        if self.state() != previous || self.base.is_dirty() {
            let color = self.fill_color();
            self.base.image_mut().fill(color);
            self.base.clear_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputSnapshot};
    use crate::text::MonoMetrics;

    fn step(button: &mut Button, input: &mut InputSnapshot, events: &[InputEvent]) {
        input.begin_frame();
        for event in events {
            input.apply(event);
        }
        let mut ctx = UpdateContext {
            input,
            metrics: &MonoMetrics,
            now_ms: 0,
            focused: false,
        };
        button.update(&mut ctx);
    }

    #[test]
    fn test_button_first_update_paints_idle() {
        let mut button = Button::new(Rect::new(10, 10, 20, 10));
        let mut input = InputSnapshot::new();
        step(&mut button, &mut input, &[]);
        assert_eq!(button.state(), ButtonState::Idle);
        assert!(!button.base().is_dirty());
        assert_eq!(button.base().image().get(0, 0), Some(Rgb::new(50, 0, 50)));
    }

    #[test]
    fn test_button_hover_press_release() {
        let mut button = Button::new(Rect::new(10, 10, 20, 10));
        let mut input = InputSnapshot::new();

        step(&mut button, &mut input, &[InputEvent::MouseMove { x: 15, y: 15 }]);
        assert_eq!(button.state(), ButtonState::Hovered);
        assert_eq!(button.base().image().get(0, 0), Some(Rgb::new(100, 0, 100)));

        step(
            &mut button,
            &mut input,
            &[InputEvent::MouseDown { x: 15, y: 15, button: MouseButton::Left }],
        );
        assert_eq!(button.state(), ButtonState::Pressed);
        assert_eq!(button.base().image().get(0, 0), Some(Rgb::new(150, 50, 150)));

        step(
            &mut button,
            &mut input,
            &[InputEvent::MouseUp { x: 16, y: 15, button: MouseButton::Left }],
        );
        assert_eq!(button.state(), ButtonState::Hovered);
        assert!(button.was_clicked());

        step(&mut button, &mut input, &[]);
        assert!(!button.was_clicked());
    }

    #[test]
    fn test_button_release_outside_goes_idle() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));
        let mut input = InputSnapshot::new();
        step(
            &mut button,
            &mut input,
            &[InputEvent::MouseDown { x: 5, y: 5, button: MouseButton::Left }],
        );
        // Dragging out while held keeps the press.
        step(&mut button, &mut input, &[InputEvent::MouseMove { x: 50, y: 50 }]);
        assert_eq!(button.state(), ButtonState::Pressed);

        step(
            &mut button,
            &mut input,
            &[InputEvent::MouseUp { x: 50, y: 50, button: MouseButton::Left }],
        );
        assert_eq!(button.state(), ButtonState::Idle);
        assert!(!button.was_clicked());
    }

    #[test]
    fn test_button_press_started_outside_does_not_press() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10));
        let mut input = InputSnapshot::new();
        step(
            &mut button,
            &mut input,
            &[InputEvent::MouseDown { x: 50, y: 50, button: MouseButton::Left }],
        );
        assert_eq!(button.state(), ButtonState::Idle);
    }

    #[test]
    fn test_button_color_change_repaints() {
        let mut button = Button::new(Rect::new(0, 0, 4, 4));
        let mut input = InputSnapshot::new();
        step(&mut button, &mut input, &[]);

        button.set_color(Rgb::new(200, 200, 200));
        assert!(button.base().is_dirty());
        step(&mut button, &mut input, &[]);
        assert!(!button.base().is_dirty());
        assert_eq!(button.base().image().get(3, 3), Some(Rgb::new(150, 150, 150)));
    }
}
