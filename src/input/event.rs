//! Input event types.
//!
//! [`InputEvent`]s are what a platform backend produces; the
//! [`InputSnapshot`](super::InputSnapshot) folds them into per-frame state
//! and turns key presses into [`TextEvent`]s for text widgets.

use bitflags::bitflags;

/// Key codes for keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Function key (F1-F12).
    F(u8),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Backtab (Shift+Tab).
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Super/Command/Windows key held.
    pub super_key: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };

    /// Check if a modifier that turns a character into a shortcut is held.
    pub const fn is_shortcut(&self) -> bool {
        self.control || self.alt || self.super_key
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left (primary) mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

bitflags! {
    /// Set of held mouse buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left (primary) button.
        const LEFT = 0b0000_0001;
        /// Right button.
        const RIGHT = 0b0000_0010;
        /// Middle button.
        const MIDDLE = 0b0000_0100;
    }
}

impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
        }
    }
}

/// Raw events from a platform backend, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down (or auto-repeated).
    KeyDown {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during keypress.
        modifiers: KeyModifiers,
    },

    /// A key was released.
    KeyUp {
        /// The key code.
        code: KeyCode,
    },

    /// The pointer moved.
    MouseMove {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },

    /// A mouse button was pressed.
    MouseDown {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
        /// The button.
        button: MouseButton,
    },

    /// A mouse button was released.
    MouseUp {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
        /// The button.
        button: MouseButton,
    },

    /// Committed text that did not come from a single key (e.g. paste).
    Text(String),
}

/// Discrete editing events for the current frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEvent {
    /// Text to insert.
    Text(String),
    /// Delete the character before the caret.
    Backspace,
    /// Any other key press; text widgets ignore these.
    Key(KeyCode),
}

impl TextEvent {
    /// The editing event produced by a key press.
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(c) if !modifiers.is_shortcut() => Self::Text(c.to_string()),
            KeyCode::Enter => Self::Text("\n".to_string()),
            KeyCode::Backspace => Self::Backspace,
            other => Self::Key(other),
        }
    }
}
