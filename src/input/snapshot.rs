//! Input snapshot: the pointer, button and key state for one frame.

use std::collections::HashSet;

use super::event::{InputEvent, KeyCode, MouseButton, MouseButtons, TextEvent};

/// Per-frame input state.
///
/// The frame driver calls [`begin_frame`](Self::begin_frame) and then
/// [`apply`](Self::apply)s the frame's events. Widgets read held state,
/// compare against the previous frame for edges ("newly pressed"), and
/// the focused text widget drains the frame's [`TextEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Pointer position in pixels.
    mouse: (i32, i32),
    /// Buttons held now.
    buttons: MouseButtons,
    /// Buttons held at the end of the previous frame.
    previous_buttons: MouseButtons,
    /// Keys held now.
    keys: HashSet<KeyCode>,
    /// Keys held at the end of the previous frame.
    previous_keys: HashSet<KeyCode>,
    /// Editing events for this frame.
    text: Vec<TextEvent>,
}

impl InputSnapshot {
    /// Create an empty snapshot: pointer at the origin, nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame.
    ///
    /// The current held state becomes the previous state and undrained
    /// text events are discarded.
    pub fn begin_frame(&mut self) {
        self.previous_buttons = self.buttons;
        self.previous_keys.clone_from(&self.keys);
        self.text.clear();
    }

    /// Fold one event into the snapshot.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { code, modifiers } => {
                self.keys.insert(*code);
                self.text.push(TextEvent::from_key(*code, *modifiers));
            }
            InputEvent::KeyUp { code } => {
                self.keys.remove(code);
            }
            InputEvent::MouseMove { x, y } => self.mouse = (*x, *y),
            InputEvent::MouseDown { x, y, button } => {
                self.mouse = (*x, *y);
                self.buttons.insert((*button).into());
            }
            InputEvent::MouseUp { x, y, button } => {
                self.mouse = (*x, *y);
                self.buttons.remove((*button).into());
            }
            InputEvent::Text(text) => self.text.push(TextEvent::Text(text.clone())),
        }
    }

    /// Release every held key.
    ///
    /// For backends that never report key releases (most terminals), call
    /// this after each frame so presses stay one-frame edges.
    pub fn release_keys(&mut self) {
        self.keys.clear();
    }

    /// Pointer position in pixels.
    #[inline]
    pub const fn mouse_position(&self) -> (i32, i32) {
        self.mouse
    }

    /// Move the pointer.
    pub fn set_mouse_position(&mut self, x: i32, y: i32) {
        self.mouse = (x, y);
    }

    /// Check if a mouse button is held.
    #[inline]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(button.into())
    }

    /// Check if a mouse button went down this frame.
    #[inline]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        let flag = button.into();
        self.buttons.contains(flag) && !self.previous_buttons.contains(flag)
    }

    /// Check if a mouse button was released this frame.
    #[inline]
    pub fn button_released(&self, button: MouseButton) -> bool {
        let flag = button.into();
        !self.buttons.contains(flag) && self.previous_buttons.contains(flag)
    }

    /// All held buttons.
    #[inline]
    pub const fn buttons(&self) -> MouseButtons {
        self.buttons
    }

    /// Check if a key is held.
    #[inline]
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Check if a key went down this frame (down now, up previously).
    #[inline]
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys.contains(&key) && !self.previous_keys.contains(&key)
    }

    /// The editing events not yet drained this frame.
    pub fn text_events(&self) -> &[TextEvent] {
        &self.text
    }

    /// Take this frame's editing events; later calls return nothing until
    /// new events arrive.
    pub fn drain_text_events(&mut self) -> Vec<TextEvent> {
        std::mem::take(&mut self.text)
    }
}
