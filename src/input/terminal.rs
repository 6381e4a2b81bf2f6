//! Terminal backend: converts crossterm events into [`InputEvent`]s.
//!
//! Terminal mouse reports are in character cells. The adapter maps each
//! cell to the pixel at its center using the cell size the surface is
//! presented with.

use crossterm::event::{self, Event, KeyEventKind};

use super::event::{InputEvent, KeyCode, KeyModifiers, MouseButton};

/// Converts terminal events to pixel-space input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInput {
    /// Pixel width of one terminal cell.
    cell_width: u32,
    /// Pixel height of one terminal cell.
    cell_height: u32,
}

impl Default for TerminalInput {
    /// One pixel per column, two per row (half-block presentation).
    fn default() -> Self {
        Self::new(1, 2)
    }
}

impl TerminalInput {
    /// Create an adapter for cells of `cell_width` x `cell_height` pixels.
    pub const fn new(cell_width: u32, cell_height: u32) -> Self {
        Self {
            cell_width,
            cell_height,
        }
    }

    /// Convert a crossterm event.
    ///
    /// Returns `None` for events with no pixel-space meaning (resize,
    /// terminal focus, scrolling) and for unmapped keys.
    pub fn convert(&self, event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key_event) => {
                let code = Self::convert_key_code(key_event.code)?;
                if key_event.kind == KeyEventKind::Release {
                    return Some(InputEvent::KeyUp { code });
                }
                let modifiers = Self::convert_modifiers(key_event.modifiers);
                Some(InputEvent::KeyDown { code, modifiers })
            }
            Event::Mouse(mouse_event) => self.convert_mouse_event(mouse_event),
            Event::Paste(text) => Some(InputEvent::Text(text)),
            Event::Resize(..) | Event::FocusGained | Event::FocusLost => None,
        }
    }

    /// Convert crossterm KeyCode to our KeyCode.
    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::F(n) => KeyCode::F(n),
            event::KeyCode::Backspace => KeyCode::Backspace,
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::PageUp => KeyCode::PageUp,
            event::KeyCode::PageDown => KeyCode::PageDown,
            event::KeyCode::Tab => KeyCode::Tab,
            event::KeyCode::BackTab => KeyCode::BackTab,
            event::KeyCode::Delete => KeyCode::Delete,
            event::KeyCode::Insert => KeyCode::Insert,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    /// Convert crossterm KeyModifiers to our KeyModifiers.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
            super_key: mods.contains(event::KeyModifiers::SUPER),
        }
    }

    /// Center of a terminal cell, in pixels.
    #[allow(clippy::cast_possible_wrap)]
    const fn cell_center(&self, column: u16, row: u16) -> (i32, i32) {
        (
            (column as u32 * self.cell_width + self.cell_width / 2) as i32,
            (row as u32 * self.cell_height + self.cell_height / 2) as i32,
        )
    }

    /// Convert crossterm MouseEvent to our InputEvent.
    fn convert_mouse_event(&self, mouse: event::MouseEvent) -> Option<InputEvent> {
        let (x, y) = self.cell_center(mouse.column, mouse.row);
        match mouse.kind {
            event::MouseEventKind::Down(button) => Some(InputEvent::MouseDown {
                x,
                y,
                button: Self::convert_mouse_button(button),
            }),
            event::MouseEventKind::Up(button) => Some(InputEvent::MouseUp {
                x,
                y,
                button: Self::convert_mouse_button(button),
            }),
            event::MouseEventKind::Moved | event::MouseEventKind::Drag(_) => {
                Some(InputEvent::MouseMove { x, y })
            }
            _ => None,
        }
    }

    /// Convert crossterm MouseButton to our MouseButton.
    const fn convert_mouse_button(button: event::MouseButton) -> MouseButton {
        match button {
            event::MouseButton::Left => MouseButton::Left,
            event::MouseButton::Right => MouseButton::Right,
            event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}
