//! Widget Manager: Registry, focus tracking and per-frame input routing.
//!
//! The manager owns every widget in insertion order. That order is the
//! draw order (later widgets on top) and the focus cycle order.
//!
//! # Frame
//!
//! [`WidgetManager::update`] runs once per frame:
//!
//! 1. A newly pressed focus key (Tab by default) moves focus to the next
//!    widget, wrapping around.
//! 2. A newly pressed focus button focuses the topmost widget under the
//!    pointer.
//! 3. The focused widget updates with `focused = true`.
//! 4. Every other widget that wants an update updates unfocused.
//!
//! Focus transitions call [`Widget::unfocus`] on the widget losing focus
//! and are reported as [`FocusChange`]s.

use std::fmt;

use log::debug;

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::input::{InputSnapshot, KeyCode, MouseButton};
use crate::surface::Surface;
use crate::text::TextMetrics;
use crate::widget::{UpdateContext, Widget};

/// Stable handle to a registered widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Configuration for the widget manager.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Key that cycles focus.
    pub focus_key: KeyCode,
    /// Button that focuses the widget under the pointer.
    pub focus_button: MouseButton,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            focus_key: KeyCode::Tab,
            focus_button: MouseButton::Left,
        }
    }
}

/// What moved focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCause {
    /// The focus key.
    Key,
    /// A click on a widget.
    Pointer,
    /// [`WidgetManager::set_focus`].
    Explicit,
}

/// One focus transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// The widget that lost focus and had `unfocus` called, if any.
    pub unfocused: Option<WidgetId>,
    /// The widget that now holds focus.
    pub focused: WidgetId,
    /// What caused the transition.
    pub cause: FocusCause,
}

#[derive(Debug)]
struct Entry {
    id: WidgetId,
    widget: Widget,
}

/// Owns widgets and routes input to them.
#[derive(Debug)]
pub struct WidgetManager {
    entries: Vec<Entry>,
    /// Index into `entries`.
    focused: Option<usize>,
    next_id: u64,
    config: ManagerConfig,
}

impl Default for WidgetManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Create an empty manager with custom configuration.
    pub const fn with_config(config: ManagerConfig) -> Self {
        Self {
            entries: Vec::new(),
            focused: None,
            next_id: 0,
            config,
        }
    }

    /// Get the configuration.
    pub const fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Register a widget on top of the others.
    ///
    /// The first widget registered into an unfocused manager takes focus.
    pub fn add(&mut self, widget: impl Into<Widget>) -> WidgetId {
        let widget = widget.into();
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        debug!("add {} {id} at {:?}", widget.kind(), widget.rect());

        self.entries.push(Entry { id, widget });
        if self.focused.is_none() && self.entries.len() == 1 {
            self.focused = Some(0);
        }
        id
    }

    /// Unregister a widget and hand it back.
    ///
    /// Removing the focused widget unfocuses it and leaves nothing
    /// focused.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownWidget`] if `id` is not registered.
    pub fn remove(&mut self, id: WidgetId) -> Result<Widget> {
        let index = self.index_of(id)?;
        let mut entry = self.entries.remove(index);
        match self.focused {
            Some(focused) if focused == index => {
                entry.widget.unfocus();
                self.focused = None;
            }
            Some(focused) if focused > index => self.focused = Some(focused - 1),
            _ => {}
        }
        debug!("remove {} {id}", entry.widget.kind());
        Ok(entry.widget)
    }

    fn index_of(&self, id: WidgetId) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(Error::UnknownWidget(id))
    }

    /// Look up a widget.
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.entries.iter().find(|entry| entry.id == id).map(|entry| &entry.widget)
    }

    /// Look up a widget mutably.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.widget)
    }

    /// Look up a widget of a known kind.
    ///
    /// ```rust
    /// use pinwheel::geometry::Rect;
    /// use pinwheel::manager::WidgetManager;
    /// use pinwheel::widget::{TextBox, Widget};
    ///
    /// let mut manager = WidgetManager::new();
    /// let id = manager.add(TextBox::new(Rect::new(0, 0, 80, 20), "hi"));
    /// manager.get_as(id, "text box", Widget::as_text_box_mut)?.set_text("bye");
    /// # Ok::<(), pinwheel::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownWidget`] if `id` is not registered and
    /// [`Error::WrongKind`] if `access` rejects the widget.
    pub fn get_as<T, F>(&mut self, id: WidgetId, expected: &'static str, access: F) -> Result<&mut T>
    where
        F: FnOnce(&mut Widget) -> Option<&mut T>,
    {
        let widget = self.get_mut(id).ok_or(Error::UnknownWidget(id))?;
        let actual = widget.kind();
        access(widget).ok_or(Error::WrongKind { id, expected, actual })
    }

    /// Iterate over widgets in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &Widget)> {
        self.entries.iter().map(|entry| (entry.id, &entry.widget))
    }

    /// Number of registered widgets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no widget is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The focused widget's id.
    pub fn focused_id(&self) -> Option<WidgetId> {
        self.focused.map(|index| self.entries[index].id)
    }

    /// The focused widget.
    pub fn focused(&self) -> Option<&Widget> {
        self.focused.map(|index| &self.entries[index].widget)
    }

    /// Focus a widget directly.
    ///
    /// Returns `None` if it already held focus.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownWidget`] if `id` is not registered.
    pub fn set_focus(&mut self, id: WidgetId) -> Result<Option<FocusChange>> {
        let index = self.index_of(id)?;
        if self.focused == Some(index) {
            return Ok(None);
        }
        Ok(Some(self.transfer_focus(index, FocusCause::Explicit)))
    }

    /// The topmost visible widget containing `(x, y)`.
    pub fn widget_at(&self, x: i32, y: i32) -> Option<WidgetId> {
        self.index_at(x, y).map(|index| self.entries[index].id)
    }

    fn index_at(&self, x: i32, y: i32) -> Option<usize> {
        self.entries
            .iter()
            .rposition(|entry| entry.widget.base().is_visible() && entry.widget.rect().contains(x, y))
    }

    fn transfer_focus(&mut self, index: usize, cause: FocusCause) -> FocusChange {
        let unfocused = self.focused.map(|previous| {
            let entry = &mut self.entries[previous];
            entry.widget.unfocus();
            entry.id
        });
        self.focused = Some(index);

        let change = FocusChange {
            unfocused,
            focused: self.entries[index].id,
            cause,
        };
        debug!("focus {:?} -> {} ({cause:?})", change.unfocused, change.focused);
        change
    }

    /// Run one frame: route focus, then update widgets.
    pub fn update(
        &mut self,
        input: &mut InputSnapshot,
        metrics: &dyn TextMetrics,
        now_ms: u64,
    ) -> Vec<FocusChange> {
        let mut changes = Vec::new();
        if self.entries.is_empty() {
            return changes;
        }

        if input.key_pressed(self.config.focus_key) {
            let next = self.focused.map_or(0, |index| (index + 1) % self.entries.len());
            changes.push(self.transfer_focus(next, FocusCause::Key));
        }

        if input.button_pressed(self.config.focus_button) {
            let (x, y) = input.mouse_position();
            if let Some(index) = self.index_at(x, y) {
                if self.focused != Some(index) {
                    changes.push(self.transfer_focus(index, FocusCause::Pointer));
                }
            }
        }

        if let Some(index) = self.focused {
            let mut ctx = UpdateContext {
                input: &mut *input,
                metrics,
                now_ms,
                focused: true,
            };
            self.entries[index].widget.update(&mut ctx);
        }

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if Some(index) == self.focused || !entry.widget.wants_update() {
                continue;
            }
            let mut ctx = UpdateContext {
                input: &mut *input,
                metrics,
                now_ms,
                focused: false,
            };
            entry.widget.update(&mut ctx);
        }

        changes
    }

    /// Run one frame stamped with the current reading of `clock`.
    pub fn update_with_clock(
        &mut self,
        input: &mut InputSnapshot,
        metrics: &dyn TextMetrics,
        clock: &dyn Clock,
    ) -> Vec<FocusChange> {
        self.update(input, metrics, clock.now_ms())
    }

    /// Blit every visible widget's image onto `target` in insertion order.
    pub fn draw(&self, target: &mut Surface) {
        for entry in self.entries.iter().filter(|entry| entry.widget.base().is_visible()) {
            let rect = entry.widget.rect();
            target.blit(entry.widget.image(), (rect.x, rect.y));
        }
    }
}
