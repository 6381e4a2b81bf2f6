//! TextInput Widget: An editable text box with a blinking caret.
//!
//! While focused, the input drains the frame's [`TextEvent`]s: text is
//! appended, backspace removes the last grapheme cluster, other keys are
//! ignored. The caret toggles every `blink_interval_ms` and is drawn after
//! the last row of text. Losing focus hides it.

use unicode_segmentation::UnicodeSegmentation;

use super::base::WidgetBase;
use super::text_box::{TextBox, TextBoxConfig};
use super::UpdateContext;
use crate::geometry::Rect;
use crate::input::TextEvent;
use crate::surface::Rgb;
use crate::text::TextMetrics;

/// Configuration for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Styling of the underlying text box.
    pub text_box: TextBoxConfig,
    /// Caret fill.
    pub caret_color: Rgb,
    /// Time between caret toggles.
    pub blink_interval_ms: u64,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            text_box: TextBoxConfig::default(),
            caret_color: Rgb::BLACK,
            blink_interval_ms: 500,
        }
    }
}

/// An editable, auto-fitted text box.
#[derive(Debug)]
pub struct TextInput {
    text_box: TextBox,
    caret_color: Rgb,
    blink_interval_ms: u64,
    caret_visible: bool,
    /// Next caret toggle; unset until the first focused update.
    blink_deadline: Option<u64>,
    /// Width of the trailing whitespace the fitted rows drop.
    caret_pad: u32,
}

impl TextInput {
    /// Create an empty text input.
    pub fn new(rect: Rect) -> Self {
        Self::with_config(rect, TextInputConfig::default())
    }

    /// Create an empty text input with custom configuration.
    pub fn with_config(rect: Rect, config: TextInputConfig) -> Self {
        Self {
            text_box: TextBox::with_config(rect, String::new(), config.text_box),
            caret_color: config.caret_color,
            blink_interval_ms: config.blink_interval_ms,
            caret_visible: false,
            blink_deadline: None,
            caret_pad: 0,
        }
    }

    pub(crate) const fn base(&self) -> &WidgetBase {
        self.text_box.base()
    }

    pub(crate) fn base_mut(&mut self) -> &mut WidgetBase {
        self.text_box.base_mut()
    }

    /// The underlying text box, for styling.
    pub const fn text_box(&self) -> &TextBox {
        &self.text_box
    }

    /// Mutable access to the underlying text box.
    pub fn text_box_mut(&mut self) -> &mut TextBox {
        &mut self.text_box
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        self.text_box.text()
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_box.set_text(text);
    }

    /// Check if the caret is currently shown.
    pub const fn caret_visible(&self) -> bool {
        self.caret_visible
    }

    /// When the caret toggles next, if the input has been focused.
    pub const fn blink_deadline(&self) -> Option<u64> {
        self.blink_deadline
    }

    /// Where the caret is drawn, relative to the widget.
    ///
    /// Right after the last row of text and any spaces typed after it; at
    /// the left edge of the text area when there is no text.
    pub fn caret_rect(&self) -> Rect {
        let area = self.text_box.text_area();
        let width = (self.text_box.base().rect().width / 50).max(1);
        let pad = i32::try_from(self.caret_pad).unwrap_or(i32::MAX);
        match self.text_box.rows().last() {
            Some(row) => Rect::new(
                area.x.saturating_add(row.rect.right()).saturating_add(pad),
                area.y + row.rect.y,
                width,
                row.rect.height,
            ),
            None => Rect::new(
                area.x.saturating_add(pad),
                area.y + 2,
                width,
                area.height.saturating_sub(4),
            ),
        }
    }

    /// Hide the caret and restart the blink timer on the next focus.
    pub fn unfocus(&mut self) {
        self.caret_visible = false;
        self.blink_deadline = None;
        self.text_box.base_mut().mark_dirty();
    }

    fn apply(&mut self, event: TextEvent) {
        match event {
            TextEvent::Text(text) => self.text_box.edit_text(|content| {
                content.push_str(&text);
                !text.is_empty()
            }),
            TextEvent::Backspace => self.text_box.edit_text(|content| {
                match content.grapheme_indices(true).next_back() {
                    Some((index, _)) => {
                        content.truncate(index);
                        true
                    }
                    None => false,
                }
            }),
            TextEvent::Key(_) => {}
        }
    }

    fn tick(&mut self, now_ms: u64) {
        match self.blink_deadline {
            None => self.blink_deadline = Some(now_ms + self.blink_interval_ms),
            Some(deadline) if now_ms >= deadline => {
                self.caret_visible = !self.caret_visible;
                self.blink_deadline = Some(now_ms + self.blink_interval_ms);
                self.text_box.base_mut().mark_dirty();
            }
            Some(_) => {}
        }
    }

    fn trailing_width(&self, metrics: &dyn TextMetrics) -> u32 {
        let text = self.text_box.text();
        let kept = text.trim_end_matches(|c: char| c.is_whitespace() && c != '\n' && c != '\r');
        let trailing = &text[kept.len()..];
        if trailing.is_empty() {
            return 0;
        }
        metrics
            .measure(trailing, self.text_box.font_family(), self.text_box.font_size())
            .0
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if ctx.focused {
            for event in ctx.input.drain_text_events() {
                self.apply(event);
            }
            self.tick(ctx.now_ms);
        }

        if self.text_box.base().is_dirty() {
            self.text_box.redraw(ctx.metrics);
            self.caret_pad = self.trailing_width(ctx.metrics);
            if ctx.focused && self.caret_visible {
                let caret = self.caret_rect();
                let color = self.caret_color;
                self.text_box.base_mut().image_mut().fill_rect(caret, color);
            }
        }
    }
}
