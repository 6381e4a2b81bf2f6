//! TextBox Widget: Static text auto-fitted into a bordered box.
//!
//! The text area is the box minus the border and twice the padding on
//! each axis, centered in the box. On redraw the text is fitted to that
//! area with [`fit_text`] and the image is rebuilt as background, border,
//! then text.
//!
//! Most setters only mark the box dirty; the refit happens on the next
//! update. Background and border color changes need no refit and repaint
//! immediately from the cached text image.

use super::base::WidgetBase;
use super::UpdateContext;
use crate::geometry::{Anchor, Rect};
use crate::surface::Rgb;
use crate::text::{fit_text, FitConfig, FitRequest, FittedRow, FittedText, TextMetrics};

/// Configuration for the text box widget.
#[derive(Debug, Clone)]
pub struct TextBoxConfig {
    /// Font family passed to the metrics.
    pub font_family: String,
    /// Glyph color.
    pub text_color: Rgb,
    /// Fill behind the text.
    pub background_color: Rgb,
    /// Border color.
    pub border_color: Rgb,
    /// Border thickness in pixels; zero draws no border.
    pub border_size: u32,
    /// Horizontal and vertical padding inside the border.
    pub padding: (u32, u32),
    /// Placement of each row inside its slot.
    pub anchor: Anchor,
    /// Break long rows between words.
    pub wrap: bool,
    /// Font size search limits.
    pub fit: FitConfig,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            text_color: Rgb::BLACK,
            background_color: Rgb::WHITE,
            border_color: Rgb::GREY,
            border_size: 3,
            padding: (0, 0),
            anchor: Anchor::TopLeft,
            wrap: true,
            fit: FitConfig::default(),
        }
    }
}

/// A box of auto-fitted static text.
#[derive(Debug)]
pub struct TextBox {
    base: WidgetBase,
    text: String,
    config: TextBoxConfig,
    /// Where the text image sits inside the box.
    text_area: Rect,
    /// Result of the last fit.
    fitted: FittedText,
}

impl TextBox {
    /// Create a new text box with the given bounds and text.
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self::with_config(rect, text, TextBoxConfig::default())
    }

    /// Create a new text box with custom configuration.
    pub fn with_config(rect: Rect, text: impl Into<String>, config: TextBoxConfig) -> Self {
        let fitted = FittedText::empty(config.fit.empty_font_size);
        let mut text_box = Self {
            base: WidgetBase::new(rect),
            text: text.into(),
            config,
            text_area: Rect::ZERO,
            fitted,
        };
        text_box.text_area = text_box.compute_text_area();
        text_box
    }

    pub(crate) const fn base(&self) -> &WidgetBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Get the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.mark_dirty();
    }

    /// Edit the text in place.
    pub(crate) fn edit_text<F: FnOnce(&mut String) -> bool>(&mut self, edit: F) {
        if edit(&mut self.text) {
            self.base.mark_dirty();
        }
    }

    /// Get the font family.
    pub fn font_family(&self) -> &str {
        &self.config.font_family
    }

    /// Set the font family.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.config.font_family = family.into();
        self.base.mark_dirty();
    }

    /// The font size chosen by the last fit.
    pub const fn font_size(&self) -> u32 {
        self.fitted.font_size
    }

    /// Upper bound of the font size search.
    pub const fn max_font_size(&self) -> u32 {
        self.config.fit.max_font_size
    }

    /// Set the upper bound of the font size search.
    pub fn set_max_font_size(&mut self, size: u32) {
        self.config.fit.max_font_size = size;
        self.base.mark_dirty();
    }

    /// Get the text color.
    pub const fn text_color(&self) -> Rgb {
        self.config.text_color
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: Rgb) {
        self.config.text_color = color;
        self.base.mark_dirty();
    }

    /// Get the background color.
    pub const fn background_color(&self) -> Rgb {
        self.config.background_color
    }

    /// Set the background color and repaint right away.
    ///
    /// The cached text keeps its old background until the next refit.
    pub fn set_background_color(&mut self, color: Rgb) {
        self.config.background_color = color;
        self.paint();
    }

    /// Get the border color.
    pub const fn border_color(&self) -> Rgb {
        self.config.border_color
    }

    /// Set the border color and repaint right away.
    pub fn set_border_color(&mut self, color: Rgb) {
        self.config.border_color = color;
        self.paint();
    }

    /// Get the border thickness.
    pub const fn border_size(&self) -> u32 {
        self.config.border_size
    }

    /// Set the border thickness.
    pub fn set_border_size(&mut self, size: u32) {
        self.config.border_size = size;
        self.base.mark_dirty();
    }

    /// Get the padding.
    pub const fn padding(&self) -> (u32, u32) {
        self.config.padding
    }

    /// Set the padding.
    pub fn set_padding(&mut self, padding: (u32, u32)) {
        self.config.padding = padding;
        self.base.mark_dirty();
    }

    /// Get the row anchor.
    pub const fn anchor(&self) -> Anchor {
        self.config.anchor
    }

    /// Set the row anchor.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.config.anchor = anchor;
        self.base.mark_dirty();
    }

    /// Check if wrapping is enabled.
    pub const fn wrap(&self) -> bool {
        self.config.wrap
    }

    /// Enable or disable wrapping.
    pub fn set_wrap(&mut self, wrap: bool) {
        self.config.wrap = wrap;
        self.base.mark_dirty();
    }

    /// The text area as of the last redraw, relative to the box.
    pub const fn text_area(&self) -> Rect {
        self.text_area
    }

    /// Rows of the last fit, relative to the text area.
    pub fn rows(&self) -> &[FittedRow] {
        &self.fitted.rows
    }

    fn compute_text_area(&self) -> Rect {
        let (width, height) = self.base.rect().size();
        let (pad_x, pad_y) = self.config.padding;
        let border = self.config.border_size;
        Rect::from_size(
            width.saturating_sub(border).saturating_sub(pad_x.saturating_mul(2)),
            height.saturating_sub(border).saturating_sub(pad_y.saturating_mul(2)),
        )
        .centered_in(&self.base.image().rect())
    }

    /// Background, border, then the cached text.
    fn paint(&mut self) {
        let background = self.config.background_color;
        let border = (self.config.border_color, self.config.border_size);
        let origin = (self.text_area.x, self.text_area.y);
        let image = self.base.image_mut();

        image.fill(background);
        if border.1 > 0 {
            let bounds = image.rect();
            image.stroke_rect(bounds, border.0, border.1);
        }
        image.blit(&self.fitted.image, origin);
    }

    /// Refit the text and rebuild the image.
    pub fn redraw(&mut self, metrics: &dyn TextMetrics) {
        self.text_area = self.compute_text_area();
        self.fitted = if self.text.is_empty() {
            FittedText::empty(self.config.fit.empty_font_size)
        } else {
            let request = FitRequest {
                text: &self.text,
                family: &self.config.font_family,
                width: self.text_area.width,
                height: self.text_area.height,
                wrap: self.config.wrap,
                fg: self.config.text_color,
                bg: self.config.background_color,
                anchor: self.config.anchor,
            };
            fit_text(metrics, &request, &self.config.fit)
        };
        self.paint();
        self.base.clear_dirty();
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.base.is_dirty() {
            self.redraw(ctx.metrics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSnapshot;
    use crate::text::MonoMetrics;

    fn update(text_box: &mut TextBox) {
        let mut input = InputSnapshot::new();
        let mut ctx = UpdateContext {
            input: &mut input,
            metrics: &MonoMetrics,
            now_ms: 0,
            focused: false,
        };
        text_box.update(&mut ctx);
    }

    fn borderless(text: &str, width: u32, height: u32) -> TextBox {
        let config = TextBoxConfig {
            border_size: 0,
            ..TextBoxConfig::default()
        };
        TextBox::with_config(Rect::new(0, 0, width, height), text, config)
    }

    #[test]
    fn test_text_area_subtracts_border_and_padding() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 100, 50), "x");
        text_box.set_padding((4, 2));
        update(&mut text_box);
        // 100 - 3 - 8 = 89 wide, 50 - 3 - 4 = 43 high, centered.
        assert_eq!(text_box.text_area(), Rect::new(6, 4, 89, 43));
    }

    #[test]
    fn test_text_area_saturates_for_tiny_boxes() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 2, 2), "hello");
        update(&mut text_box);
        assert_eq!(text_box.text_area().size(), (0, 0));
        assert!(!text_box.base().is_dirty());
    }

    #[test]
    fn test_oversized_border_and_padding_saturate() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 40, 20), "hello");
        text_box.set_border_size(u32::MAX / 2 + 1);
        update(&mut text_box);
        assert_eq!(text_box.text_area().size(), (0, 0));
        assert_eq!(text_box.base().image().count(Rgb::GREY), 800);

        text_box.set_border_size(0);
        text_box.set_padding((u32::MAX, u32::MAX / 2 + 1));
        update(&mut text_box);
        assert_eq!(text_box.text_area().size(), (0, 0));
        assert!(!text_box.base().is_dirty());
    }

    #[test]
    fn test_hello_fits_at_29() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 256, 32), "Hello");
        update(&mut text_box);
        assert_eq!(text_box.font_size(), 29);
        assert_eq!(text_box.rows().len(), 1);
        assert_eq!(text_box.rows()[0].text, "Hello");
    }

    #[test]
    fn test_update_clears_dirty_and_is_idempotent() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 256, 32), "Hello");
        assert!(text_box.base().is_dirty());
        update(&mut text_box);
        assert!(!text_box.base().is_dirty());

        let image = text_box.base().image().clone();
        update(&mut text_box);
        assert_eq!(text_box.base().image(), &image);

        text_box.set_text("Hello");
        update(&mut text_box);
        assert_eq!(text_box.base().image(), &image);
        assert_eq!(text_box.font_size(), 29);
    }

    #[test]
    fn test_setters_mark_dirty() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 60, 20), "a");
        update(&mut text_box);

        text_box.set_text("b");
        assert!(text_box.base().is_dirty());
        update(&mut text_box);

        text_box.set_wrap(false);
        assert!(text_box.base().is_dirty());
        update(&mut text_box);

        text_box.set_anchor(Anchor::Center);
        assert!(text_box.base().is_dirty());
        update(&mut text_box);

        text_box.set_max_font_size(8);
        update(&mut text_box);
        assert!(text_box.font_size() <= 8);
    }

    #[test]
    fn test_empty_text_uses_placeholder_size() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 60, 20), "");
        update(&mut text_box);
        assert_eq!(text_box.font_size(), 1);
        assert!(text_box.rows().is_empty());
        assert!(!text_box.base().is_dirty());
    }

    #[test]
    fn test_border_is_drawn() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 40, 20), "");
        update(&mut text_box);
        let image = text_box.base().image();
        assert_eq!(image.get(0, 0), Some(Rgb::GREY));
        assert_eq!(image.get(39, 19), Some(Rgb::GREY));
        assert_eq!(image.get(20, 10), Some(Rgb::WHITE));
    }

    #[test]
    fn test_zero_border_draws_nothing() {
        let mut text_box = borderless("", 40, 20);
        update(&mut text_box);
        assert_eq!(text_box.base().image().count(Rgb::WHITE), 800);
    }

    #[test]
    fn test_border_color_repaints_immediately() {
        let mut text_box = TextBox::new(Rect::new(0, 0, 40, 20), "");
        update(&mut text_box);

        let red = Rgb::new(255, 0, 0);
        text_box.set_border_color(red);
        assert!(!text_box.base().is_dirty());
        assert_eq!(text_box.base().image().get(1, 1), Some(red));

        text_box.set_background_color(Rgb::BLACK);
        assert_eq!(text_box.base().image().get(20, 10), Some(Rgb::BLACK));
    }

    #[test]
    fn test_text_pixels_land_in_text_area() {
        let mut text_box = borderless("Hi", 40, 20);
        update(&mut text_box);
        assert!(text_box.base().image().count(Rgb::BLACK) > 0);
    }

    #[test]
    fn test_resize_refits() {
        let mut text_box = borderless("Hello", 256, 32);
        update(&mut text_box);
        let before = text_box.font_size();

        text_box.base_mut().resize_to(128, 16);
        assert!(text_box.base().is_dirty());
        update(&mut text_box);
        assert!(text_box.font_size() < before);
        assert_eq!(text_box.base().image().size(), (128, 16));
    }
}
