//! Slider Widgets: discrete and continuous value pickers.
//!
//! Both kinds are a track with a handle. Pressing the primary button over
//! the handle starts a drag that follows the pointer until release;
//! pressing elsewhere on the track jumps the handle there once.
//!
//! - [`Slider`] snaps to one of a fixed list of points. The track is cut
//!   into equal segments, one per point, and the handle fills a segment.
//! - [`ContinuousSlider`] maps the handle offset linearly onto a
//!   `start..=end` range, horizontally or vertically.

use super::base::WidgetBase;
use super::UpdateContext;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::input::MouseButton;
use crate::surface::Rgb;

/// Configuration shared by both slider kinds.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    /// Track fill.
    pub track_color: Rgb,
    /// Handle fill.
    pub handle_color: Rgb,
    /// Continuous sliders: the handle is `track / handle_ratio` long.
    pub handle_ratio: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_color: Rgb::new(100, 100, 100),
            handle_color: Rgb::new(100, 255, 0),
            handle_ratio: 12,
        }
    }
}

/// What a pointer update did to a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    /// Nothing to do.
    None,
    /// Follow the pointer.
    Follow,
}

/// Shared press/drag state machine.
///
/// While dragging, the handle follows the pointer. A press over the
/// handle (re)starts the drag, a press elsewhere on the track jumps once,
/// and releasing the button anywhere stops.
fn drag_step(dragging: &mut bool, down: bool, on_handle: bool, on_track: bool) -> Drag {
    let mut action = if *dragging { Drag::Follow } else { Drag::None };
    if down {
        if on_handle {
            *dragging = true;
        } else if on_track {
            action = Drag::Follow;
        }
    } else {
        *dragging = false;
    }
    action
}

fn paint(base: &mut WidgetBase, config: &SliderConfig, handle: Rect) {
    let image = base.image_mut();
    image.fill(config.track_color);
    image.fill_rect(handle, config.handle_color);
    base.clear_dirty();
}

/// A slider that snaps to a fixed list of values.
#[derive(Debug)]
pub struct Slider {
    base: WidgetBase,
    config: SliderConfig,
    points: Vec<f64>,
    segment: usize,
    dragging: bool,
}

impl Slider {
    /// Create a slider over `points`, starting at the first one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPoints`] if `points` is empty.
    pub fn new(rect: Rect, points: impl Into<Vec<f64>>) -> Result<Self> {
        Self::with_config(rect, points, SliderConfig::default())
    }

    /// Create a slider with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPoints`] if `points` is empty.
    pub fn with_config(rect: Rect, points: impl Into<Vec<f64>>, config: SliderConfig) -> Result<Self> {
        let points = points.into();
        if points.is_empty() {
            return Err(Error::EmptyPoints);
        }
        Ok(Self {
            base: WidgetBase::new(rect),
            config,
            points,
            segment: 0,
            dragging: false,
        })
    }

    pub(crate) const fn base(&self) -> &WidgetBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// The selectable values, in track order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Index of the selected point.
    pub const fn segment(&self) -> usize {
        self.segment
    }

    /// The selected value.
    pub fn value(&self) -> f64 {
        self.points[self.segment]
    }

    /// Check if the handle is being dragged.
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Select a point by index. Out-of-range indices select the last one.
    pub fn set_segment(&mut self, segment: usize) {
        let segment = segment.min(self.points.len() - 1);
        if segment != self.segment {
            self.segment = segment;
            self.base.mark_dirty();
        }
    }

    /// Track width of one point.
    #[allow(clippy::cast_precision_loss)]
    pub fn segment_length(&self) -> f64 {
        f64::from(self.base.rect().width) / self.points.len() as f64
    }

    /// The handle, relative to the slider's top-left corner.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn handle_rect(&self) -> Rect {
        let length = self.segment_length();
        Rect::new(
            (self.segment as f64 * length) as i32,
            0,
            (length as u32).max(1),
            self.base.rect().height,
        )
    }

    /// Snap to the segment under pointer x.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn snap_to(&mut self, x: i32) {
        let length = self.segment_length();
        if length <= 0.0 {
            return;
        }
        let local = f64::from(x.saturating_sub(self.base.rect().x));
        let segment = (local / length).floor().max(0.0) as usize;
        self.set_segment(segment);
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let rect = self.base.rect();
        let (x, y) = ctx.input.mouse_position();
        let on_handle = self.handle_rect().contains(x.saturating_sub(rect.x), y.saturating_sub(rect.y));
        let down = ctx.input.is_button_down(MouseButton::Left);

        if drag_step(&mut self.dragging, down, on_handle, rect.contains(x, y)) == Drag::Follow {
            self.snap_to(x);
        }

        if self.base.is_dirty() {
            let handle = self.handle_rect();
            paint(&mut self.base, &self.config, handle);
        }
    }
}

/// Track direction of a [`ContinuousSlider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left is `start`, right is `end`.
    #[default]
    Horizontal,
    /// Top is `start`, bottom is `end`.
    Vertical,
}

/// A slider over a continuous range.
#[derive(Debug)]
pub struct ContinuousSlider {
    base: WidgetBase,
    config: SliderConfig,
    orientation: Orientation,
    start: f64,
    end: f64,
    /// Handle offset along the track, in `0..=travel`.
    offset: u32,
    dragging: bool,
}

impl ContinuousSlider {
    /// Create a left-to-right slider from `start` to `end`.
    pub fn horizontal(rect: Rect, start: f64, end: f64) -> Self {
        Self::with_config(rect, Orientation::Horizontal, start, end, SliderConfig::default())
    }

    /// Create a top-to-bottom slider from `start` to `end`.
    pub fn vertical(rect: Rect, start: f64, end: f64) -> Self {
        Self::with_config(rect, Orientation::Vertical, start, end, SliderConfig::default())
    }

    /// Create a slider with custom configuration.
    pub fn with_config(
        rect: Rect,
        orientation: Orientation,
        start: f64,
        end: f64,
        config: SliderConfig,
    ) -> Self {
        Self {
            base: WidgetBase::new(rect),
            config,
            orientation,
            start,
            end,
            offset: 0,
            dragging: false,
        }
    }

    pub(crate) const fn base(&self) -> &WidgetBase {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Track direction.
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Value at the start of the track.
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Value at the end of the track.
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Check if the handle is being dragged.
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Length of the track along the slider's axis.
    pub const fn track_length(&self) -> u32 {
        let rect = self.base.rect();
        match self.orientation {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }

    /// Length of the handle along the slider's axis.
    pub fn handle_length(&self) -> u32 {
        (self.track_length() / self.config.handle_ratio.max(1)).min(self.track_length())
    }

    /// How far the handle can move.
    pub fn travel(&self) -> u32 {
        self.track_length() - self.handle_length()
    }

    /// Handle offset along the track.
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// The current value, always within `start..=end`.
    ///
    /// A track no longer than its handle has nowhere to travel and holds
    /// at `start`.
    pub fn value(&self) -> f64 {
        let travel = self.travel();
        if travel == 0 {
            return self.start;
        }
        let ratio = f64::from(self.offset.min(travel)) / f64::from(travel);
        self.start + ratio * (self.end - self.start)
    }

    /// Move the handle to the position of `value`, clamped to the range.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_value(&mut self, value: f64) {
        let span = self.end - self.start;
        let ratio = if span == 0.0 { 0.0 } else { ((value - self.start) / span).clamp(0.0, 1.0) };
        let offset = (ratio * f64::from(self.travel())).round() as u32;
        self.set_offset(offset);
    }

    fn set_offset(&mut self, offset: u32) {
        let offset = offset.min(self.travel());
        if offset != self.offset {
            self.offset = offset;
            self.base.mark_dirty();
        }
    }

    /// The handle, relative to the slider's top-left corner.
    #[allow(clippy::cast_possible_wrap)]
    pub fn handle_rect(&self) -> Rect {
        let rect = self.base.rect();
        let offset = self.offset.min(self.travel()) as i32;
        match self.orientation {
            Orientation::Horizontal => Rect::new(offset, 0, self.handle_length(), rect.height),
            Orientation::Vertical => Rect::new(0, offset, rect.width, self.handle_length()),
        }
    }

    /// Put the handle's leading edge under the pointer.
    #[allow(clippy::cast_sign_loss)]
    fn slide_to(&mut self, (x, y): (i32, i32)) {
        let rect = self.base.rect();
        let local = match self.orientation {
            Orientation::Horizontal => x.saturating_sub(rect.x),
            Orientation::Vertical => y.saturating_sub(rect.y),
        };
        self.set_offset(local.max(0) as u32);
    }

    pub(crate) fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let rect = self.base.rect();
        let (x, y) = ctx.input.mouse_position();
        let on_handle = self.handle_rect().contains(x.saturating_sub(rect.x), y.saturating_sub(rect.y));
        let down = ctx.input.is_button_down(MouseButton::Left);

        if drag_step(&mut self.dragging, down, on_handle, rect.contains(x, y)) == Drag::Follow {
            self.slide_to((x, y));
        }

        if self.base.is_dirty() {
            let handle = self.handle_rect();
            paint(&mut self.base, &self.config, handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputSnapshot};
    use crate::text::MonoMetrics;

    fn step<F>(update: F, input: &mut InputSnapshot, events: &[InputEvent])
    where
        F: FnOnce(&mut UpdateContext<'_>),
    {
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
        update(&mut ctx);
    }

    const fn down(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseDown { x, y, button: MouseButton::Left }
    }

    const fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::MouseUp { x, y, button: MouseButton::Left }
    }

    #[test]
    fn test_slider_rejects_empty_points() {
        let result = Slider::new(Rect::new(0, 0, 100, 10), Vec::new());
        assert!(matches!(result, Err(Error::EmptyPoints)));
    }

    #[test]
    fn test_slider_starts_at_first_point() {
        let slider = Slider::new(Rect::new(0, 0, 100, 10), [0.0, 10.0, 20.0, 30.0]).unwrap();
        assert_eq!(slider.segment(), 0);
        assert!((slider.value() - 0.0).abs() < f64::EPSILON);
        assert!((slider.segment_length() - 25.0).abs() < f64::EPSILON);
        assert_eq!(slider.handle_rect(), Rect::new(0, 0, 25, 10));
    }

    #[test]
    fn test_slider_drag_snaps_to_last_point() {
        let mut slider = Slider::new(Rect::new(0, 0, 100, 10), [0.0, 10.0, 20.0, 30.0]).unwrap();
        let mut input = InputSnapshot::new();

        step(|ctx| slider.update(ctx), &mut input, &[down(5, 5)]);
        assert!(slider.is_dragging());

        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: 90, y: 5 }]);
        assert_eq!(slider.segment(), 3);
        assert!((slider.value() - 30.0).abs() < f64::EPSILON);

        step(|ctx| slider.update(ctx), &mut input, &[up(90, 5)]);
        assert!(!slider.is_dragging());
        assert!((slider.value() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slider_drag_clamps_outside_track() {
        let mut slider = Slider::new(Rect::new(50, 0, 100, 10), [1.0, 2.0, 3.0]).unwrap();
        let mut input = InputSnapshot::new();

        step(|ctx| slider.update(ctx), &mut input, &[down(55, 5)]);
        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: 5000, y: -40 }]);
        assert_eq!(slider.segment(), 2);

        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: -5000, y: 400 }]);
        assert_eq!(slider.segment(), 0);
    }

    #[test]
    fn test_slider_track_click_jumps_without_drag() {
        let mut slider = Slider::new(Rect::new(0, 0, 100, 10), [0.0, 10.0, 20.0, 30.0]).unwrap();
        let mut input = InputSnapshot::new();

        step(|ctx| slider.update(ctx), &mut input, &[down(60, 5)]);
        assert_eq!(slider.segment(), 2);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_slider_paints_handle_and_clears_dirty() {
        let mut slider = Slider::new(Rect::new(0, 0, 100, 10), [0.0, 1.0]).unwrap();
        let mut input = InputSnapshot::new();
        step(|ctx| slider.update(ctx), &mut input, &[]);

        assert!(!slider.base().is_dirty());
        let image = slider.base().image();
        assert_eq!(image.get(10, 5), Some(Rgb::new(100, 255, 0)));
        assert_eq!(image.get(90, 5), Some(Rgb::new(100, 100, 100)));
    }

    #[test]
    fn test_continuous_slider_maps_offset_to_value() {
        let mut slider = ContinuousSlider::horizontal(Rect::new(0, 0, 120, 10), 0.0, 100.0);
        assert_eq!(slider.handle_length(), 10);
        let mut input = InputSnapshot::new();

        step(|ctx| slider.update(ctx), &mut input, &[down(2, 5)]);
        assert!(slider.is_dragging());
        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: 55, y: 5 }]);
        assert_eq!(slider.offset(), 55);
        assert!((slider.value() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_continuous_slider_clamps_to_range() {
        let mut slider = ContinuousSlider::horizontal(Rect::new(0, 0, 120, 10), -1.0, 1.0);
        let mut input = InputSnapshot::new();

        step(|ctx| slider.update(ctx), &mut input, &[down(0, 5)]);
        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: 9000, y: 5 }]);
        assert_eq!(slider.offset(), 110);
        assert!((slider.value() - 1.0).abs() < 1e-9);

        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: -9000, y: 5 }]);
        assert_eq!(slider.offset(), 0);
        assert!((slider.value() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_slider_follows_y() {
        let mut slider = ContinuousSlider::vertical(Rect::new(10, 0, 8, 240), 0.0, 1.0);
        assert_eq!(slider.handle_length(), 20);
        assert_eq!(slider.handle_rect(), Rect::new(0, 0, 8, 20));
        let mut input = InputSnapshot::new();

        step(|ctx| slider.update(ctx), &mut input, &[down(12, 110)]);
        assert_eq!(slider.offset(), 110);
        assert!((slider.value() - 0.5).abs() < 1e-9);
        assert_eq!(slider.handle_rect(), Rect::new(0, 110, 8, 20));
    }

    #[test]
    fn test_continuous_slider_degenerate_track_holds_start() {
        let slider = ContinuousSlider::horizontal(Rect::new(0, 0, 0, 10), 3.0, 9.0);
        assert_eq!(slider.travel(), 0);
        assert!((slider.value() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_continuous_slider_set_value() {
        let mut slider = ContinuousSlider::horizontal(Rect::new(0, 0, 120, 10), 0.0, 100.0);
        slider.set_value(25.0);
        assert_eq!(slider.offset(), 28);
        slider.set_value(1000.0);
        assert_eq!(slider.offset(), 110);
        assert!((slider.value() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_sliders_clamp_extreme_pointer_positions() {
        let mut slider = Slider::new(Rect::new(50, 0, 100, 10), [0.0, 10.0, 20.0, 30.0]).unwrap();
        let mut input = InputSnapshot::new();
        step(|ctx| slider.update(ctx), &mut input, &[down(55, 5)]);
        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: i32::MAX, y: i32::MIN }]);
        assert_eq!(slider.segment(), 3);
        step(|ctx| slider.update(ctx), &mut input, &[InputEvent::MouseMove { x: i32::MIN, y: i32::MAX }]);
        assert_eq!(slider.segment(), 0);

        let mut horizontal = ContinuousSlider::horizontal(Rect::new(-20, 0, 120, 10), 0.0, 100.0);
        let mut input = InputSnapshot::new();
        step(|ctx| horizontal.update(ctx), &mut input, &[down(-18, 5)]);
        step(|ctx| horizontal.update(ctx), &mut input, &[InputEvent::MouseMove { x: i32::MAX, y: 5 }]);
        assert_eq!(horizontal.offset(), 110);
        step(|ctx| horizontal.update(ctx), &mut input, &[InputEvent::MouseMove { x: i32::MIN, y: 5 }]);
        assert_eq!(horizontal.offset(), 0);
        assert!((horizontal.value() - 0.0).abs() < f64::EPSILON);

        let mut vertical = ContinuousSlider::vertical(Rect::new(0, 30, 8, 240), 0.0, 1.0);
        let mut input = InputSnapshot::new();
        step(|ctx| vertical.update(ctx), &mut input, &[down(2, 32)]);
        step(|ctx| vertical.update(ctx), &mut input, &[InputEvent::MouseMove { x: 2, y: i32::MIN }]);
        assert_eq!(vertical.offset(), 0);
        step(|ctx| vertical.update(ctx), &mut input, &[InputEvent::MouseMove { x: 2, y: i32::MAX }]);
        assert_eq!(vertical.offset(), 220);
        assert!((vertical.value() - 1.0).abs() < 1e-9);
    }
}
