//! Horizontal integer slider.

use std::ops::RangeInclusive;

use crate::animation::smooth_toward;
use crate::canvas::{Canvas, FontSize};
use crate::event::InputEvent;
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

use super::Widget;

const TRACK_HEIGHT: f32 = 24.0;
const THUMB_RADIUS: f32 = 12.0;
const DRAG_RATE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Slider {
    rect: Rect,
    min: i32,
    max: i32,
    value: i32,
    step: i32,
    label: Option<String>,
    theme: Theme,
    dragging: bool,
    drag_progress: f32,
}

impl Slider {
    /// A slider whose track starts at `(x, y)` and spans `width` pixels.
    ///
    /// `initial` is clamped into `range`; an inverted range is normalised.
    pub fn new(x: f32, y: f32, width: f32, range: RangeInclusive<i32>, initial: i32) -> Self {
        let (min, max) = if range.start() <= range.end() {
            (*range.start(), *range.end())
        } else {
            (*range.end(), *range.start())
        };
        Self {
            rect: Rect::new(x, y, width.max(1.0), TRACK_HEIGHT),
            min,
            max,
            value: initial.clamp(min, max),
            step: 1,
            label: None,
            theme: Theme::default(),
            dragging: false,
            drag_progress: 0.0,
        }
    }

    /// Snap values to multiples of `step` (builder). Non-positive steps
    /// fall back to 1.
    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Horizontal pixel position of the thumb centre for the current value.
    pub fn thumb_x(&self) -> f32 {
        let span = (self.max - self.min) as f32;
        if span == 0.0 {
            return self.rect.x;
        }
        self.rect.x + (self.value - self.min) as f32 / span * self.rect.width
    }

    fn thumb_rect(&self) -> Rect {
        Rect::new(
            self.thumb_x() - THUMB_RADIUS,
            self.rect.center_y() - THUMB_RADIUS,
            THUMB_RADIUS * 2.0,
            THUMB_RADIUS * 2.0,
        )
    }

    /// Value under a pointer at horizontal position `x`: snapped to the
    /// step grid first, then clamped so both ends stay reachable.
    pub fn value_at(&self, x: f32) -> i32 {
        let relative = (x - self.rect.x).clamp(0.0, self.rect.width);
        let fraction = relative / self.rect.width;
        let raw = self.min as f64 + fraction as f64 * (self.max - self.min) as f64;
        let snapped = (raw / self.step as f64).round_ties_even() as i64 * self.step as i64;
        snapped.clamp(self.min as i64, self.max as i64) as i32
    }
}

impl Widget for Slider {
    type Outcome = bool;

    fn update(&mut self, dt: f32) {
        let target = if self.dragging { 1.0 } else { 0.0 };
        self.drag_progress = smooth_toward(self.drag_progress, target, dt, DRAG_RATE);
    }

    /// Returns `true` once, on the primary release that ends a drag.
    fn handle_event(&mut self, event: &InputEvent, pointer: Point) -> bool {
        let position = event.position().unwrap_or(pointer);
        match event {
            e if e.is_primary_down() => {
                if self.thumb_rect().contains(position) || self.rect.contains(position) {
                    self.dragging = true;
                    self.value = self.value_at(position.x);
                }
            }
            e if e.is_primary_up() => {
                if self.dragging {
                    self.dragging = false;
                    return true;
                }
            }
            InputEvent::PointerMove { .. } if self.dragging => {
                self.value = self.value_at(position.x);
            }
            _ => {}
        }
        false
    }

    fn draw(&self, canvas: &mut Canvas) {
        let center_y = self.rect.center_y();
        let track = Rect::new(self.rect.x, center_y - 3.0, self.rect.width, 6.0);
        canvas.fill_rect(track, self.theme.border, 3.0);

        let thumb_x = self.thumb_x();
        let filled = Rect::new(self.rect.x, center_y - 3.0, thumb_x - self.rect.x, 6.0);
        canvas.fill_rect(filled, self.theme.primary, 3.0);

        let thumb_color = self.theme.primary.lerp(self.theme.accent, self.drag_progress);
        let thumb_center = Point::new(thumb_x, center_y);
        canvas.circle(thumb_center, THUMB_RADIUS, thumb_color);
        canvas.circle_outline(thumb_center, THUMB_RADIUS, self.theme.text_primary, 2.0);

        if let Some(label) = &self.label {
            canvas.text(
                format!("{label}: {}", self.value),
                Point::new(self.rect.x, self.rect.y - 13.0),
                FontSize::Body,
                self.theme.text_primary,
            );
        }
    }
}
