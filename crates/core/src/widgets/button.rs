//! Push button with press-and-release-inside click semantics.

use crate::animation::smooth_toward;
use crate::canvas::{Canvas, FontSize};
use crate::event::InputEvent;
use crate::geometry::{Point, Rect};
use crate::theme::{ButtonStyle, Theme};

use super::Widget;

const HOVER_RATE: f32 = 8.0;
const GLOW_SPEED: f32 = 50.0;
const GLOW_MAX: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Button {
    rect: Rect,
    label: String,
    style: ButtonStyle,
    theme: Theme,
    hovered: bool,
    /// Armed by a primary press inside the bounds.
    pressed: bool,
    hover_progress: f32,
    glow_radius: f32,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            rect,
            label: label.into(),
            style,
            theme: Theme::default(),
            hovered: false,
            pressed: false,
            hover_progress: 0.0,
            glow_radius: 0.0,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn hover_progress(&self) -> f32 {
        self.hover_progress
    }
}

impl Widget for Button {
    type Outcome = bool;

    fn update(&mut self, dt: f32) {
        let target = if self.hovered { 1.0 } else { 0.0 };
        self.hover_progress = smooth_toward(self.hover_progress, target, dt, HOVER_RATE);
        self.glow_radius = if self.hovered {
            (self.glow_radius + dt * GLOW_SPEED).min(GLOW_MAX)
        } else {
            (self.glow_radius - dt * GLOW_SPEED).max(0.0)
        };
    }

    /// Returns `true` exactly once: on the primary release that follows a
    /// primary press, with the pointer inside the bounds for both and for
    /// every event in between. Leaving the bounds while pressed disarms.
    fn handle_event(&mut self, event: &InputEvent, pointer: Point) -> bool {
        let position = event.position().unwrap_or(pointer);
        self.hovered = self.rect.contains(position);

        if self.pressed && !self.hovered {
            self.pressed = false;
        }

        if event.is_primary_down() && self.hovered {
            self.pressed = true;
        } else if event.is_primary_up() && self.pressed {
            self.pressed = false;
            return self.hovered;
        }
        false
    }

    fn draw(&self, canvas: &mut Canvas) {
        let colors = self.theme.button(self.style);

        if self.glow_radius > 0.0 {
            let glow = self.rect.inflate(self.glow_radius * 2.0, self.glow_radius * 2.0);
            canvas.fill_rect(glow, colors.background.lerp(self.theme.background, 0.8), 12.0);
        }

        let background = colors.background.lerp(colors.hover, self.hover_progress);
        canvas.fill_rect(self.rect, background, 8.0);
        canvas.stroke_rect(self.rect, self.theme.border, 2.0, 8.0);
        canvas.text_centered(&self.label, self.rect.center(), FontSize::Body, colors.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button() -> Button {
        Button::new(Rect::new(100.0, 100.0, 200.0, 50.0), "Login", ButtonStyle::Primary)
    }

    const INSIDE: Point = Point::new(150.0, 120.0);
    const OUTSIDE: Point = Point::new(10.0, 10.0);

    #[test]
    fn press_and_release_inside_clicks_once() {
        let mut b = button();
        assert!(!b.handle_event(&InputEvent::primary_down(INSIDE), INSIDE));
        assert!(b.handle_event(&InputEvent::primary_up(INSIDE), INSIDE));
        // A second release without a new press does nothing.
        assert!(!b.handle_event(&InputEvent::primary_up(INSIDE), INSIDE));
    }

    #[test]
    fn release_without_press_does_not_click() {
        let mut b = button();
        assert!(!b.handle_event(&InputEvent::primary_up(INSIDE), INSIDE));
    }

    #[test]
    fn press_outside_release_inside_does_not_click() {
        let mut b = button();
        b.handle_event(&InputEvent::primary_down(OUTSIDE), OUTSIDE);
        assert!(!b.handle_event(&InputEvent::primary_up(INSIDE), INSIDE));
    }

    #[test]
    fn drag_off_and_release_outside_does_not_click() {
        let mut b = button();
        b.handle_event(&InputEvent::primary_down(INSIDE), INSIDE);
        b.handle_event(&InputEvent::PointerMove { position: OUTSIDE }, OUTSIDE);
        assert!(!b.handle_event(&InputEvent::primary_up(OUTSIDE), OUTSIDE));
        assert!(!b.is_pressed());
    }

    #[test]
    fn drag_off_and_back_in_does_not_click() {
        let mut b = button();
        b.handle_event(&InputEvent::primary_down(INSIDE), INSIDE);
        b.handle_event(&InputEvent::PointerMove { position: OUTSIDE }, OUTSIDE);
        b.handle_event(&InputEvent::PointerMove { position: INSIDE }, INSIDE);
        assert!(!b.handle_event(&InputEvent::primary_up(INSIDE), INSIDE));
    }

    #[test]
    fn secondary_button_does_not_arm() {
        let mut b = button();
        b.handle_event(
            &InputEvent::PointerDown {
                button: crate::event::PointerButton::Secondary,
                position: INSIDE,
            },
            INSIDE,
        );
        assert!(!b.handle_event(&InputEvent::primary_up(INSIDE), INSIDE));
    }

    #[test]
    fn hover_animation_moves_towards_target() {
        let mut b = button();
        b.handle_event(&InputEvent::PointerMove { position: INSIDE }, INSIDE);
        b.update(0.05);
        assert!(b.hover_progress() > 0.0);
        let before = b.hover_progress();
        b.handle_event(&InputEvent::PointerMove { position: OUTSIDE }, OUTSIDE);
        b.update(0.05);
        assert!(b.hover_progress() < before);
    }

    #[test]
    fn draw_does_not_mutate() {
        let b = button();
        let mut canvas = Canvas::new();
        b.draw(&mut canvas);
        b.draw(&mut canvas);
        assert_eq!(canvas.texts().filter(|t| *t == "Login").count(), 2);
    }
}
