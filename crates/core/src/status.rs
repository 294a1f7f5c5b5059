//! Transient status line (toast / snackbar).

use crate::canvas::{Canvas, FontSize};
use crate::geometry::{Point, Rect, Rgb};
use crate::theme::Theme;

/// Seconds a message stays on screen.
pub const STATUS_DURATION: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
    Warning,
}

impl Tone {
    pub fn color(self, theme: &Theme) -> Rgb {
        match self {
            Self::Success => theme.success,
            Self::Error => theme.danger,
            Self::Info => theme.primary,
            Self::Warning => theme.warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
    remaining: f32,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            remaining: STATUS_DURATION,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn tick(&mut self, dt: f32) {
        self.remaining -= dt;
    }

    /// A banner of the message's tone, centred horizontally at `center_y`.
    pub fn draw(&self, canvas: &mut Canvas, theme: &Theme, screen_width: f32, center_y: f32) {
        let width = (self.text.chars().count() as f32 * FontSize::Body.char_width() + 40.0)
            .min(screen_width - 20.0);
        let rect = Rect::new((screen_width - width) / 2.0, center_y - 22.0, width, 44.0);
        canvas.fill_rect(rect, self.tone.color(theme), 8.0);
        canvas.text_centered(&self.text, rect.center(), FontSize::Body, theme.on_accent);
    }
}

/// Holds at most one message; a new message replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    current: Option<StatusMessage>,
}

impl StatusLine {
    pub fn show(&mut self, message: StatusMessage) {
        self.current = Some(message);
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(message) = &mut self.current {
            message.tick(dt);
            if message.is_expired() {
                self.current = None;
            }
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, theme: &Theme, screen_width: f32, center_y: f32) {
        if let Some(message) = &self.current {
            message.draw(canvas, theme, screen_width, center_y);
        }
    }
}
