//! Display-list canvas.
//!
//! `draw` methods record [`DrawCommand`]s here instead of touching pixels.
//! A backend replays the list once per frame; tests inspect it directly.

use crate::geometry::{Point, Rect, Rgb};

/// Relative text size. Backends map these to concrete fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Title,
    Header,
    Body,
    Small,
}

impl FontSize {
    /// Nominal glyph height in logical pixels.
    pub fn pixels(self) -> f32 {
        match self {
            Self::Title => 48.0,
            Self::Header => 36.0,
            Self::Body => 24.0,
            Self::Small => 18.0,
        }
    }

    /// Approximate advance width of one character, used for cursor and
    /// centring maths without a real font.
    pub fn char_width(self) -> f32 {
        self.pixels() * 0.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// `position` is the left edge of the text, vertically centred.
    Left,
    /// `position` is the centre of the text.
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgb,
        radius: f32,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb,
        width: f32,
        radius: f32,
    },
    Ellipse {
        rect: Rect,
        color: Rgb,
    },
    Circle {
        center: Point,
        radius: f32,
        color: Rgb,
        /// `None` fills the circle.
        stroke: Option<f32>,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f32,
    },
    Text {
        text: String,
        position: Point,
        size: FontSize,
        color: Rgb,
        align: TextAlign,
    },
}

/// Recorded frame contents plus the background clear colour.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    commands: Vec<DrawCommand>,
    clear: Option<Rgb>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame cleared to `color`.
    pub fn clear(&mut self, color: Rgb) {
        self.commands.clear();
        self.clear = Some(color);
    }

    pub fn clear_color(&self) -> Option<Rgb> {
        self.clear
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb, radius: f32) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            color,
            radius,
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb, width: f32, radius: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            color,
            width,
            radius,
        });
    }

    pub fn ellipse(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Ellipse { rect, color });
    }

    pub fn circle(&mut self, center: Point, radius: f32, color: Rgb) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke: None,
        });
    }

    pub fn circle_outline(&mut self, center: Point, radius: f32, color: Rgb, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke: Some(width),
        });
    }

    pub fn line(&mut self, from: Point, to: Point, color: Rgb, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    pub fn text(&mut self, text: impl Into<String>, position: Point, size: FontSize, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position,
            size,
            color,
            align: TextAlign::Left,
        });
    }

    pub fn text_centered(
        &mut self,
        text: impl Into<String>,
        center: Point,
        size: FontSize,
        color: Rgb,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position: center,
            size,
            color,
            align: TextAlign::Center,
        });
    }

    /// All text strings drawn so far, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }
}
