//! Single-line text input with optional password masking.
//!
//! Editing is append-only: printable characters go to the end of the
//! buffer and Backspace removes the last character.

use crate::animation::{smooth_toward, Blink};
use crate::canvas::{Canvas, FontSize};
use crate::event::{InputEvent, KeyCode};
use crate::geometry::{Point, Rect};
use crate::theme::Theme;

use super::Widget;

const FOCUS_RATE: f32 = 8.0;
const CURSOR_BLINK_SECS: f32 = 1.0;
const TEXT_PADDING: f32 = 12.0;
const MASK_CHAR: char = '*';

/// Symbolic keys a focused input box reports to its controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Enter,
    Tab,
}

#[derive(Debug, Clone)]
pub struct InputBox {
    rect: Rect,
    text: String,
    placeholder: String,
    password: bool,
    focused: bool,
    theme: Theme,
    cursor: Blink,
    focus_progress: f32,
}

impl InputBox {
    pub fn new(rect: Rect, placeholder: impl Into<String>) -> Self {
        Self {
            rect,
            text: String::new(),
            placeholder: placeholder.into(),
            password: false,
            focused: false,
            theme: Theme::default(),
            cursor: Blink::new(CURSOR_BLINK_SECS),
            focus_progress: 0.0,
        }
    }

    /// Mask the buffer when drawing (builder).
    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_focus(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        if focused && !self.focused {
            self.cursor.reset();
        }
        self.focused = focused;
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    /// The text as it appears on screen: one mask character per buffered
    /// character in password mode.
    pub fn display_text(&self) -> String {
        if self.password {
            std::iter::repeat(MASK_CHAR)
                .take(self.text.chars().count())
                .collect()
        } else {
            self.text.clone()
        }
    }
}

impl Widget for InputBox {
    type Outcome = Option<InputAction>;

    fn update(&mut self, dt: f32) {
        self.cursor.tick(dt);
        let target = if self.focused { 1.0 } else { 0.0 };
        self.focus_progress = smooth_toward(self.focus_progress, target, dt, FOCUS_RATE);
    }

    fn handle_event(&mut self, event: &InputEvent, _pointer: Point) -> Option<InputAction> {
        if let InputEvent::PointerDown { position, .. } = event {
            self.set_focused(self.rect.contains(*position));
            return None;
        }

        if !self.focused {
            return None;
        }

        let InputEvent::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Enter => return Some(InputAction::Enter),
            KeyCode::Tab => return Some(InputAction::Tab),
            KeyCode::Backspace => {
                self.text.pop();
            }
            _ => {
                if let Some(c) = key.printable() {
                    self.text.push(c);
                }
            }
        }
        None
    }

    fn draw(&self, canvas: &mut Canvas) {
        let border = self.theme.border.lerp(self.theme.primary, self.focus_progress);
        canvas.fill_rect(self.rect, self.theme.surface, 6.0);
        canvas.stroke_rect(self.rect, border, 2.0, 6.0);

        let display = self.display_text();
        let text_origin = Point::new(self.rect.x + TEXT_PADDING, self.rect.center_y());
        if display.is_empty() && !self.focused {
            canvas.text(
                &self.placeholder,
                text_origin,
                FontSize::Body,
                self.theme.text_secondary,
            );
        } else if !display.is_empty() {
            canvas.text(&display, text_origin, FontSize::Body, self.theme.text_primary);
        }

        if self.focused && self.cursor.visible() {
            let advance = display.chars().count() as f32 * FontSize::Body.char_width();
            let x = text_origin.x + advance;
            canvas.line(
                Point::new(x, self.rect.y + 8.0),
                Point::new(x, self.rect.bottom() - 8.0),
                self.theme.text_primary,
                2.0,
            );
        }
    }
}
