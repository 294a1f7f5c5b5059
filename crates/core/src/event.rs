//! Backend-neutral input events.
//!
//! Backends translate their native events into [`InputEvent`]s; widgets and
//! screen controllers only ever see this model.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Enter,
    Tab,
    Backspace,
    Escape,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
}

impl KeyInput {
    pub const fn new(code: KeyCode) -> Self {
        Self { code }
    }

    /// The character this key would append to a text buffer, if any.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close / interrupt. Ends the run loop.
    Quit,
    PointerDown { button: PointerButton, position: Point },
    PointerUp { button: PointerButton, position: Point },
    PointerMove { position: Point },
    Key(KeyInput),
}

impl InputEvent {
    pub fn primary_down(position: Point) -> Self {
        Self::PointerDown {
            button: PointerButton::Primary,
            position,
        }
    }

    pub fn primary_up(position: Point) -> Self {
        Self::PointerUp {
            button: PointerButton::Primary,
            position,
        }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::Key(KeyInput::new(code))
    }

    pub fn is_primary_down(&self) -> bool {
        matches!(
            self,
            Self::PointerDown {
                button: PointerButton::Primary,
                ..
            }
        )
    }

    pub fn is_primary_up(&self) -> bool {
        matches!(
            self,
            Self::PointerUp {
                button: PointerButton::Primary,
                ..
            }
        )
    }

    /// The pointer position carried by the event, if it is a pointer event.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::PointerDown { position, .. }
            | Self::PointerUp { position, .. }
            | Self::PointerMove { position } => Some(*position),
            Self::Quit | Self::Key(_) => None,
        }
    }
}

/// Tracks the last known pointer position across a frame's events.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    position: Point,
}

impl PointerTracker {
    pub fn observe(&mut self, event: &InputEvent) -> Point {
        if let Some(position) = event.position() {
            self.position = position;
        }
        self.position
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_rejects_control_characters() {
        assert_eq!(KeyInput::new(KeyCode::Char('a')).printable(), Some('a'));
        assert_eq!(KeyInput::new(KeyCode::Char('ç')).printable(), Some('ç'));
        assert_eq!(KeyInput::new(KeyCode::Char('\u{7}')).printable(), None);
        assert_eq!(KeyInput::new(KeyCode::Enter).printable(), None);
    }

    #[test]
    fn tracker_keeps_last_pointer_position() {
        let mut tracker = PointerTracker::default();
        tracker.observe(&InputEvent::PointerMove {
            position: Point::new(5.0, 6.0),
        });
        let pos = tracker.observe(&InputEvent::key(KeyCode::Tab));
        assert_eq!(pos, Point::new(5.0, 6.0));
    }
}
