//! crossterm event translation.

use crossterm::event as cte;
use painel_core::event::{InputEvent, KeyCode, KeyInput, PointerButton};

use crate::scale::CellScale;

pub(crate) fn map_key_code(code: cte::KeyCode) -> KeyCode {
    match code {
        cte::KeyCode::Enter => KeyCode::Enter,
        cte::KeyCode::Tab => KeyCode::Tab,
        cte::KeyCode::Backspace => KeyCode::Backspace,
        cte::KeyCode::Esc => KeyCode::Escape,
        cte::KeyCode::Char(c) => KeyCode::Char(c),
        _ => KeyCode::Other,
    }
}

fn map_mouse_button(button: cte::MouseButton) -> PointerButton {
    match button {
        cte::MouseButton::Left => PointerButton::Primary,
        cte::MouseButton::Right => PointerButton::Secondary,
        cte::MouseButton::Middle => PointerButton::Middle,
    }
}

/// Translate one terminal event. Key releases, scrolling, focus and paste
/// events have no counterpart and map to `None`; Ctrl+C is a quit request.
pub fn map_event(event: cte::Event, scale: &CellScale) -> Option<InputEvent> {
    match event {
        cte::Event::Key(key) => map_key_event(key),
        cte::Event::Mouse(mouse) => map_mouse_event(mouse, scale),
        _ => None,
    }
}

fn map_key_event(key: cte::KeyEvent) -> Option<InputEvent> {
    if key.kind == cte::KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(cte::KeyModifiers::CONTROL)
        && matches!(key.code, cte::KeyCode::Char('c' | 'C'))
    {
        return Some(InputEvent::Quit);
    }
    Some(InputEvent::Key(KeyInput::new(map_key_code(key.code))))
}

fn map_mouse_event(mouse: cte::MouseEvent, scale: &CellScale) -> Option<InputEvent> {
    let position = scale.to_logical(mouse.column, mouse.row);
    match mouse.kind {
        cte::MouseEventKind::Down(button) => Some(InputEvent::PointerDown {
            button: map_mouse_button(button),
            position,
        }),
        cte::MouseEventKind::Up(button) => Some(InputEvent::PointerUp {
            button: map_mouse_button(button),
            position,
        }),
        cte::MouseEventKind::Drag(_) | cte::MouseEventKind::Moved => {
            Some(InputEvent::PointerMove { position })
        }
        _ => None,
    }
}
