//! Per-screen widget registry.
//!
//! Each screen key owns an ordered list of `(id, widget)` pairs. Screen
//! controllers register widgets once, then route every event, tick and draw
//! through the registry for the *active* screen only; widgets of inactive
//! screens are left untouched.

use std::collections::HashMap;
use std::hash::Hash;

use crate::canvas::Canvas;
use crate::event::InputEvent;
use crate::geometry::Point;
use crate::widgets::{AnyWidget, Button, Dropdown, InputBox, Slider, WidgetOutcome};

#[derive(Debug, Clone)]
pub struct WidgetRegistry<S, W> {
    screens: HashMap<S, Vec<(W, AnyWidget)>>,
}

impl<S, W> Default for WidgetRegistry<S, W> {
    fn default() -> Self {
        Self {
            screens: HashMap::new(),
        }
    }
}

impl<S, W> WidgetRegistry<S, W>
where
    S: Copy + Eq + Hash,
    W: Copy + Eq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `widget` to `screen`, replacing any widget already registered
    /// under the same id on that screen (keeping its position).
    pub fn register(&mut self, screen: S, id: W, widget: impl Into<AnyWidget>) {
        let widget = widget.into();
        let list = self.screens.entry(screen).or_default();
        match list.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = widget,
            None => list.push((id, widget)),
        }
    }

    pub fn remove_where(&mut self, screen: S, mut pred: impl FnMut(&W) -> bool) {
        if let Some(list) = self.screens.get_mut(&screen) {
            list.retain(|(id, _)| !pred(id));
        }
    }

    pub fn len(&self, screen: S) -> usize {
        self.screens.get(&screen).map_or(0, Vec::len)
    }

    pub fn ids(&self, screen: S) -> impl Iterator<Item = W> + '_ {
        self.screens
            .get(&screen)
            .into_iter()
            .flat_map(|list| list.iter().map(|(id, _)| *id))
    }

    /// Route one event to the screen's widgets and collect non-empty
    /// outcomes in registration order.
    ///
    /// While a dropdown is expanded it captures pointer events so widgets
    /// underneath its option list never see them.
    pub fn dispatch(&mut self, screen: S, event: &InputEvent, pointer: Point) -> Vec<(W, WidgetOutcome)> {
        let Some(list) = self.screens.get_mut(&screen) else {
            return Vec::new();
        };

        let capture = event
            .position()
            .and_then(|_| list.iter().position(|(_, w)| w.is_overlay()));

        let mut outcomes = Vec::new();
        for (index, (id, widget)) in list.iter_mut().enumerate() {
            if capture.is_some_and(|c| c != index) {
                continue;
            }
            if let Some(outcome) = widget.handle_event(event, pointer) {
                outcomes.push((*id, outcome));
            }
        }
        outcomes
    }

    pub fn update(&mut self, screen: S, dt: f32) {
        if let Some(list) = self.screens.get_mut(&screen) {
            for (_, widget) in list {
                widget.update(dt);
            }
        }
    }

    /// Draw the screen's widgets in order, expanded dropdowns last.
    pub fn draw(&self, screen: S, canvas: &mut Canvas) {
        let Some(list) = self.screens.get(&screen) else {
            return;
        };
        for (_, widget) in list.iter().filter(|(_, w)| !w.is_overlay()) {
            widget.draw(canvas);
        }
        for (_, widget) in list.iter().filter(|(_, w)| w.is_overlay()) {
            widget.draw(canvas);
        }
    }

    fn get(&self, screen: S, id: W) -> Option<&AnyWidget> {
        self.screens
            .get(&screen)?
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, w)| w)
    }

    fn get_mut(&mut self, screen: S, id: W) -> Option<&mut AnyWidget> {
        self.screens
            .get_mut(&screen)?
            .iter_mut()
            .find(|(existing, _)| *existing == id)
            .map(|(_, w)| w)
    }

    pub fn button(&self, screen: S, id: W) -> Option<&Button> {
        match self.get(screen, id)? {
            AnyWidget::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn button_mut(&mut self, screen: S, id: W) -> Option<&mut Button> {
        match self.get_mut(screen, id)? {
            AnyWidget::Button(b) => Some(b),
            _ => None,
        }
    }

    pub fn input(&self, screen: S, id: W) -> Option<&InputBox> {
        match self.get(screen, id)? {
            AnyWidget::Input(i) => Some(i),
            _ => None,
        }
    }

    pub fn input_mut(&mut self, screen: S, id: W) -> Option<&mut InputBox> {
        match self.get_mut(screen, id)? {
            AnyWidget::Input(i) => Some(i),
            _ => None,
        }
    }

    /// Text of an input box, or `""` when `id` is not an input on `screen`.
    pub fn input_text(&self, screen: S, id: W) -> &str {
        self.input(screen, id).map_or("", InputBox::text)
    }

    pub fn slider(&self, screen: S, id: W) -> Option<&Slider> {
        match self.get(screen, id)? {
            AnyWidget::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn slider_mut(&mut self, screen: S, id: W) -> Option<&mut Slider> {
        match self.get_mut(screen, id)? {
            AnyWidget::Slider(s) => Some(s),
            _ => None,
        }
    }

    pub fn dropdown(&self, screen: S, id: W) -> Option<&Dropdown> {
        match self.get(screen, id)? {
            AnyWidget::Dropdown(d) => Some(d),
            _ => None,
        }
    }

    pub fn dropdown_mut(&mut self, screen: S, id: W) -> Option<&mut Dropdown> {
        match self.get_mut(screen, id)? {
            AnyWidget::Dropdown(d) => Some(d),
            _ => None,
        }
    }

    /// Move keyboard focus to the next input box on `screen`, wrapping
    /// around. With nothing focused the first input box gains focus.
    pub fn focus_next(&mut self, screen: S) {
        let Some(list) = self.screens.get_mut(&screen) else {
            return;
        };
        let mut inputs: Vec<&mut InputBox> = list
            .iter_mut()
            .filter_map(|(_, w)| match w {
                AnyWidget::Input(i) => Some(i),
                _ => None,
            })
            .collect();
        if inputs.is_empty() {
            return;
        }
        let next = inputs
            .iter()
            .position(|i| i.is_focused())
            .map_or(0, |current| (current + 1) % inputs.len());
        for (index, input) in inputs.iter_mut().enumerate() {
            input.set_focused(index == next);
        }
    }

    /// Empty every input box and reset every dropdown on `screen`.
    pub fn clear_inputs(&mut self, screen: S) {
        if let Some(list) = self.screens.get_mut(&screen) {
            for (_, widget) in list {
                match widget {
                    AnyWidget::Input(i) => i.clear(),
                    AnyWidget::Dropdown(d) => d.clear(),
                    AnyWidget::Button(_) | AnyWidget::Slider(_) => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::geometry::Rect;
    use crate::theme::ButtonStyle;
    use crate::widgets::InputAction;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Screen {
        Login,
        Menu,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Id {
        User,
        Pass,
        Submit,
        Filter,
        Row,
    }

    fn login_registry() -> WidgetRegistry<Screen, Id> {
        let mut reg = WidgetRegistry::new();
        reg.register(Screen::Login, Id::User, InputBox::new(Rect::new(0.0, 0.0, 100.0, 30.0), "user"));
        reg.register(
            Screen::Login,
            Id::Pass,
            InputBox::new(Rect::new(0.0, 40.0, 100.0, 30.0), "pass").password(),
        );
        reg.register(
            Screen::Login,
            Id::Submit,
            Button::new(Rect::new(0.0, 80.0, 100.0, 30.0), "Login", ButtonStyle::Primary),
        );
        reg
    }

    #[test]
    fn dispatch_reports_click_for_active_screen_only() {
        let mut reg = login_registry();
        let at = Point::new(10.0, 90.0);
        reg.dispatch(Screen::Menu, &InputEvent::primary_down(at), at);
        assert!(reg.dispatch(Screen::Menu, &InputEvent::primary_up(at), at).is_empty());

        reg.dispatch(Screen::Login, &InputEvent::primary_down(at), at);
        let out = reg.dispatch(Screen::Login, &InputEvent::primary_up(at), at);
        assert_eq!(out, vec![(Id::Submit, WidgetOutcome::Clicked)]);
    }

    #[test]
    fn tab_cycles_focus_through_inputs() {
        let mut reg = login_registry();
        reg.focus_next(Screen::Login);
        assert!(reg.input(Screen::Login, Id::User).is_some_and(InputBox::is_focused));
        reg.focus_next(Screen::Login);
        assert!(reg.input(Screen::Login, Id::Pass).is_some_and(InputBox::is_focused));
        assert!(!reg.input(Screen::Login, Id::User).is_some_and(InputBox::is_focused));
        reg.focus_next(Screen::Login);
        assert!(reg.input(Screen::Login, Id::User).is_some_and(InputBox::is_focused));
    }

    #[test]
    fn keys_reach_focused_input() {
        let mut reg = login_registry();
        reg.focus_next(Screen::Login);
        let p = Point::default();
        reg.dispatch(Screen::Login, &InputEvent::key(KeyCode::Char('a')), p);
        let out = reg.dispatch(Screen::Login, &InputEvent::key(KeyCode::Enter), p);
        assert_eq!(reg.input_text(Screen::Login, Id::User), "a");
        assert_eq!(out, vec![(Id::User, WidgetOutcome::Input(InputAction::Enter))]);
        reg.clear_inputs(Screen::Login);
        assert_eq!(reg.input_text(Screen::Login, Id::User), "");
    }

    #[test]
    fn open_dropdown_captures_pointer_events() {
        let mut reg: WidgetRegistry<Screen, Id> = WidgetRegistry::new();
        reg.register(
            Screen::Menu,
            Id::Filter,
            Dropdown::new(Rect::new(0.0, 0.0, 100.0, 20.0), "Status", ["A", "B"]),
        );
        // Sits underneath the first option row.
        reg.register(
            Screen::Menu,
            Id::Row,
            Button::new(Rect::new(0.0, 20.0, 100.0, 20.0), "Ver", ButtonStyle::Secondary),
        );
        let header = Point::new(5.0, 5.0);
        reg.dispatch(Screen::Menu, &InputEvent::primary_down(header), header);
        reg.dispatch(Screen::Menu, &InputEvent::primary_up(header), header);
        assert!(reg.dropdown(Screen::Menu, Id::Filter).is_some_and(Dropdown::is_open));

        let option = Point::new(5.0, 25.0);
        reg.dispatch(Screen::Menu, &InputEvent::primary_down(option), option);
        let out = reg.dispatch(Screen::Menu, &InputEvent::primary_up(option), option);
        assert_eq!(out, vec![(Id::Filter, WidgetOutcome::Selected(0))]);
    }

    #[test]
    fn register_replaces_same_id_and_remove_where_drops() {
        let mut reg = login_registry();
        reg.register(
            Screen::Login,
            Id::Submit,
            Button::new(Rect::new(0.0, 0.0, 1.0, 1.0), "Entrar", ButtonStyle::Primary),
        );
        assert_eq!(reg.len(Screen::Login), 3);
        assert_eq!(reg.button(Screen::Login, Id::Submit).map(Button::label), Some("Entrar"));
        reg.remove_where(Screen::Login, |id| *id == Id::Submit);
        assert_eq!(reg.ids(Screen::Login).collect::<Vec<_>>(), vec![Id::User, Id::Pass]);
        assert!(reg.slider(Screen::Login, Id::User).is_none());
    }
}
