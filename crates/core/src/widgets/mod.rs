//! Stateful interactive widgets.
//!
//! Every widget follows the same three-call contract driven by a screen
//! controller once per frame:
//!
//! - `update(dt)` advances purely cosmetic animation state,
//! - `handle_event(event, pointer)` mutates input state and reports a
//!   discrete outcome,
//! - `draw(canvas)` records draw commands and never mutates state.

pub mod button;
pub mod dropdown;
pub mod input_box;
pub mod slider;

pub use button::Button;
pub use dropdown::Dropdown;
pub use input_box::{InputAction, InputBox};
pub use slider::Slider;

use crate::canvas::Canvas;
use crate::event::InputEvent;
use crate::geometry::Point;

/// Common widget contract.
pub trait Widget {
    /// What `handle_event` reports back to the controller.
    type Outcome;

    fn update(&mut self, dt: f32);

    fn handle_event(&mut self, event: &InputEvent, pointer: Point) -> Self::Outcome;

    fn draw(&self, canvas: &mut Canvas);
}

/// A discrete, controller-visible widget outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// A button saw press and release inside its bounds.
    Clicked,
    /// A focused input box saw Enter or Tab.
    Input(InputAction),
    /// A slider drag ended; carries the final value.
    SliderReleased(i32),
    /// A dropdown selection changed to the given option index.
    Selected(usize),
}

/// Type-erased widget stored in a [`WidgetRegistry`](crate::registry::WidgetRegistry).
#[derive(Debug, Clone)]
pub enum AnyWidget {
    Button(Button),
    Input(InputBox),
    Slider(Slider),
    Dropdown(Dropdown),
}

impl AnyWidget {
    pub fn update(&mut self, dt: f32) {
        match self {
            Self::Button(w) => w.update(dt),
            Self::Input(w) => w.update(dt),
            Self::Slider(w) => w.update(dt),
            Self::Dropdown(w) => w.update(dt),
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, pointer: Point) -> Option<WidgetOutcome> {
        match self {
            Self::Button(w) => w.handle_event(event, pointer).then_some(WidgetOutcome::Clicked),
            Self::Input(w) => w.handle_event(event, pointer).map(WidgetOutcome::Input),
            Self::Slider(w) => w
                .handle_event(event, pointer)
                .then(|| WidgetOutcome::SliderReleased(w.value())),
            Self::Dropdown(w) => w.handle_event(event, pointer).map(WidgetOutcome::Selected),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Self::Button(w) => w.draw(canvas),
            Self::Input(w) => w.draw(canvas),
            Self::Slider(w) => w.draw(canvas),
            Self::Dropdown(w) => w.draw(canvas),
        }
    }

    /// An expanded dropdown captures pointer input and draws on top.
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Dropdown(d) if d.is_open())
    }
}

impl From<Button> for AnyWidget {
    fn from(w: Button) -> Self {
        Self::Button(w)
    }
}

impl From<InputBox> for AnyWidget {
    fn from(w: InputBox) -> Self {
        Self::Input(w)
    }
}

impl From<Slider> for AnyWidget {
    fn from(w: Slider) -> Self {
        Self::Slider(w)
    }
}

impl From<Dropdown> for AnyWidget {
    fn from(w: Dropdown) -> Self {
        Self::Dropdown(w)
    }
}
