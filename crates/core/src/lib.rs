//! Shared kernel for the painel applications.
//!
//! Backend-neutral building blocks both apps drive from their screen
//! controllers:
//!
//! - [`error::CoreError`] and the [`hashing`] helpers.
//! - [`event::InputEvent`] and the display-list [`canvas::Canvas`] that sit
//!   between the apps and whatever backend renders them.
//! - The [`widgets`] set and the per-screen [`registry::WidgetRegistry`].
//! - Transient feedback: [`particles`] and [`status`] messages.

pub mod animation;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod hashing;
pub mod particles;
pub mod registry;
pub mod status;
pub mod theme;
pub mod types;
pub mod widgets;

pub use canvas::{Canvas, DrawCommand, FontSize, TextAlign};
pub use error::CoreError;
pub use event::{InputEvent, KeyCode, KeyInput, PointerButton, PointerTracker};
pub use geometry::{Point, Rect, Rgb, Size};
pub use registry::WidgetRegistry;
pub use theme::{ButtonStyle, Theme};
pub use widgets::{AnyWidget, Button, Dropdown, InputAction, InputBox, Slider, Widget, WidgetOutcome};
