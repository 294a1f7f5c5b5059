//! Terminal rendering backend.
//!
//! Gives the apps a window without a graphics stack: the logical pixel
//! space (e.g. 1200x800) is mapped onto the terminal's cell grid. Mouse
//! and keyboard input come back as [`painel_core::InputEvent`]s; a frame's
//! [`painel_core::Canvas`] is rasterised into coloured cells.

pub mod backend;
pub mod input;
pub mod raster;
pub mod scale;

pub use backend::TerminalBackend;
pub use scale::CellScale;
