//! RPG character creator.
//!
//! Accounts live in a JSON file keyed by username; each owns one
//! [`character::Character`]. [`game::RpgGame`] drives the login, menu and
//! customization screens over the core widget set, independent of the
//! backend that displays them.

pub mod account;
pub mod character;
pub mod config;
pub mod game;
pub mod renderer;
pub mod screens;
pub mod store;

pub use account::AccountBook;
pub use config::RpgConfig;
pub use game::RpgGame;
pub use store::UserStore;
