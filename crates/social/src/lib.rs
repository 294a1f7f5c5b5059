//! Social program registration panel.
//!
//! Administrators log in, register applicants ("inscrições"), review and
//! change their status, and export PDF sheets and reports. Persistence is
//! SQLite through `painel_db`; [`app::SocialApp`] drives the views over the
//! core widget set.

pub mod app;
pub mod auth;
pub mod config;
pub mod currency;
mod draw;
pub mod error;
pub mod form;
pub mod pdf;
pub mod reports;
pub mod views;

pub use app::SocialApp;
pub use config::SocialConfig;
pub use error::{AppError, AppResult};
