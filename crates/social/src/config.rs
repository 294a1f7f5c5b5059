use std::path::PathBuf;

use painel_core::config::{parse_var, process_env, string_var};
use painel_core::error::CoreError;
use painel_core::geometry::Size;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://programa_social.db";
pub const DEFAULT_PDF_DIR: &str = "pdfs";

/// Social program panel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SocialConfig {
    pub database_url: String,
    /// Where generated reports are written; created on first export.
    pub pdf_dir: PathBuf,
    pub window: Size,
}

impl SocialConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `DATABASE_URL`         | `sqlite://programa_social.db` |
    /// | `SOCIAL_PDF_DIR`       | `pdfs`                        |
    /// | `SOCIAL_WINDOW_WIDTH`  | `1200`                        |
    /// | `SOCIAL_WINDOW_HEIGHT` | `800`                         |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let database_url = string_var(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL);
        let pdf_dir = string_var(&lookup, "SOCIAL_PDF_DIR", DEFAULT_PDF_DIR).into();
        let width = parse_var(&lookup, "SOCIAL_WINDOW_WIDTH", 1200)?;
        let height = parse_var(&lookup, "SOCIAL_WINDOW_HEIGHT", 800)?;

        Ok(Self {
            database_url,
            pdf_dir,
            window: Size::new(width, height),
        })
    }
}
