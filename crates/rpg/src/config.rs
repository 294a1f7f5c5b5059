use std::path::PathBuf;

use painel_core::config::{parse_var, process_env, string_var};
use painel_core::error::CoreError;
use painel_core::geometry::Size;

pub const DEFAULT_USERS_FILE: &str = "users_v2.json";
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Character creator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RpgConfig {
    /// JSON user store location.
    pub users_file: PathBuf,
    /// Logical window size; the terminal grid is scaled onto it.
    pub window: Size,
    pub target_fps: u32,
}

impl RpgConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default         |
    /// |---------------------|-----------------|
    /// | `RPG_USERS_FILE`    | `users_v2.json` |
    /// | `RPG_WINDOW_WIDTH`  | `1200`          |
    /// | `RPG_WINDOW_HEIGHT` | `800`           |
    /// | `RPG_TARGET_FPS`    | `60`            |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let users_file = string_var(&lookup, "RPG_USERS_FILE", DEFAULT_USERS_FILE).into();
        let width = parse_var(&lookup, "RPG_WINDOW_WIDTH", DEFAULT_WIDTH)?;
        let height = parse_var(&lookup, "RPG_WINDOW_HEIGHT", DEFAULT_HEIGHT)?;
        let target_fps: u32 = parse_var(&lookup, "RPG_TARGET_FPS", DEFAULT_TARGET_FPS)?;
        if target_fps == 0 {
            return Err(CoreError::Validation("RPG_TARGET_FPS must be positive".into()));
        }

        Ok(Self {
            users_file,
            window: Size::new(width, height),
            target_fps,
        })
    }

    pub fn frame_budget(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.target_fps))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = RpgConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.users_file, PathBuf::from("users_v2.json"));
        assert_eq!(config.window, Size::new(1200, 800));
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn overrides_are_applied() {
        let config = RpgConfig::from_lookup(|key| match key {
            "RPG_USERS_FILE" => Some("/tmp/u.json".into()),
            "RPG_TARGET_FPS" => Some("30".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.users_file, PathBuf::from("/tmp/u.json"));
        assert_eq!(config.target_fps, 30);
    }

    #[test]
    fn bad_numbers_are_errors() {
        let err = RpgConfig::from_lookup(|key| (key == "RPG_WINDOW_WIDTH").then(|| "big".into())).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
        let err = RpgConfig::from_lookup(|key| (key == "RPG_TARGET_FPS").then(|| "0".into())).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }
}
