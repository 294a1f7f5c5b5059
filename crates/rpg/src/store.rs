//! JSON file store for user accounts (`users_v2.json`).
//!
//! The file maps usernames to account records. Loading distinguishes a
//! missing file (`Ok(None)`) from unreadable, malformed or ill-typed
//! content, each reported as its own [`StoreError`] variant.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::character::{Attribute, Character, ATTRIBUTE_MAX, ATTRIBUTE_MIN, HAIR_STYLE_COUNT};

/// Username -> account record, ordered for stable file output.
pub type UserMap = BTreeMap<String, UserRecord>;

/// One stored account. Timestamps are local ISO-8601 without offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// SHA-256 hex digest of the password.
    pub password: String,
    #[serde(default)]
    pub character: Character,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Whole seconds spent logged in.
    #[serde(default)]
    pub total_playtime: u64,
}

impl UserRecord {
    pub fn new(password_hash: String, character: Character, created_at: NaiveDateTime) -> Self {
        Self {
            password: password_hash,
            character,
            created_at,
            last_login: None,
            achievements: Vec::new(),
            total_playtime: 0,
        }
    }

    /// Check value ranges serde cannot express.
    fn validate(&self, username: &str) -> Result<(), DecodeError> {
        let err = |field: &str, reason: String| DecodeError {
            field: format!("{username}.{field}"),
            reason,
        };

        let hash_ok = self.password.len() == 64 && self.password.chars().all(|c| c.is_ascii_hexdigit());
        if !hash_ok {
            return Err(err("password", "not a SHA-256 hex digest".into()));
        }

        let c = &self.character;
        for attribute in Attribute::ALL {
            let value = c.attribute(attribute);
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(err(
                    &format!("character.{}", attribute.label().to_lowercase()),
                    format!("{value} outside {ATTRIBUTE_MIN}..={ATTRIBUTE_MAX}"),
                ));
            }
        }
        if c.level < 1 {
            return Err(err("character.level", format!("{} is below 1", c.level)));
        }
        let non_negative = [
            ("experience", c.experience),
            ("health", c.health),
            ("mana", c.mana),
            ("skill_points", c.skill_points),
            ("gold", c.gold),
        ];
        for (name, value) in non_negative {
            if value < 0 {
                return Err(err(&format!("character.{name}"), format!("{value} is negative")));
            }
        }
        if c.hair_style >= HAIR_STYLE_COUNT {
            return Err(err(
                "character.hair_style",
                format!("{} is not a known style", c.hair_style),
            ));
        }
        Ok(())
    }
}

/// A field that parsed as JSON but has the wrong type or range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {reason}")]
pub struct DecodeError {
    pub field: String,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid user record: {0}")]
    Decode(#[from] DecodeError),
}

/// Decode and validate the whole user mapping from parsed JSON.
pub fn decode_users(value: serde_json::Value) -> Result<UserMap, DecodeError> {
    let serde_json::Value::Object(entries) = value else {
        return Err(DecodeError {
            field: "<root>".into(),
            reason: "expected an object keyed by username".into(),
        });
    };

    let mut users = UserMap::new();
    for (username, raw) in entries {
        let record: UserRecord = serde_json::from_value(raw).map_err(|e| DecodeError {
            field: username.clone(),
            reason: e.to_string(),
        })?;
        record.validate(&username)?;
        users.insert(username, record);
    }
    Ok(users)
}

#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the mapping. `Ok(None)` means no file has been written yet.
    pub fn load(&self) -> Result<Option<UserMap>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let value: serde_json::Value =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(decode_users(value)?))
    }

    /// Where [`set_aside`](Self::set_aside) moves a file that failed to load.
    pub fn set_aside_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".corrupt");
        self.path.with_file_name(name)
    }

    /// Rename the current file to [`set_aside_path`](Self::set_aside_path),
    /// replacing any earlier one, so the next save cannot overwrite it.
    pub fn set_aside(&self) -> Result<PathBuf, StoreError> {
        let target = self.set_aside_path();
        std::fs::rename(&self.path, &target).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(target)
    }

    /// Overwrite the file with `users` as indented JSON.
    pub fn save(&self, users: &UserMap) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(users).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), users = users.len(), "Saved user store");
        Ok(())
    }
}
