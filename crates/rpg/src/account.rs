//! Account registration and login over the JSON user store.

use chrono::{Local, NaiveDateTime};
use painel_core::error::CoreError;
use painel_core::hashing::{hash_password, validate_password_length, verify_password};

use crate::character::Character;
use crate::store::{StoreError, UserMap, UserRecord, UserStore};

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const MSG_CREDENTIALS_REQUIRED: &str = "Username and password required";
pub const MSG_USERNAME_TAKEN: &str = "Username already exists";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_USERNAME_NOT_FOUND: &str = "Username not found";
pub const MSG_INCORRECT_PASSWORD: &str = "Incorrect password";
pub const MSG_ACCOUNT_CREATED: &str = "Account created successfully!";
pub const MSG_LOGIN_OK: &str = "Login successful!";

/// In-memory accounts backed by a [`UserStore`].
///
/// Every mutation is written through immediately. A failed write is logged
/// and the in-memory state is kept.
#[derive(Debug)]
pub struct AccountBook {
    users: UserMap,
    store: UserStore,
}

impl AccountBook {
    /// Load accounts from `store`. Unreadable or invalid files are logged
    /// and replaced by an empty book; invalid ones are first renamed to
    /// `<file>.corrupt` so a later save does not destroy them.
    pub fn open(store: UserStore) -> Self {
        let users = match store.load() {
            Ok(Some(users)) => {
                tracing::info!(path = %store.path().display(), users = users.len(), "Loaded user store");
                users
            }
            Ok(None) => {
                tracing::info!(path = %store.path().display(), "No user store yet, starting empty");
                UserMap::new()
            }
            Err(e @ (StoreError::Parse { .. } | StoreError::Decode(_))) => {
                tracing::error!(error = %e, "User store is invalid, starting empty");
                match store.set_aside() {
                    Ok(moved) => tracing::warn!(to = %moved.display(), "Moved invalid user store aside"),
                    Err(e) => tracing::error!(error = %e, "Could not move invalid user store aside"),
                }
                UserMap::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not read user store, starting empty");
                UserMap::new()
            }
        };
        Self { users, store }
    }

    pub fn with_users(store: UserStore, users: UserMap) -> Self {
        Self { users, store }
    }

    pub fn users(&self) -> &UserMap {
        &self.users
    }

    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    /// Create an account owning a default character named after the user.
    ///
    /// Checks run in order: confirmation mismatch, empty fields, existing
    /// username, short password. Nothing is mutated on failure.
    pub fn register(&mut self, username: &str, password: &str, confirm: &str) -> Result<(), CoreError> {
        if password != confirm {
            return Err(CoreError::Validation(MSG_PASSWORD_MISMATCH.into()));
        }
        if username.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(MSG_CREDENTIALS_REQUIRED.into()));
        }
        if self.users.contains_key(username) {
            return Err(CoreError::Conflict(MSG_USERNAME_TAKEN.into()));
        }
        validate_password_length(password, MIN_PASSWORD_LENGTH).map_err(CoreError::Validation)?;

        let record = UserRecord::new(hash_password(password), Character::named(username), now());
        self.users.insert(username.to_string(), record);
        tracing::info!(username, "Registered account");
        self.persist();
        Ok(())
    }

    /// Verify credentials, stamp `last_login` and return the owned character.
    ///
    /// Failed attempts leave the record untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<Character, CoreError> {
        if username.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(MSG_CREDENTIALS_REQUIRED.into()));
        }
        let record = self
            .users
            .get_mut(username)
            .ok_or_else(|| CoreError::Unauthorized(MSG_USERNAME_NOT_FOUND.into()))?;
        if !verify_password(password, &record.password) {
            tracing::info!(username, "Rejected login with incorrect password");
            return Err(CoreError::Unauthorized(MSG_INCORRECT_PASSWORD.into()));
        }

        let stamp = now();
        record.last_login = Some(match record.last_login {
            Some(previous) if previous > stamp => previous,
            _ => stamp,
        });
        let character = record.character.clone();
        tracing::info!(username, "Logged in");
        self.persist();
        Ok(character)
    }

    /// The character owned by `username`, as last saved.
    pub fn character(&self, username: &str) -> Option<&Character> {
        self.users.get(username).map(|r| &r.character)
    }

    /// Replace the stored character and persist.
    pub fn save_character(&mut self, username: &str, character: &Character) -> Result<(), CoreError> {
        let record = self.users.get_mut(username).ok_or_else(|| {
            CoreError::Internal(format!("no account for logged-in user {username}"))
        })?;
        record.character = character.clone();
        self.persist();
        Ok(())
    }

    /// Add whole seconds of play to the account and persist.
    pub fn add_playtime(&mut self, username: &str, seconds: u64) {
        if seconds == 0 {
            return;
        }
        if let Some(record) = self.users.get_mut(username) {
            record.total_playtime = record.total_playtime.saturating_add(seconds);
            self.persist();
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.users) {
            tracing::error!(error = %e, "Failed to save user store");
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
