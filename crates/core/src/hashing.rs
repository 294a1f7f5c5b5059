//! Shared SHA-256 hex digest utility.
//!
//! Both applications store passwords as the bare SHA-256 hex digest of the
//! UTF-8 password, so the on-disk formats stay readable by earlier releases.

use sha2::{Digest, Sha256};

/// Compute a SHA-256 hex digest of the given bytes.
pub fn sha256_hex(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{hash:x}")
}

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> String {
    sha256_hex(password.as_bytes())
}

/// Compare a plaintext password against a stored hex digest.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(stored_hash)
}

/// Validate that a password meets the minimum length.
///
/// Length is counted in characters, not bytes.
pub fn validate_password_length(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters"
        ));
    }
    Ok(())
}
