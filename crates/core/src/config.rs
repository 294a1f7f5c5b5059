//! Environment-variable helpers shared by the application configs.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::CoreError;

/// Read `key` through `lookup`, falling back to `default` when unset.
///
/// Set-but-unparsable values are a [`CoreError::Validation`] instead of a
/// silent fallback.
pub fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, CoreError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::Validation(format!("{key} must be valid ({e}): {raw:?}"))),
    }
}

/// Read a string variable, treating empty values as unset.
pub fn string_var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unset_uses_default() {
        assert_eq!(parse_var(&vars(&[]), "WIDTH", 1200u32).unwrap(), 1200);
    }

    #[test]
    fn set_value_is_parsed() {
        assert_eq!(parse_var(&vars(&[("WIDTH", " 640 ")]), "WIDTH", 1200u32).unwrap(), 640);
    }

    #[test]
    fn malformed_value_is_rejected() {
        let err = parse_var(&vars(&[("WIDTH", "wide")]), "WIDTH", 1200u32).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("WIDTH"));
    }

    #[test]
    fn empty_string_falls_back() {
        assert_eq!(string_var(&vars(&[("FILE", "  ")]), "FILE", "users.json"), "users.json");
        assert_eq!(string_var(&vars(&[("FILE", "a.json")]), "FILE", "users.json"), "a.json");
    }
}
