//! Helpers for loading configuration values from the environment.

use crate::ConfigError;
use std::env;

/// Load a variable from the environment
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Parse a boolean flag. Accepts `true/false`, `1/0` and `yes/no`, ignoring
/// case and surrounding whitespace.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Load a variable from the environment. Absent variables are `Ok(None)`.
pub fn load_bool_opt(key: &str) -> Result<Option<bool>, ConfigError> {
    let Some(val) = load_string_opt(key) else {
        return Ok(None);
    };
    parse_bool(&val).map(Some).ok_or_else(|| ConfigError::parse_bool(key, val))
}
