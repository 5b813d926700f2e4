//! Environment sources and the parsing rules applied to their values.

use std::collections::HashMap;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to a set of environment variables.
///
/// The resolver only ever reads through this trait, so the process
/// environment can be swapped for a map in tests or when embedding.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EnvSource {
    /// Value of `key`, or `None` when it is not set
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non UTF-8 values are treated as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Value of `key`, falling back to `default` only when unset.
///
/// An explicitly empty value is returned as-is.
pub fn var_or(env: &impl EnvSource, key: &str, default: &str) -> String {
    env.var(key).unwrap_or_else(|| default.to_string())
}

/// Case-insensitive comparison with `"true"`; everything else is false.
///
/// Surrounding whitespace is not trimmed, so `" true"` is false.
pub fn parse_bool(raw: &str) -> bool {
    raw.to_lowercase() == "true"
}

/// Split a comma-separated value, trimming pieces and dropping empty ones.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a decimal integer the way the settings files are written.
///
/// Surrounding whitespace, a leading sign and single `_` separators between
/// digits are accepted (`" 31_536_000 "`, `"-1"`).
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    trimmed.replace('_', "").parse().ok()
}

/// Boolean flag `key`, with `default` parsed by the same rule when unset.
pub fn flag(env: &impl EnvSource, key: &str, default: &str) -> bool {
    parse_bool(&var_or(env, key, default))
}

/// List value `key`, with `default` parsed by the same rule when unset.
pub fn list(env: &impl EnvSource, key: &str, default: &str) -> Vec<String> {
    parse_list(&var_or(env, key, default))
}
