//! Settings errors.
//!
//! Resolution accepts almost any input as-is. The variants here cover the
//! few values that must be numbers, and database settings that cannot be
//! turned into a connection URL.

use thiserror::Error;

/// Errors raised while resolving or interpreting settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable that must hold an integer held something else
    #[error("{var} must be an integer, got {value:?}")]
    InvalidInteger { var: &'static str, value: String },

    /// The database settings cannot be expressed as a connection URL
    #[error("Invalid database URL: {0}")]
    DatabaseUrl(String),
}

impl SettingsError {
    /// Create an invalid integer error
    pub fn invalid_integer(var: &'static str, value: impl Into<String>) -> Self {
        SettingsError::InvalidInteger {
            var,
            value: value.into(),
        }
    }

    /// Create a database URL error
    pub fn database_url(reason: impl Into<String>) -> Self {
        SettingsError::DatabaseUrl(reason.into())
    }
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
