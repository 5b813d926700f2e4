//! Centralized error handling for the management commands.

use thiserror::Error;

/// Management command errors
#[derive(Error, Debug)]
pub enum ManageError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] settings::SettingsError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} check(s) reached the failure level")]
    ChecksFailed(usize),
}

impl ManageError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ManageError::ChecksFailed(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias
pub type ManageResult<T> = Result<T, ManageError>;
