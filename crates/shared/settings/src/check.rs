//! Deployment checks over a resolved snapshot.
//!
//! Resolution never rejects a configuration. These checks report what a
//! production deployment should fix, without changing the snapshot.

use serde::Serialize;

use crate::constants::MIN_SECRET_KEY_LENGTH;
use crate::database::DatabaseConfig;
use crate::resolve::Settings;

/// Severity of a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    Warning,
    Error,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckLevel::Warning => write!(f, "WARNING"),
            CheckLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// One finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessage {
    pub id: &'static str,
    pub level: CheckLevel,
    pub message: String,
}

impl CheckMessage {
    fn warning(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            level: CheckLevel::Warning,
            message: message.into(),
        }
    }

    fn error(id: &'static str, message: impl Into<String>) -> Self {
        Self {
            id,
            level: CheckLevel::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.level, self.id, self.message)
    }
}

/// Run every check: security hardening and database completeness.
pub fn run(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = security(settings);
    messages.extend(database(&settings.database));
    messages
}

/// Secret key, debug mode, host allow-list and hardening flags.
pub fn security(settings: &Settings) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    if settings.uses_default_secret_key() {
        let text = "SECRET_KEY is the insecure development placeholder";
        messages.push(if settings.debug {
            CheckMessage::warning("security.W001", text)
        } else {
            CheckMessage::error("security.W001", text)
        });
    } else if settings.secret_key().trim().chars().count() < MIN_SECRET_KEY_LENGTH {
        messages.push(CheckMessage::warning(
            "security.W002",
            format!(
                "SECRET_KEY is shorter than {} characters or blank",
                MIN_SECRET_KEY_LENGTH
            ),
        ));
    }

    if settings.debug {
        messages.push(CheckMessage::warning(
            "security.W003",
            "DEBUG is enabled; disable it in deployment",
        ));
    }

    if let Some(security) = &settings.security {
        if settings.allowed_hosts.is_empty() {
            messages.push(CheckMessage::error(
                "security.W004",
                "ALLOWED_HOSTS is empty while DEBUG is off",
            ));
        }
        if security.hsts_seconds <= 0 {
            messages.push(CheckMessage::warning(
                "security.W005",
                format!(
                    "SECURE_HSTS_SECONDS is {}; HSTS is disabled",
                    security.hsts_seconds
                ),
            ));
        }
        if !security.ssl_redirect {
            messages.push(CheckMessage::warning(
                "security.W006",
                "SECURE_SSL_REDIRECT is off",
            ));
        }
        if !security.session_cookie_secure {
            messages.push(CheckMessage::warning(
                "security.W007",
                "SESSION_COOKIE_SECURE is off",
            ));
        }
        if !security.csrf_cookie_secure {
            messages.push(CheckMessage::warning(
                "security.W008",
                "CSRF_COOKIE_SECURE is off",
            ));
        }
    }

    messages
}

/// Missing Postgres credentials and unusable ports.
pub fn database(database: &DatabaseConfig) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    let missing = database.missing_credentials();
    if !missing.is_empty() {
        messages.push(CheckMessage::warning(
            "database.E001",
            format!("DB_NAME is set but {} unset", missing.join(", ")),
        ));
    }

    if let Err(e) = database.port_number() {
        messages.push(CheckMessage::error("database.E002", e.to_string()));
    }

    messages
}

/// Whether any message is at or above `level`
pub fn reaches(messages: &[CheckMessage], level: CheckLevel) -> bool {
    messages.iter().any(|m| m.level >= level)
}
