//! Transport and cookie hardening for non-debug deployments.

use serde::Serialize;

use crate::constants::{
    DEFAULT_HSTS_SECONDS, DEFAULT_SECURE_FLAG, ENV_CSRF_COOKIE_SECURE, ENV_SECURE_HSTS_SECONDS,
    ENV_SECURE_SSL_REDIRECT, ENV_SESSION_COOKIE_SECURE,
};
use crate::env::{flag, parse_int, var_or, EnvSource};
use crate::error::{SettingsError, SettingsResult};

/// Hardening flags. Only resolved when debug mode is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityConfig {
    /// HSTS max-age in seconds; zero or negative disables HSTS
    pub hsts_seconds: i64,
    pub ssl_redirect: bool,
    pub session_cookie_secure: bool,
    pub csrf_cookie_secure: bool,
}

impl SecurityConfig {
    /// Resolve each flag, falling back to the secure default.
    pub fn from_source(env: &impl EnvSource) -> SettingsResult<Self> {
        let raw_hsts = var_or(env, ENV_SECURE_HSTS_SECONDS, DEFAULT_HSTS_SECONDS);
        let hsts_seconds = parse_int(&raw_hsts).ok_or_else(|| {
            SettingsError::invalid_integer(ENV_SECURE_HSTS_SECONDS, raw_hsts.as_str())
        })?;

        Ok(Self {
            hsts_seconds,
            ssl_redirect: flag(env, ENV_SECURE_SSL_REDIRECT, DEFAULT_SECURE_FLAG),
            session_cookie_secure: flag(env, ENV_SESSION_COOKIE_SECURE, DEFAULT_SECURE_FLAG),
            csrf_cookie_secure: flag(env, ENV_CSRF_COOKIE_SECURE, DEFAULT_SECURE_FLAG),
        })
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            hsts_seconds: 31_536_000,
            ssl_redirect: true,
            session_cookie_secure: true,
            csrf_cookie_secure: true,
        }
    }
}
