//! The settings snapshot and its resolution from the environment.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{
    DEFAULT_ALLOWED_HOSTS, DEFAULT_AUTH_USER_MODEL, DEFAULT_CSRF_TRUSTED_ORIGINS, DEFAULT_DEBUG,
    DEFAULT_SECRET_KEY, ENV_ALLOWED_HOSTS, ENV_AUTH_USER_MODEL, ENV_CSRF_TRUSTED_ORIGINS,
    ENV_DEBUG, ENV_SECRET_KEY, MEDIA_ROOT_DIR, MEDIA_URL, STATICFILES_DIR, STATIC_ROOT_DIR,
    STATIC_URL,
};
use crate::database::DatabaseConfig;
use crate::env::{flag, list, var_or, EnvSource, ProcessEnv};
use crate::error::SettingsResult;
use crate::framework::FrameworkConfig;
use crate::logging::LoggingConfig;
use crate::security::SecurityConfig;

/// Project root used when no base directory is given.
///
/// This is the workspace the crate was built in. A binary moved off the
/// build machine falls back to the current working directory instead.
pub fn default_base_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace = manifest_dir
        .ancestors()
        .nth(3)
        .unwrap_or(manifest_dir)
        .to_path_buf();
    existing_or_current(workspace)
}

fn existing_or_current(candidate: PathBuf) -> PathBuf {
    if candidate.is_dir() {
        return candidate;
    }
    match std::env::current_dir() {
        Ok(cwd) => {
            tracing::debug!(
                missing = %candidate.display(),
                "Build directory not found, using current directory"
            );
            cwd
        }
        Err(_) => candidate,
    }
}

/// Fully resolved settings, built once at startup and never mutated.
///
/// Share it by reference or `Arc`; nothing in this crate keeps a global copy.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub base_dir: PathBuf,
    pub debug: bool,
    #[serde(skip_serializing)]
    secret_key: String,
    pub allowed_hosts: BTreeSet<String>,
    pub database: DatabaseConfig,
    /// Kept in the configured order
    pub csrf_trusted_origins: Vec<String>,
    pub static_url: String,
    pub static_root: PathBuf,
    pub staticfiles_dirs: Vec<PathBuf>,
    pub media_url: String,
    pub media_root: PathBuf,
    pub auth_user_model: String,
    /// Only present when `debug` is off
    pub security: Option<SecurityConfig>,
    pub framework: FrameworkConfig,
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_dir", &self.base_dir)
            .field("debug", &self.debug)
            .field("secret_key", &"[REDACTED]")
            .field("allowed_hosts", &self.allowed_hosts)
            .field("database", &self.database)
            .field("csrf_trusted_origins", &self.csrf_trusted_origins)
            .field("static_root", &self.static_root)
            .field("media_root", &self.media_root)
            .field("auth_user_model", &self.auth_user_model)
            .field("security", &self.security)
            .finish_non_exhaustive()
    }
}

impl Settings {
    /// Load `.env` if present, then resolve from the process environment.
    pub fn from_env() -> SettingsResult<Self> {
        Self::from_env_in(&default_base_dir())
    }

    /// Same as [`Settings::from_env`], with paths rooted at `base_dir`.
    pub fn from_env_in(base_dir: &Path) -> SettingsResult<Self> {
        dotenvy::dotenv().ok();
        Self::resolve(&ProcessEnv, base_dir)
    }

    /// Resolve settings from `env`, rooting all paths at `base_dir`.
    ///
    /// Values are taken as found; the only failure is a non-integer
    /// `SECURE_HSTS_SECONDS` when debug mode is off.
    pub fn resolve(env: &impl EnvSource, base_dir: &Path) -> SettingsResult<Self> {
        let debug = flag(env, ENV_DEBUG, DEFAULT_DEBUG);

        let security = if debug {
            None
        } else {
            Some(SecurityConfig::from_source(env)?)
        };

        let settings = Self {
            base_dir: base_dir.to_path_buf(),
            debug,
            secret_key: var_or(env, ENV_SECRET_KEY, DEFAULT_SECRET_KEY),
            allowed_hosts: list(env, ENV_ALLOWED_HOSTS, DEFAULT_ALLOWED_HOSTS)
                .into_iter()
                .collect(),
            database: DatabaseConfig::from_source(env, base_dir),
            csrf_trusted_origins: list(env, ENV_CSRF_TRUSTED_ORIGINS, DEFAULT_CSRF_TRUSTED_ORIGINS),
            static_url: STATIC_URL.to_string(),
            static_root: base_dir.join(STATIC_ROOT_DIR),
            staticfiles_dirs: vec![base_dir.join(STATICFILES_DIR)],
            media_url: MEDIA_URL.to_string(),
            media_root: base_dir.join(MEDIA_ROOT_DIR),
            auth_user_model: var_or(env, ENV_AUTH_USER_MODEL, DEFAULT_AUTH_USER_MODEL),
            security,
            framework: FrameworkConfig::new(base_dir),
            logging: LoggingConfig::default(),
        };

        tracing::debug!(
            debug = settings.debug,
            database = settings.database.engine(),
            allowed_hosts = settings.allowed_hosts.len(),
            hardened = settings.security.is_some(),
            "Settings resolved"
        );

        Ok(settings)
    }

    /// Secret used for cryptographic signing.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Whether the insecure placeholder key is in use
    pub fn uses_default_secret_key(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
