//! Settings layer for the blog web application.
//!
//! This crate provides:
//! - A pure resolver turning environment variables into an immutable [`Settings`] snapshot
//! - Typed database, security and framework parameters consumed by the web framework
//! - Deployment checks reporting insecure or incomplete configuration
//! - Tracing subscriber initialisation from the snapshot's logging section
//!
//! Resolve once at startup and pass the snapshot explicitly:
//!
//! ```no_run
//! let settings = settings::Settings::from_env()?;
//! settings::logging::init_tracing(&settings.logging, false);
//! # Ok::<(), settings::SettingsError>(())
//! ```

pub mod check;
pub mod constants;
pub mod database;
pub mod env;
pub mod error;
pub mod framework;
pub mod logging;
pub mod security;
mod resolve;

pub use check::{CheckLevel, CheckMessage};
pub use database::DatabaseConfig;
pub use env::{EnvSource, ProcessEnv};
pub use error::{SettingsError, SettingsResult};
pub use logging::{LoggingConfig, TemplateFormat};
pub use resolve::{default_base_dir, Settings};
pub use security::SecurityConfig;
