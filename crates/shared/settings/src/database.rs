//! Database connection settings.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use url::Url;

use crate::constants::{
    ENV_DB_HOST, ENV_DB_NAME, ENV_DB_PASSWORD, ENV_DB_PORT, ENV_DB_USER, SQLITE_FILE_NAME,
};
use crate::env::EnvSource;
use crate::error::{SettingsError, SettingsResult};

/// Host used in connection URLs when `DB_HOST` is unset or empty
const DEFAULT_POSTGRES_HOST: &str = "localhost";

const POSTGRES_BASE_URL: &str = "postgres://localhost/";
const SQLITE_BASE_URL: &str = "sqlite:///";

/// The default database connection.
///
/// Values are carried exactly as found in the environment. Missing
/// credentials stay `None`; `check::run` reports them.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "engine", rename_all = "lowercase")]
pub enum DatabaseConfig {
    /// Embedded single-file database
    Sqlite { path: PathBuf },
    /// Networked database reached over host/port with credentials
    #[serde(rename = "postgresql")]
    Postgres {
        name: String,
        user: Option<String>,
        #[serde(skip_serializing)]
        password: Option<String>,
        host: Option<String>,
        port: Option<String>,
    },
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseConfig::Sqlite { path } => {
                f.debug_struct("Sqlite").field("path", path).finish()
            }
            DatabaseConfig::Postgres {
                name,
                user,
                password,
                host,
                port,
            } => f
                .debug_struct("Postgres")
                .field("name", name)
                .field("user", user)
                .field("password", &password.as_ref().map(|_| "[REDACTED]"))
                .field("host", host)
                .field("port", port)
                .finish(),
        }
    }
}

impl DatabaseConfig {
    /// Select the database from the environment.
    ///
    /// A non-empty `DB_NAME` selects Postgres; anything else falls back to
    /// the embedded file under `base_dir`.
    pub fn from_source(env: &impl EnvSource, base_dir: &Path) -> Self {
        match env.var(ENV_DB_NAME).filter(|name| !name.is_empty()) {
            Some(name) => DatabaseConfig::Postgres {
                name,
                user: env.var(ENV_DB_USER),
                password: env.var(ENV_DB_PASSWORD),
                host: env.var(ENV_DB_HOST),
                port: env.var(ENV_DB_PORT),
            },
            None => DatabaseConfig::Sqlite {
                path: base_dir.join(SQLITE_FILE_NAME),
            },
        }
    }

    /// Engine identifier
    pub fn engine(&self) -> &'static str {
        match self {
            DatabaseConfig::Sqlite { .. } => "sqlite",
            DatabaseConfig::Postgres { .. } => "postgresql",
        }
    }

    /// Connection URL including the password, if any.
    pub fn url(&self) -> SettingsResult<String> {
        self.build_url(false)
    }

    /// Connection URL with the password replaced by `****`.
    pub fn masked_url(&self) -> SettingsResult<String> {
        self.build_url(true)
    }

    fn build_url(&self, mask_password: bool) -> SettingsResult<String> {
        match self {
            DatabaseConfig::Sqlite { path } => sqlite_url(path),
            DatabaseConfig::Postgres {
                name,
                user,
                password,
                host,
                ..
            } => {
                let invalid = |reason: &str| SettingsError::database_url(reason);

                let mut url = Url::parse(POSTGRES_BASE_URL).map_err(|e| invalid(&e.to_string()))?;
                let host = non_empty(host).unwrap_or(DEFAULT_POSTGRES_HOST);
                url.set_host(Some(host))
                    .map_err(|e| invalid(&format!("DB_HOST {:?}: {}", host, e)))?;

                // A bad DB_PORT is reported by port_number(); it is left out here
                if let Ok(Some(port)) = self.port_number() {
                    url.set_port(Some(port))
                        .map_err(|_| invalid("cannot set port"))?;
                }

                if let Some(user) = non_empty(user) {
                    url.set_username(user)
                        .map_err(|_| invalid("cannot set DB_USER"))?;
                    if let Some(password) = non_empty(password) {
                        let password = if mask_password { "****" } else { password };
                        url.set_password(Some(password))
                            .map_err(|_| invalid("cannot set DB_PASSWORD"))?;
                    }
                }

                url.path_segments_mut()
                    .map_err(|_| invalid("URL cannot hold a database name"))?
                    .clear()
                    .push(name);

                Ok(url.into())
            }
        }
    }

    /// Parsed port number, if one is configured.
    ///
    /// Resolution keeps `DB_PORT` verbatim; a non-numeric value only fails
    /// here. An empty value means the driver's default port.
    pub fn port_number(&self) -> SettingsResult<Option<u16>> {
        match self {
            DatabaseConfig::Sqlite { .. } => Ok(None),
            DatabaseConfig::Postgres { port, .. } => match non_empty(port) {
                None => Ok(None),
                Some(port) => port
                    .parse::<u16>()
                    .map(Some)
                    .map_err(|_| SettingsError::invalid_integer(ENV_DB_PORT, port)),
            },
        }
    }

    /// Names of the `DB_*` variables left unset or empty for a Postgres connection.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        match self {
            DatabaseConfig::Sqlite { .. } => Vec::new(),
            DatabaseConfig::Postgres {
                user,
                password,
                host,
                port,
                ..
            } => [
                (ENV_DB_USER, user),
                (ENV_DB_PASSWORD, password),
                (ENV_DB_HOST, host),
                (ENV_DB_PORT, port),
            ]
            .into_iter()
            .filter(|(_, value)| non_empty(value).is_none())
            .map(|(var, _)| var)
            .collect(),
        }
    }
}

/// `Some` only for a set, non-empty value.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `sqlite:///<percent-encoded absolute path>?mode=rwc`
fn sqlite_url(path: &Path) -> SettingsResult<String> {
    if !path.is_absolute() {
        return Err(SettingsError::database_url(format!(
            "database file {} is not an absolute path",
            path.display()
        )));
    }

    let mut url = Url::parse(SQLITE_BASE_URL).map_err(|e| SettingsError::database_url(e.to_string()))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| SettingsError::database_url("URL cannot hold a file path"))?;
        segments.clear();
        for component in path.components() {
            match component {
                Component::Normal(part) => {
                    segments.push(&part.to_string_lossy());
                }
                Component::ParentDir => {
                    segments.pop();
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
    }
    url.set_query(Some("mode=rwc"));
    Ok(url.into())
}
