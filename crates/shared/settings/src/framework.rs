//! Fixed parameters handed to the web framework.
//!
//! None of these come from the environment; they describe which components
//! the framework loads and how it is wired.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{
    DEFAULT_AUTO_FIELD, INSTALLED_APPS, LANGUAGE_CODE, LOGIN_REDIRECT_URL, LOGIN_URL,
    LOGOUT_REDIRECT_URL, MIDDLEWARE, PASSWORD_VALIDATORS, ROOT_URLCONF, TEMPLATES_DIR,
    TEMPLATE_BACKEND, TEMPLATE_CONTEXT_PROCESSORS, TIME_ZONE, WSGI_APPLICATION,
};

/// Components, middleware and wiring of the hosting framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkConfig {
    pub installed_apps: Vec<String>,
    /// Outermost first
    pub middleware: Vec<String>,
    pub root_urlconf: String,
    pub wsgi_application: String,
    pub templates: Vec<TemplateEngine>,
    pub password_validators: Vec<String>,
    pub locale: LocaleConfig,
    pub default_auto_field: String,
    pub auth_urls: AuthUrls,
}

/// One template backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEngine {
    pub backend: String,
    /// Project-wide template directories
    pub dirs: Vec<PathBuf>,
    /// Also search each installed app's own templates
    pub app_dirs: bool,
    pub context_processors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
}

/// Named routes used by the authentication views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUrls {
    pub login_url: String,
    pub login_redirect_url: String,
    pub logout_redirect_url: String,
}

impl FrameworkConfig {
    /// Framework parameters with template directories rooted at `base_dir`.
    pub fn new(base_dir: &Path) -> Self {
        Self {
            installed_apps: to_strings(INSTALLED_APPS),
            middleware: to_strings(MIDDLEWARE),
            root_urlconf: ROOT_URLCONF.to_string(),
            wsgi_application: WSGI_APPLICATION.to_string(),
            templates: vec![TemplateEngine {
                backend: TEMPLATE_BACKEND.to_string(),
                dirs: vec![base_dir.join(TEMPLATES_DIR)],
                app_dirs: true,
                context_processors: to_strings(TEMPLATE_CONTEXT_PROCESSORS),
            }],
            password_validators: to_strings(PASSWORD_VALIDATORS),
            locale: LocaleConfig::default(),
            default_auto_field: DEFAULT_AUTO_FIELD.to_string(),
            auth_urls: AuthUrls::default(),
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_code: LANGUAGE_CODE.to_string(),
            time_zone: TIME_ZONE.to_string(),
            use_i18n: true,
            use_tz: true,
        }
    }
}

impl Default for AuthUrls {
    fn default() -> Self {
        Self {
            login_url: LOGIN_URL.to_string(),
            login_redirect_url: LOGIN_REDIRECT_URL.to_string(),
            logout_redirect_url: LOGOUT_REDIRECT_URL.to_string(),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
