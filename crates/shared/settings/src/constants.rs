//! Settings constants.
//!
//! Environment variable names, their fallback values and the fixed
//! parameters handed to the web framework.

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_ALLOWED_HOSTS: &str = "ALLOWED_HOSTS";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_AUTH_USER_MODEL: &str = "AUTH_USER_MODEL";
pub const ENV_SECURE_HSTS_SECONDS: &str = "SECURE_HSTS_SECONDS";
pub const ENV_SECURE_SSL_REDIRECT: &str = "SECURE_SSL_REDIRECT";
pub const ENV_SESSION_COOKIE_SECURE: &str = "SESSION_COOKIE_SECURE";
pub const ENV_CSRF_COOKIE_SECURE: &str = "CSRF_COOKIE_SECURE";
pub const ENV_CSRF_TRUSTED_ORIGINS: &str = "CSRF_TRUSTED_ORIGINS";

// =============================================================================
// Defaults
// =============================================================================

/// Debug mode is on unless explicitly disabled
pub const DEFAULT_DEBUG: &str = "True";

/// Insecure placeholder; must be overridden outside development
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-me";

pub const DEFAULT_ALLOWED_HOSTS: &str = "localhost,127.0.0.1";

pub const DEFAULT_CSRF_TRUSTED_ORIGINS: &str = "";

pub const DEFAULT_AUTH_USER_MODEL: &str = "users.User";

/// One year, in seconds
pub const DEFAULT_HSTS_SECONDS: &str = "31536000";

pub const DEFAULT_SECURE_FLAG: &str = "True";

// =============================================================================
// Filesystem Layout (relative to the base directory)
// =============================================================================

pub const SQLITE_FILE_NAME: &str = "db.sqlite3";
pub const STATIC_ROOT_DIR: &str = "staticfiles";
pub const STATICFILES_DIR: &str = "static";
pub const MEDIA_ROOT_DIR: &str = "media";
pub const TEMPLATES_DIR: &str = "templates";

// =============================================================================
// Framework Parameters
// =============================================================================

pub const INSTALLED_APPS: &[&str] = &[
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "mail",
    "blog",
    "users",
];

/// Middleware chain, outermost first
pub const MIDDLEWARE: &[&str] = &[
    "django.middleware.security.SecurityMiddleware",
    "django.contrib.sessions.middleware.SessionMiddleware",
    "django.middleware.common.CommonMiddleware",
    "django.middleware.csrf.CsrfViewMiddleware",
    "django.contrib.auth.middleware.AuthenticationMiddleware",
    "django.contrib.messages.middleware.MessageMiddleware",
    "django.middleware.clickjacking.XFrameOptionsMiddleware",
];

pub const ROOT_URLCONF: &str = "config.urls";
pub const WSGI_APPLICATION: &str = "config.wsgi.application";

pub const TEMPLATE_BACKEND: &str = "django.template.backends.django.DjangoTemplates";

pub const TEMPLATE_CONTEXT_PROCESSORS: &[&str] = &[
    "django.template.context_processors.debug",
    "django.template.context_processors.request",
    "django.contrib.auth.context_processors.auth",
    "django.contrib.messages.context_processors.messages",
];

pub const PASSWORD_VALIDATORS: &[&str] = &[
    "django.contrib.auth.password_validation.UserAttributeSimilarityValidator",
    "django.contrib.auth.password_validation.MinimumLengthValidator",
    "django.contrib.auth.password_validation.CommonPasswordValidator",
    "django.contrib.auth.password_validation.NumericPasswordValidator",
];

pub const LANGUAGE_CODE: &str = "ru-ru";
pub const TIME_ZONE: &str = "Europe/Amsterdam";

pub const STATIC_URL: &str = "/static/";
pub const MEDIA_URL: &str = "/media/";

pub const DEFAULT_AUTO_FIELD: &str = "django.db.models.BigAutoField";

pub const LOGIN_URL: &str = "login";
pub const LOGIN_REDIRECT_URL: &str = "home";
pub const LOGOUT_REDIRECT_URL: &str = "home";

// =============================================================================
// Logging
// =============================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Target of the framework's own logger
pub const FRAMEWORK_LOG_TARGET: &str = "django";

pub const LOG_FORMAT: &str = "[{level}] {target}: {message}";

// =============================================================================
// Deployment Checks
// =============================================================================

/// Shortest secret key not flagged as weak
pub const MIN_SECRET_KEY_LENGTH: usize = 50;
