//! Show command - Prints the resolved settings.

use std::io::Write;

use settings::Settings;

use crate::cli::{OutputFormat, ShowArgs};
use crate::errors::ManageResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings, out: &mut impl Write) -> ManageResult<()> {
    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, settings)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_text(settings, out)?,
    }
    Ok(())
}

fn write_text(settings: &Settings, out: &mut impl Write) -> ManageResult<()> {
    writeln!(out, "BASE_DIR = {}", settings.base_dir.display())?;
    writeln!(out, "DEBUG = {}", settings.debug)?;
    writeln!(out, "SECRET_KEY = ********")?;
    writeln!(out, "ALLOWED_HOSTS = {}", join(settings.allowed_hosts.iter()))?;
    writeln!(
        out,
        "CSRF_TRUSTED_ORIGINS = {}",
        join(settings.csrf_trusted_origins.iter())
    )?;
    writeln!(out, "DATABASE_ENGINE = {}", settings.database.engine())?;
    writeln!(out, "DATABASE_URL = {}", settings.database.masked_url()?)?;
    writeln!(out, "AUTH_USER_MODEL = {}", settings.auth_user_model)?;
    writeln!(out, "STATIC_URL = {}", settings.static_url)?;
    writeln!(out, "STATIC_ROOT = {}", settings.static_root.display())?;
    writeln!(out, "MEDIA_URL = {}", settings.media_url)?;
    writeln!(out, "MEDIA_ROOT = {}", settings.media_root.display())?;

    if let Some(security) = &settings.security {
        writeln!(out, "SECURE_HSTS_SECONDS = {}", security.hsts_seconds)?;
        writeln!(out, "SECURE_SSL_REDIRECT = {}", security.ssl_redirect)?;
        writeln!(out, "SESSION_COOKIE_SECURE = {}", security.session_cookie_secure)?;
        writeln!(out, "CSRF_COOKIE_SECURE = {}", security.csrf_cookie_secure)?;
    }

    let framework = &settings.framework;
    writeln!(out, "INSTALLED_APPS = {}", join(framework.installed_apps.iter()))?;
    writeln!(out, "MIDDLEWARE = {}", join(framework.middleware.iter()))?;
    writeln!(out, "ROOT_URLCONF = {}", framework.root_urlconf)?;
    writeln!(out, "LANGUAGE_CODE = {}", framework.locale.language_code)?;
    writeln!(out, "TIME_ZONE = {}", framework.locale.time_zone)?;
    writeln!(out, "LOGGING = {}", settings.logging.filter_directive())?;
    Ok(())
}

fn join<'a>(values: impl Iterator<Item = &'a String>) -> String {
    values.map(String::as_str).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::resolve(&env, Path::new("/srv/blog")).unwrap()
    }

    fn render(format: OutputFormat, settings: &Settings) -> String {
        let mut out = Vec::new();
        execute(ShowArgs { format }, settings, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let text = render(OutputFormat::Text, &settings(&[("SECRET_KEY", "s3cr3t")]));

        assert!(text.contains("DEBUG = true\n"));
        assert!(text.contains("ALLOWED_HOSTS = 127.0.0.1,localhost\n"));
        assert!(text.contains("DATABASE_URL = sqlite:///srv/blog/db.sqlite3?mode=rwc\n"));
        assert!(!text.contains("SECURE_HSTS_SECONDS"));
        assert!(!text.contains("s3cr3t"));
    }

    #[test]
    fn test_text_output_includes_hardening() {
        let text = render(OutputFormat::Text, &settings(&[("DEBUG", "false")]));
        assert!(text.contains("SECURE_HSTS_SECONDS = 31536000\n"));
        assert!(text.contains("CSRF_COOKIE_SECURE = true\n"));
    }

    #[test]
    fn test_json_output_masks_password() {
        let resolved = settings(&[("DB_NAME", "blog"), ("DB_PASSWORD", "hunter2")]);
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, &resolved)).unwrap();

        assert_eq!(json["debug"], true);
        assert_eq!(json["database"]["engine"], "postgresql");
        assert!(json["database"].get("password").is_none());
        assert!(json.get("secret_key").is_none());
    }
}
