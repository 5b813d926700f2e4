//! Command tests driven through a mocked environment source.

use std::path::Path;

use clap::Parser;
use mockall::predicate::eq;

use manage_lib::cli::{Cli, Commands};
use manage_lib::commands;
use manage_lib::ManageError;
use settings::env::MockEnvSource;
use settings::Settings;

/// Mock environment answering `pairs` and reporting every other key as unset.
fn mock_env(pairs: &'static [(&'static str, &'static str)]) -> MockEnvSource {
    let mut env = MockEnvSource::new();
    for (key, value) in pairs {
        env.expect_var()
            .with(eq(*key))
            .returning(move |_| Some(value.to_string()));
    }
    env.expect_var().returning(|_| None);
    env
}

fn resolve(pairs: &'static [(&'static str, &'static str)]) -> Settings {
    Settings::resolve(&mock_env(pairs), Path::new("/srv/blog")).unwrap()
}

#[test]
fn test_production_snapshot_passes_deploy_check() {
    let settings = resolve(&[
        ("DEBUG", "False"),
        (
            "SECRET_KEY",
            "k8Jf2-q0Zr9xLw3vB7nC5mT1yH6uP4sD0aE8gR2iO9lK3jW5eQ",
        ),
        ("ALLOWED_HOSTS", "blog.example.org"),
        ("CSRF_TRUSTED_ORIGINS", "https://blog.example.org"),
    ]);

    let cli = Cli::parse_from(["manage", "check", "--deploy", "--fail-level", "warning"]);
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };

    let mut out = Vec::new();
    commands::check::execute(args, &settings, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "System check identified 0 issue(s).\n"
    );
}

#[test]
fn test_default_secret_in_production_fails_deploy_check() {
    let settings = resolve(&[("DEBUG", "false")]);

    let cli = Cli::parse_from(["manage", "check", "--deploy"]);
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };

    let mut out = Vec::new();
    let err = commands::check::execute(args, &settings, &mut out).unwrap_err();

    assert!(matches!(err, ManageError::ChecksFailed(1)));
    assert_eq!(err.exit_code(), 2);
    assert!(String::from_utf8(out)
        .unwrap()
        .contains("ERROR (security.W001)"));
}

#[test]
fn test_show_reflects_mocked_environment() {
    let settings = resolve(&[("DB_NAME", "blog"), ("DB_HOST", "db"), ("DB_PORT", "5432")]);

    let cli = Cli::parse_from(["manage", "show"]);
    let Commands::Show(args) = cli.command else {
        panic!("expected show command");
    };

    let mut out = Vec::new();
    commands::show::execute(args, &settings, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("DATABASE_ENGINE = postgresql\n"));
    assert!(text.contains("DATABASE_URL = postgres://db:5432/blog\n"));
}
