//! Check command - Reports insecure or incomplete configuration.

use std::io::Write;

use settings::{check, CheckLevel, Settings};

use crate::cli::{CheckArgs, FailLevel};
use crate::errors::{ManageError, ManageResult};

/// Execute the check command
pub fn execute(args: CheckArgs, settings: &Settings, out: &mut impl Write) -> ManageResult<()> {
    let messages = if args.deploy {
        check::run(settings)
    } else {
        check::database(&settings.database)
    };

    for message in &messages {
        writeln!(out, "{}", message)?;
    }

    let fail_level = match args.fail_level {
        FailLevel::Warning => CheckLevel::Warning,
        FailLevel::Error => CheckLevel::Error,
    };
    let failing = messages.iter().filter(|m| m.level >= fail_level).count();

    if failing > 0 {
        tracing::warn!("{} check(s) at or above {}", failing, fail_level);
        return Err(ManageError::ChecksFailed(failing));
    }

    writeln!(
        out,
        "System check identified {} issue(s).",
        messages.len()
    )?;
    Ok(())
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

    fn run(deploy: bool, fail_level: FailLevel, settings: &Settings) -> (ManageResult<()>, String) {
        let mut out = Vec::new();
        let result = execute(CheckArgs { deploy, fail_level }, settings, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_plain_check_skips_security() {
        let (result, output) = run(false, FailLevel::Warning, &settings(&[]));
        assert!(result.is_ok());
        assert_eq!(output, "System check identified 0 issue(s).\n");
    }

    #[test]
    fn test_deploy_warnings_pass_at_error_level() {
        let (result, output) = run(true, FailLevel::Error, &settings(&[]));
        assert!(result.is_ok());
        assert!(output.contains("WARNING (security.W003)"));
        assert!(output.ends_with("System check identified 2 issue(s).\n"));
    }

    #[test]
    fn test_deploy_warnings_fail_at_warning_level() {
        let (result, _) = run(true, FailLevel::Warning, &settings(&[]));
        assert!(matches!(result, Err(ManageError::ChecksFailed(2))));
    }

    #[test]
    fn test_bad_port_fails_plain_check() {
        let (result, output) = run(
            false,
            FailLevel::Error,
            &settings(&[("DB_NAME", "blog"), ("DB_PORT", "abc")]),
        );
        assert!(matches!(result, Err(ManageError::ChecksFailed(1))));
        assert!(output.contains("ERROR (database.E002)"));
        assert!(output.contains("WARNING (database.E001)"));
    }
}
