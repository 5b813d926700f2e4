//! Logging section of the settings and tracing subscriber setup.

use std::fmt::{self, Write as _};

use serde::Serialize;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::{DEFAULT_LOG_LEVEL, FRAMEWORK_LOG_TARGET, LOG_FORMAT};

/// Console logging: one root level plus the framework's own logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    pub root_level: String,
    pub framework_target: String,
    pub framework_level: String,
    /// Line template with `{level}`, `{target}` and `{message}` placeholders
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            root_level: DEFAULT_LOG_LEVEL.to_string(),
            framework_target: FRAMEWORK_LOG_TARGET.to_string(),
            framework_level: DEFAULT_LOG_LEVEL.to_string(),
            format: LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive equivalent to this section, e.g. `info,django=info`.
    pub fn filter_directive(&self) -> String {
        format!(
            "{},{}={}",
            self.root_level, self.framework_target, self.framework_level
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Level,
    Target,
    Message,
}

/// Event formatter that renders one line per event from a template.
///
/// Unknown placeholders are written out literally.
#[derive(Debug, Clone)]
pub struct TemplateFormat {
    segments: Vec<Segment>,
}

impl TemplateFormat {
    pub fn new(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            literal.push_str(&rest[..start]);
            let tail = &rest[start..];
            let (segment, len) = if tail.starts_with("{level}") {
                (Segment::Level, "{level}".len())
            } else if tail.starts_with("{target}") {
                (Segment::Target, "{target}".len())
            } else if tail.starts_with("{message}") {
                (Segment::Message, "{message}".len())
            } else {
                literal.push('{');
                rest = &tail[1..];
                continue;
            };
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
            rest = &tail[len..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }
}

impl<S, N> FormatEvent<S, N> for TemplateFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => writer.write_str(text)?,
                Segment::Level => write!(writer, "{}", meta.level())?,
                Segment::Target => writer.write_str(meta.target())?,
                Segment::Message => ctx.field_format().format_fields(writer.by_ref(), event)?,
            }
        }
        writeln!(writer)
    }
}

/// Install the global tracing subscriber.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` wins over the settings.
pub fn init_tracing(config: &LoggingConfig, verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter_directive())
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(TemplateFormat::new(&config.format))
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(template: &str, emit: impl FnOnce()) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .event_format(TemplateFormat::new(template))
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);
        let bytes = buf.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(LoggingConfig::default().filter_directive(), "info,django=info");
    }

    #[test]
    fn test_directive_follows_levels() {
        let config = LoggingConfig {
            root_level: "warn".to_string(),
            framework_level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.filter_directive(), "warn,django=debug");
    }

    #[test]
    fn test_events_use_configured_format() {
        let output = capture(LOG_FORMAT, || {
            tracing::info!(target: "django", "ready");
            tracing::warn!(target: "manage", "slow query");
        });
        assert_eq!(output, "[INFO] django: ready\n[WARN] manage: slow query\n");
    }

    #[test]
    fn test_custom_template_and_unknown_placeholder() {
        let output = capture("{target} {pid} <{level}> {message}", || {
            tracing::error!(target: "db", "down");
        });
        assert_eq!(output, "db {pid} <ERROR> down\n");
    }
}
