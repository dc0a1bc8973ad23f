//! Tracing/logging initialization.

use ::tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{LogFormat, ObservabilityConfig};

const FALLBACK_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let _ = try_init(config);
}

/// Install the global subscriber described by `config`.
///
/// Configuration values that had to be replaced by defaults are reported as
/// warnings through the freshly installed subscriber.
pub fn try_init(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let (filter, filter_error) = resolve_filter(&config.filter);
    let subscriber = build(config, filter, std::io::stdout);

    ::tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow::anyhow!(e))?;

    report_fallbacks(config, filter_error.as_deref());
    Ok(())
}

/// Parse the filter directives, falling back to `info` when they are invalid.
fn resolve_filter(directives: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_FILTER), Some(err.to_string())),
    }
}

fn build<W>(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_writer(writer);

    // Timestamps on both; target only for humans.
    match config.format {
        LogFormat::Json => Box::new(builder.json().with_target(false).finish()),
        LogFormat::Pretty => Box::new(builder.pretty().with_target(true).finish()),
    }
}

fn report_fallbacks(config: &ObservabilityConfig, filter_error: Option<&str>) {
    if let Some(raw) = &config.rejected_format {
        ::tracing::warn!(format = %raw, "unknown log format; falling back to json");
    }
    if let Some(error) = filter_error {
        ::tracing::warn!(
            filter = %config.filter,
            error,
            "invalid log filter; falling back to info"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory writer so tests can inspect formatted output.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run the fallback reporting against a scoped subscriber writing to memory.
    fn reported(config: &ObservabilityConfig) -> String {
        let captured = Captured::default();
        let (filter, filter_error) = resolve_filter(&config.filter);
        let subscriber = build(config, filter, captured.clone());

        ::tracing::subscriber::with_default(subscriber, || {
            report_fallbacks(config, filter_error.as_deref());
        });

        captured.contents()
    }

    #[test]
    fn valid_filter_is_kept() {
        let (_, error) = resolve_filter("info,ddd_types_core=trace");
        assert!(error.is_none());
    }

    #[test]
    fn invalid_filter_falls_back_with_error() {
        let (_, error) = resolve_filter("ddd_types_core=bogus");
        assert!(error.is_some());
    }

    #[test]
    fn unknown_format_is_reported_as_json_warning() {
        let config = ObservabilityConfig {
            rejected_format: Some("xml".to_string()),
            ..ObservabilityConfig::default()
        };

        let output = reported(&config);

        assert!(output.contains("unknown log format; falling back to json"));
        assert!(output.contains("\"format\":\"xml\""));
        assert!(output.contains("WARN"));
    }

    #[test]
    fn invalid_filter_is_reported_through_pretty_output() {
        let config = ObservabilityConfig {
            filter: "ddd_types_core=bogus".to_string(),
            format: LogFormat::Pretty,
            rejected_format: None,
        };

        let output = reported(&config);

        assert!(output.contains("invalid log filter; falling back to info"));
        assert!(output.contains("ddd_types_core=bogus"));
        assert!(!output.contains("unknown log format"));
    }

    #[test]
    fn clean_config_reports_nothing() {
        assert!(reported(&ObservabilityConfig::default()).is_empty());
    }

    #[test]
    fn second_installation_is_reported_but_init_stays_quiet() {
        let config = ObservabilityConfig::default();

        // Whichever call wins, only one subscriber can be installed.
        init(&config);
        assert!(try_init(&config).is_err());
        init(&config);

        ::tracing::info!("subscriber installed");
    }
}
