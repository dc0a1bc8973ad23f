use core::str::FromStr;

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "DDD_TYPES_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the tracing subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(anyhow::anyhow!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,ddd_types_core=trace`.
    pub filter: String,
    pub format: LogFormat,
    /// Raw format value that failed to parse; reported once tracing is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read the configuration from `RUST_LOG` and [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Missing or empty values fall back to the defaults. An unrecognized
    /// format falls back to JSON and is kept in `rejected_format`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match lookup(LOG_FORMAT_ENV) {
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(_) => (LogFormat::Json, Some(raw)),
            },
            None => (LogFormat::default(), None),
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
