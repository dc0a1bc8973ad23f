//! Tracing/logging setup shared by binaries and tests using `ddd-types`.

/// Subscriber configuration (filter, output format).
pub mod config;

/// Tracing initialization.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing with an explicit configuration.
///
/// Fails if a global subscriber is already installed.
pub fn try_init(config: &ObservabilityConfig) -> anyhow::Result<()> {
    tracing::try_init(config)
}
