//! Logging setup for the dbdial binary
//!
//! Library crates only emit `tracing` events. The binary decides where
//! they go: a console layer on stderr and, optionally, JSON lines.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when neither `RUST_LOG` nor `LOGLEVEL` is set
const DEFAULT_LEVEL: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Whether to enable console output on stderr
    pub enable_console_logs: bool,

    /// Whether to enable JSON output on stderr
    pub enable_json_logs: bool,

    /// Whether to include file/line information in logs
    pub include_location: bool,

    /// Default log level filter, overridden by `RUST_LOG`
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_console_logs: true,
            enable_json_logs: false,
            include_location: cfg!(debug_assertions),
            default_filter: DEFAULT_LEVEL.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Configuration with the default filter taken from `LOGLEVEL`
    pub fn from_env() -> Self {
        let level = std::env::var("LOGLEVEL").ok();
        Self {
            default_filter: legacy_level(level.as_deref()).to_string(),
            ..Self::default()
        }
    }
}

/// Map a `LOGLEVEL` value (DEBUG, INFO, WARN, ERROR) to a filter directive.
/// Anything else, including lowercase spellings, falls back to warn.
pub fn legacy_level(value: Option<&str>) -> &'static str {
    match value {
        Some("DEBUG") => "debug",
        Some("INFO") => "info",
        Some("ERROR") => "error",
        _ => DEFAULT_LEVEL,
    }
}

/// Initialize the logging system with the given configuration
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    // RUST_LOG environment variable takes precedence over default filter
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.default_filter))?;

    let mut layers = Vec::new();

    if config.enable_console_logs {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_filter(env_filter.clone())
            .boxed();

        layers.push(console_layer);
    }

    if config.enable_json_logs {
        let json_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .json()
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed();

        layers.push(json_layer);
    }

    tracing_subscriber::registry().with(layers).try_init()?;

    tracing::debug!(
        filter = %config.default_filter,
        json_enabled = config.enable_json_logs,
        "logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests;
