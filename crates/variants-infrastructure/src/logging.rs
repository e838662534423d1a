//! Structured logging with tracing
//!
//! Installs the global subscriber: plain or JSON output to stdout, an
//! optional daily rolling file, and an `EnvFilter` that `VARIANTS_LOG`
//! overrides. Also holds the log events emitted while loading
//! configuration and probing dependencies.

use std::path::Path;

use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};
use variants_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::{LOG_FILE_PREFIX, LOG_FILTER_ENV};
use crate::health::{HealthCheck, HealthStatus};

/// Initialize logging with the provided configuration
///
/// Fails if the level is unknown or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout = if config.json_format {
        fmt::layer().json().with_target(true).boxed()
    } else {
        fmt::layer().with_target(true).boxed()
    };

    let file = config.file_output.as_deref().map(|path| {
        let layer = fmt::layer()
            .with_writer(daily_appender(path))
            .with_ansi(false)
            .with_target(true);
        if config.json_format {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    });

    Registry::default()
        .with(filter)
        .with(stdout)
        .with(file)
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to initialize logging: {e}")))?;

    info!(
        level = %level,
        json = config.json_format,
        file = ?config.file_output,
        "Logging initialized"
    );
    Ok(())
}

/// Daily rolling appender writing `<stem>.<date>` next to `path`
fn daily_appender(path: &Path) -> tracing_appender::rolling::RollingFileAppender {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(LOG_FILE_PREFIX);
    tracing_appender::rolling::daily(directory, prefix)
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log which configuration file was merged, or that a requested one is missing
pub fn log_config_file(path: &Path, found: bool) {
    if found {
        info!(path = %path.display(), "Configuration file loaded");
    } else {
        warn!(path = %path.display(), "Configuration file not found, using defaults");
    }
}

/// Log a dependency probe at a level matching its outcome
pub fn log_health_check(check: &HealthCheck) {
    let error = check.error.as_deref().unwrap_or("unknown failure");
    match check.status {
        HealthStatus::Up => debug!(
            check = %check.name,
            response_time_ms = check.response_time_ms,
            "Health check passed"
        ),
        HealthStatus::Degraded => warn!(
            check = %check.name,
            response_time_ms = check.response_time_ms,
            error,
            "Health check degraded"
        ),
        HealthStatus::Down => error!(
            check = %check.name,
            response_time_ms = check.response_time_ms,
            error,
            "Health check failed"
        ),
    }
}
