//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
///
/// Logs always go to stderr so stdout carries only the confirmation line.
/// The level is quiet by default; `RUST_LOG` raises it.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Only the first
    /// call installs a subscriber; later calls are no-ops.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}
