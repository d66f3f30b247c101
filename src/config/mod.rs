//! Runtime configuration.
//!
//! The database path is fixed when the binary is built: set `KERNELBOT_DB`
//! in the build environment to bake in a different file. Nothing at run
//! time overrides it.

mod logging;

use std::path::PathBuf;

pub use logging::LoggingConfig;

/// Database file used when the build does not override it.
pub const DEFAULT_DATABASE: &str = match option_env!("KERNELBOT_DB") {
    Some(path) => path,
    None => "kernelbot.db",
};

/// Configuration handed to the registrar at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file, relative to the working directory unless absolute.
    pub database: PathBuf,
}

impl Config {
    /// Build a configuration pointing at `database`.
    #[must_use]
    pub fn with_database(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
        }
    }
}
