use thiserror::Error;

/// Every way a registration can fail.
///
/// The display strings are the one-line diagnostics printed to stderr, so
/// each variant names the failing stage followed by the underlying message.
#[derive(Error, Debug)]
pub enum Error {
    #[error("usage: {program} DISCORD_ID")]
    Usage { program: String },

    #[error("invalid discord id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("getlogin: {0}")]
    Identity(#[source] std::io::Error),

    #[error("Cannot open database: {0}")]
    StoreOpen(String),

    #[error("Failed to prepare statement: {0}")]
    StatementPrepare(String),

    #[error("Execution failed: {0}")]
    StatementExecution(String),
}

impl Error {
    /// Process exit code for this error. Every failure is terminal.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
