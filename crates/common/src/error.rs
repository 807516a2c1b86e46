//! Error types for mvmkit-common.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Config file missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A referenced file could not be read.
    #[error("reading {path}: {source}")]
    ReadFile {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
