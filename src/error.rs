//! Error types for relaunch
//!
//! Only setup-time failures surface as errors. Build failures, a missing app
//! binary and unreadable source files are reported through events instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for relaunch operations
pub type RelaunchResult<T> = Result<T, RelaunchError>;

/// Main error type for relaunch operations
#[derive(Error, Debug)]
pub enum RelaunchError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// A program could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Delivering a signal to a child process failed
    #[error("failed to send {signal}: {reason}")]
    Signal { signal: String, reason: String },

    /// Native file watcher could not be set up
    #[error("file watcher error: {0}")]
    Watch(String),
}

impl From<notify::Error> for RelaunchError {
    fn from(err: notify::Error) -> Self {
        RelaunchError::Watch(err.to_string())
    }
}
