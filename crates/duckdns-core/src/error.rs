//! Error types for the DuckDNS client
//!
//! This module defines all error types used throughout the crate.

use std::fmt;
use thiserror::Error;

/// Result type alias for DuckDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DuckDNS client
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (incomplete or unusable update request)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem errors while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP transport errors (connection or body read failures)
    #[error("HTTP error: {0}")]
    Http(String),

    /// One or more names failed to update
    #[error("{0}")]
    Update(UpdateFailure),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Whether this error was raised before any update was attempted
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<UpdateFailure> for Error {
    fn from(failure: UpdateFailure) -> Self {
        Self::Update(failure)
    }
}

/// Aggregated failure of an update batch
///
/// Holds one message per recorded error, in the order they occurred.
/// Displays as the messages joined by newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFailure {
    messages: Vec<String>,
}

impl UpdateFailure {
    /// Create an empty failure
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message
    pub fn push(&mut self, msg: impl Into<String>) {
        self.messages.push(msg.into());
    }

    /// Recorded messages, oldest first
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no error was recorded
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `Ok(())` when nothing was recorded, the aggregated failure otherwise
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Update(self))
        }
    }
}

impl fmt::Display for UpdateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("\n"))
    }
}
