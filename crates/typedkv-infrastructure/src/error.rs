//! Infrastructure errors
//!
//! Failures while assembling the program (configuration, logging, backend
//! resolution). These never appear in key-value operation results.

use thiserror::Error;

type BoxSource = Box<dyn std::error::Error + Send + Sync>;

/// Infrastructure error
#[derive(Debug, Error)]
pub enum InfraError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxSource>,
    },

    /// Filesystem access failed
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxSource>,
    },

    /// The configured backend could not be created
    #[error("Backend error: {message}")]
    Backend {
        /// Description of the resolution failure
        message: String,
    },

    /// Any other infrastructure failure
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxSource>,
    },
}

impl InfraError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend resolution error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Result alias for infrastructure operations
pub type InfraResult<T> = std::result::Result<T, InfraError>;
