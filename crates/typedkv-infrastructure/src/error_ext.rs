//! Error extension utilities
//!
//! ```ignore
//! use typedkv_infrastructure::error_ext::ErrorContext;
//!
//! let content = std::fs::read_to_string(&path)
//!     .io_context(format!("Failed to read config file: {}", path.display()))?;
//! ```

use crate::error::{InfraError, InfraResult};
use std::fmt;

/// Extension trait for attaching context to foreign errors
pub trait ErrorContext<T> {
    /// Add context, converting the error into [`InfraError::Infrastructure`]
    fn context<C>(self, context: C) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add lazily built context
    fn with_context<C, F>(self, f: F) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| InfraError::Infrastructure {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn with_context<C, F>(self, f: F) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| InfraError::Infrastructure {
            message: format!("{}: {}", f(), err),
            source: Some(Box::new(err)),
        })
    }

    fn io_context<C>(self, context: C) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| InfraError::Io {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> InfraResult<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| InfraError::Configuration {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }
}
