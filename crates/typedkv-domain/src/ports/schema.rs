//! Validation Schema Port
//!
//! A caller-owned pair of pure functions between untyped JSON and a domain
//! value. The schema-validated facade never mutates or caches a schema; the
//! optional identifier is recorded in entry metadata for information only.

use crate::error::BoxError;
use serde_json::Value;
use thiserror::Error;

/// Decode or encode failure reported by a schema
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SchemaError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl SchemaError {
    /// Create a schema error from a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a schema error wrapping an underlying error
    pub fn with_source<S: Into<String>, E: Into<BoxError>>(message: S, source: E) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Split into message and source
    pub fn into_parts(self) -> (String, Option<BoxError>) {
        (self.message, self.source)
    }
}

/// Schema between untyped JSON and `Self::Value`
pub trait ValidationSchema: Send + Sync {
    /// Domain type produced by decoding
    type Value: Send + Sync;

    /// Validate untyped JSON and produce a domain value
    fn decode(&self, raw: Value) -> Result<Self::Value, SchemaError>;

    /// Produce untyped JSON from a domain value
    fn encode(&self, value: &Self::Value) -> Result<Value, SchemaError>;

    /// Advisory identifier stamped into metadata on write
    fn identifier(&self) -> Option<&str> {
        None
    }
}
