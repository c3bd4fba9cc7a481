//! Read, write and list options
//!
//! # Example
//!
//! ```
//! use typedkv_domain::value_objects::PutOptions;
//!
//! let opts = PutOptions::new()
//!     .with_expiration_ttl(3600)
//!     .with_metadata(serde_json::json!({ "owner": "billing" }));
//! assert_eq!(opts.expiration_ttl, Some(3600));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// Representation requested for one read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Representation {
    /// UTF-8 text
    Text,
    /// Text parsed as JSON
    Json,
    /// Raw byte buffer
    ArrayBuffer,
    /// Chunked byte stream
    Stream,
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::ArrayBuffer => "arrayBuffer",
            Self::Stream => "stream",
        };
        f.write_str(name)
    }
}

/// Options for a read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetOptions {
    /// How long the backend may serve this value from an edge cache.
    /// Advisory; backends without such a cache ignore it.
    pub cache_ttl: Option<Duration>,
}

impl GetOptions {
    /// Options with no cache hint
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache hint
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }
}

/// Options for a write
///
/// Expiration is threaded through to the backend; this layer neither tracks
/// nor enforces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PutOptions {
    /// Absolute expiration as seconds since the Unix epoch
    pub expiration: Option<u64>,
    /// Expiration relative to now, in seconds
    pub expiration_ttl: Option<u64>,
    /// Opaque metadata stored alongside the value
    pub metadata: Option<Value>,
}

impl PutOptions {
    /// Options with no expiration and no metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an absolute expiration (seconds since epoch)
    pub fn with_expiration(mut self, expiration: u64) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Set a relative expiration in seconds
    pub fn with_expiration_ttl(mut self, ttl_secs: u64) -> Self {
        self.expiration_ttl = Some(ttl_secs);
        self
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Options for one list call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Only keys starting with this prefix
    pub prefix: Option<String>,
    /// Requested page size; the backend may return fewer
    pub limit: Option<usize>,
    /// Continuation cursor from a previous page
    pub cursor: Option<String>,
}

impl ListOptions {
    /// Options listing from the start of the key space
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a prefix
    pub fn with_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Request a page size
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Continue from a cursor
    pub fn with_cursor<S: Into<String>>(mut self, cursor: S) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}
