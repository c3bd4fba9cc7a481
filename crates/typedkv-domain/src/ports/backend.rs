//! Key-Value Backend Port
//!
//! The capability contract this layer requires from an external key-value
//! store. Implementations translate each call into the store's native API.
//!
//! ## Contract
//!
//! | Method | Semantics |
//! |--------|-----------|
//! | `read` | `Ok(None)` signals absence; never an error for "not found" |
//! | `write` | Overwrites any existing entry; oversize metadata is a failure |
//! | `remove` | Idempotent; removing an absent key succeeds |
//! | `enumerate` | One page; `limit` is a request, not a guarantee |
//!
//! Adapters report failures as opaque [`BackendError`]s. Mapping those into
//! the error taxonomy is the facade's job, not the adapter's.
//!
//! ## Implementations
//!
//! - **memory**: in-process map for tests, no expiration enforcement
//! - **redis**: live adapter over a Redis server

use crate::constants::STREAM_CHUNK_SIZE;
use crate::value_objects::{
    ByteStream, GetOptions, ListOptions, ListPage, PutOptions, Representation, StoredEntry,
    chunked_stream,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;

/// Opaque failure reported by a backend
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type of backend calls
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Backend call categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendOperation {
    /// `read` and `read_stream`
    Read,
    /// `write`
    Write,
    /// `remove`
    Remove,
    /// `enumerate`
    Enumerate,
}

impl fmt::Display for BackendOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Remove => "remove",
            Self::Enumerate => "enumerate",
        };
        f.write_str(name)
    }
}

/// Key-value backend capability
#[async_trait]
pub trait KvBackend: Send + Sync + fmt::Debug {
    /// Read the entry stored under `key`
    ///
    /// `representation` is the form the caller will decode the value into.
    /// Backends that store plain bytes may ignore it.
    async fn read(
        &self,
        key: &str,
        representation: Representation,
        options: &GetOptions,
    ) -> BackendResult<Option<StoredEntry>>;

    /// Read the value stored under `key` as a byte stream
    ///
    /// The default buffers the whole value through [`KvBackend::read`].
    async fn read_stream(
        &self,
        key: &str,
        options: &GetOptions,
    ) -> BackendResult<Option<ByteStream>> {
        Ok(self
            .read(key, Representation::Stream, options)
            .await?
            .map(|entry| chunked_stream(entry.value, STREAM_CHUNK_SIZE)))
    }

    /// Store `value` under `key`, replacing any existing entry
    async fn write(&self, key: &str, value: Bytes, options: &PutOptions) -> BackendResult<()>;

    /// Remove `key`; succeeds when the key is already absent
    async fn remove(&self, key: &str) -> BackendResult<()>;

    /// Enumerate one page of keys
    async fn enumerate(&self, options: &ListOptions) -> BackendResult<ListPage>;

    /// Short identifier of the backend (e.g., "memory", "redis")
    fn backend_name(&self) -> &str;
}
