//! Redis key-value backend
//!
//! Live adapter storing each entry as a Redis hash:
//!
//! | Field | Content |
//! |-------|---------|
//! | `value` | stored bytes |
//! | `metadata` | metadata serialized as JSON (absent when none) |
//!
//! Expiration is delegated to Redis (`EXPIRE` / `EXPIREAT`). Enumeration maps
//! onto `SCAN`, so pages may be smaller than requested, may be empty while
//! more remain, and may repeat a key across pages. `COUNT` is only a hint to
//! Redis, so a page may also hold more keys than the requested limit. Listing reports expiration
//! via `EXPIRETIME` and therefore needs Redis 7 or later.
//!
//! The backend assumes it owns the keys it touches; a key holding a non-hash
//! Redis type surfaces as a backend failure.
//!
//! ## Example
//!
//! ```ignore
//! use typedkv_providers::kv::RedisKvBackend;
//!
//! let backend = RedisKvBackend::new("redis://localhost:6379")?;
//! ```

use ::redis::{Client, aio::MultiplexedConnection};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tracing::trace;
use typedkv_domain::constants::{LIST_MAX_PAGE_SIZE, METADATA_DEFAULT_MAX_BYTES};
use typedkv_domain::ports::{BackendResult, KvBackend};
use typedkv_domain::value_objects::{
    GetOptions, ListKey, ListOptions, ListPage, PutOptions, Representation, StoredEntry,
};

use crate::constants::{
    REDIS_BACKEND_NAME, REDIS_DEFAULT_URI, REDIS_METADATA_FIELD, REDIS_VALUE_FIELD,
};

/// Cursor value at which a `SCAN` iteration starts and ends
const SCAN_START: &str = "0";

/// Redis backend
///
/// Holds a client handle shared by all operations; connections are
/// multiplexed.
#[derive(Clone)]
pub struct RedisKvBackend {
    client: Client,
    metadata_max_bytes: usize,
    page_limit: usize,
}

impl RedisKvBackend {
    /// Create a backend from a connection string
    ///
    /// No connection is made until the first operation.
    pub fn new(connection_string: &str) -> BackendResult<Self> {
        let client = Client::open(connection_string)
            .map_err(|e| format!("Failed to create Redis client: {}", e))?;

        Ok(Self {
            client,
            metadata_max_bytes: METADATA_DEFAULT_MAX_BYTES,
            page_limit: LIST_MAX_PAGE_SIZE,
        })
    }

    /// Set the bound on serialized metadata size
    pub fn with_metadata_max_bytes(mut self, max_bytes: usize) -> Self {
        self.metadata_max_bytes = max_bytes;
        self
    }

    /// Set the bound on keys requested per `SCAN`
    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit.clamp(1, LIST_MAX_PAGE_SIZE);
        self
    }

    /// Bound on serialized metadata size
    pub fn metadata_max_bytes(&self) -> usize {
        self.metadata_max_bytes
    }

    async fn connection(&self) -> BackendResult<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| format!("Failed to get Redis connection: {}", e).into())
    }

    fn serialize_metadata(&self, options: &PutOptions) -> BackendResult<Option<String>> {
        let Some(metadata) = &options.metadata else {
            return Ok(None);
        };
        let json = serde_json::to_string(metadata)?;
        if json.len() > self.metadata_max_bytes {
            return Err(format!(
                "metadata size {} exceeds maximum size {}",
                json.len(),
                self.metadata_max_bytes
            )
            .into());
        }
        Ok(Some(json))
    }
}

#[async_trait]
impl KvBackend for RedisKvBackend {
    async fn read(
        &self,
        key: &str,
        _representation: Representation,
        _options: &GetOptions,
    ) -> BackendResult<Option<StoredEntry>> {
        check_key(key)?;
        let mut conn = self.connection().await?;

        let (value, metadata): (Option<Vec<u8>>, Option<String>) = ::redis::cmd("HMGET")
            .arg(key)
            .arg(REDIS_VALUE_FIELD)
            .arg(REDIS_METADATA_FIELD)
            .query_async(&mut conn)
            .await
            .map_err(|e| format!("Redis HMGET failed: {}", e))?;

        let Some(value) = value else {
            return Ok(None);
        };
        let metadata: Option<serde_json::Value> = metadata
            .map(|m| serde_json::from_str(&m))
            .transpose()
            .map_err(|e| format!("stored metadata is not valid JSON: {}", e))?;

        Ok(Some(StoredEntry::new(value).with_metadata(metadata)))
    }

    async fn write(&self, key: &str, value: Bytes, options: &PutOptions) -> BackendResult<()> {
        check_key(key)?;
        let metadata = self.serialize_metadata(options)?;
        let mut conn = self.connection().await?;

        let mut pipe = ::redis::pipe();
        pipe.atomic();
        pipe.cmd("DEL").arg(key).ignore();
        pipe.cmd("HSET").arg(key).arg(REDIS_VALUE_FIELD).arg(value.as_ref());
        if let Some(metadata) = &metadata {
            pipe.arg(REDIS_METADATA_FIELD).arg(metadata);
        }
        pipe.ignore();
        // A relative TTL takes precedence over an absolute expiration.
        if let Some(ttl) = options.expiration_ttl {
            pipe.cmd("EXPIRE").arg(key).arg(ttl).ignore();
        } else if let Some(at) = options.expiration {
            pipe.cmd("EXPIREAT").arg(key).arg(at).ignore();
        }

        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(|e| format!("Redis HSET failed: {}", e))?;
        trace!(key, "redis backend write");
        Ok(())
    }

    async fn remove(&self, key: &str) -> BackendResult<()> {
        check_key(key)?;
        let mut conn = self.connection().await?;

        ::redis::cmd("DEL")
            .arg(key)
            .query_async::<i64>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| format!("Redis DEL failed: {}", e).into())
    }

    async fn enumerate(&self, options: &ListOptions) -> BackendResult<ListPage> {
        let cursor = options.cursor.as_deref().unwrap_or(SCAN_START);
        if cursor.parse::<u64>().is_err() {
            return Err(format!("invalid list cursor '{}'", cursor).into());
        }
        let limit = options
            .limit
            .unwrap_or(self.page_limit)
            .clamp(1, self.page_limit);
        let pattern = format!(
            "{}*",
            escape_glob(options.prefix.as_deref().unwrap_or_default())
        );
        let mut conn = self.connection().await?;

        let (next, names): (String, Vec<String>) = ::redis::cmd("SCAN")
            .arg(cursor)
            .arg("MATCH")
            .arg(&pattern)
            .arg("COUNT")
            .arg(limit)
            .query_async(&mut conn)
            .await
            .map_err(|e| format!("Redis SCAN failed: {}", e))?;

        let keys = if names.is_empty() {
            Vec::new()
        } else {
            let mut metadata_pipe = ::redis::pipe();
            let mut expiry_pipe = ::redis::pipe();
            for name in &names {
                metadata_pipe.cmd("HGET").arg(name).arg(REDIS_METADATA_FIELD);
                expiry_pipe.cmd("EXPIRETIME").arg(name);
            }
            let metadata: Vec<Option<String>> = metadata_pipe
                .query_async(&mut conn)
                .await
                .map_err(|e| format!("Redis HGET failed: {}", e))?;
            let expirations: Vec<i64> = expiry_pipe
                .query_async(&mut conn)
                .await
                .map_err(|e| format!("Redis EXPIRETIME failed: {}", e))?;

            names
                .into_iter()
                .zip(metadata)
                .zip(expirations)
                .map(|((name, metadata), expiration)| ListKey {
                    name,
                    expiration: u64::try_from(expiration).ok(),
                    metadata: metadata.and_then(|m| serde_json::from_str(&m).ok()),
                })
                .collect()
        };

        if next == SCAN_START {
            Ok(ListPage::complete(keys))
        } else {
            Ok(ListPage::partial(keys, next))
        }
    }

    fn backend_name(&self) -> &str {
        REDIS_BACKEND_NAME
    }
}

impl std::fmt::Debug for RedisKvBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKvBackend")
            .field("metadata_max_bytes", &self.metadata_max_bytes)
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

fn check_key(key: &str) -> BackendResult<()> {
    if key.is_empty() {
        return Err("key must not be empty".into());
    }
    Ok(())
}

/// Escape Redis glob metacharacters so a prefix matches literally
pub fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use typedkv_application::ports::registry::{KV_BACKENDS, KvBackendConfig, KvBackendEntry};

/// Factory function for creating Redis backend instances.
fn redis_backend_factory(config: &KvBackendConfig) -> Result<Arc<dyn KvBackend>, String> {
    let uri = config.uri.as_deref().unwrap_or(REDIS_DEFAULT_URI);

    let mut backend =
        RedisKvBackend::new(uri).map_err(|e| format!("Failed to create Redis backend: {e}"))?;
    if let Some(max_bytes) = config.metadata_max_bytes {
        backend = backend.with_metadata_max_bytes(max_bytes);
    }
    if let Some(limit) = config.list_page_limit {
        backend = backend.with_page_limit(limit);
    }

    Ok(Arc::new(backend))
}

#[linkme::distributed_slice(KV_BACKENDS)]
static REDIS_BACKEND: KvBackendEntry = KvBackendEntry {
    name: REDIS_BACKEND_NAME,
    description: "Redis server (live backend)",
    factory: redis_backend_factory,
};
