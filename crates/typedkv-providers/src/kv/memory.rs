//! In-memory key-value backend
//!
//! Ordered in-process map implementing the full backend contract, so facade
//! code can be exercised without a live store.
//!
//! ## Trade-offs
//!
//! - Expiration is recorded and reported by `enumerate`, never enforced
//! - Metadata size is not bounded
//! - `cache_ttl` hints are ignored
//!
//! Failures can be injected per operation to exercise error mapping:
//!
//! ```ignore
//! let backend = MemoryKvBackend::new();
//! backend.inject_failure(BackendOperation::Write, "disk full");
//! ```

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use bytes::Bytes;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::{Arc, RwLock};
use tracing::trace;
use typedkv_domain::constants::LIST_MAX_PAGE_SIZE;
use typedkv_domain::ports::{BackendError, BackendOperation, BackendResult, KvBackend};
use typedkv_domain::value_objects::{
    GetOptions, ListKey, ListOptions, ListPage, PutOptions, Representation, StoredEntry,
};

use crate::constants::MEMORY_BACKEND_NAME;

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: Bytes,
    metadata: Option<Value>,
    expiration: Option<u64>,
}

/// In-memory backend for tests
///
/// Clones share the same map.
#[derive(Clone)]
pub struct MemoryKvBackend {
    entries: Arc<RwLock<BTreeMap<String, MemoryEntry>>>,
    failures: Arc<RwLock<HashMap<BackendOperation, String>>>,
    page_limit: usize,
}

impl Default for MemoryKvBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryKvBackend {
    /// Create an empty backend with the default page limit
    pub fn new() -> Self {
        Self::with_page_limit(LIST_MAX_PAGE_SIZE)
    }

    /// Create an empty backend returning at most `page_limit` keys per page
    pub fn with_page_limit(page_limit: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
            page_limit: page_limit.clamp(1, LIST_MAX_PAGE_SIZE),
        }
    }

    /// Make every call of `operation` fail with `message` until cleared
    pub fn inject_failure<S: Into<String>>(&self, operation: BackendOperation, message: S) {
        if let Ok(mut failures) = self.failures.write() {
            failures.insert(operation, message.into());
        }
    }

    /// Remove all injected failures
    pub fn clear_failures(&self) {
        if let Ok(mut failures) = self.failures.write() {
            failures.clear();
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Whether no entries are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_failure(&self, operation: BackendOperation) -> BackendResult<()> {
        let failures = self.failures.read().map_err(|_| poisoned())?;
        match failures.get(&operation) {
            Some(message) => Err(format!("injected {} failure: {}", operation, message).into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl KvBackend for MemoryKvBackend {
    async fn read(
        &self,
        key: &str,
        _representation: Representation,
        _options: &GetOptions,
    ) -> BackendResult<Option<StoredEntry>> {
        self.check_failure(BackendOperation::Read)?;
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries
            .get(key)
            .map(|e| StoredEntry::new(e.value.clone()).with_metadata(e.metadata.clone())))
    }

    async fn write(&self, key: &str, value: Bytes, options: &PutOptions) -> BackendResult<()> {
        self.check_failure(BackendOperation::Write)?;
        let expiration = match options.expiration_ttl {
            Some(ttl) => Some(unix_now().saturating_add(ttl)),
            None => options.expiration,
        };
        let entry = MemoryEntry {
            value,
            metadata: options.metadata.clone(),
            expiration,
        };

        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), entry);
        trace!(key, "memory backend write");
        Ok(())
    }

    async fn remove(&self, key: &str) -> BackendResult<()> {
        self.check_failure(BackendOperation::Remove)?;
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }

    async fn enumerate(&self, options: &ListOptions) -> BackendResult<ListPage> {
        self.check_failure(BackendOperation::Enumerate)?;
        let limit = options
            .limit
            .unwrap_or(self.page_limit)
            .clamp(1, self.page_limit);
        let start = match &options.cursor {
            Some(cursor) => Bound::Excluded(decode_cursor(cursor)?),
            None => Bound::Unbounded,
        };
        let prefix = options.prefix.as_deref().unwrap_or("");

        let entries = self.entries.read().map_err(|_| poisoned())?;
        let mut keys: Vec<ListKey> = entries
            .range::<String, _>((start, Bound::Unbounded))
            .skip_while(|(name, _)| name.as_str() < prefix)
            .take_while(|(name, _)| name.starts_with(prefix))
            .take(limit + 1)
            .map(|(name, entry)| ListKey {
                name: name.clone(),
                expiration: entry.expiration,
                metadata: entry.metadata.clone(),
            })
            .collect();

        if keys.len() > limit {
            keys.truncate(limit);
            let cursor = keys
                .last()
                .map(|k| encode_cursor(&k.name))
                .unwrap_or_default();
            Ok(ListPage::partial(keys, cursor))
        } else {
            Ok(ListPage::complete(keys))
        }
    }

    fn backend_name(&self) -> &str {
        MEMORY_BACKEND_NAME
    }
}

impl std::fmt::Debug for MemoryKvBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryKvBackend")
            .field("entries", &self.len())
            .field("page_limit", &self.page_limit)
            .finish()
    }
}

fn poisoned() -> BackendError {
    "memory backend lock poisoned".into()
}

fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}

fn encode_cursor(last_key: &str) -> String {
    URL_SAFE_NO_PAD.encode(last_key.as_bytes())
}

fn decode_cursor(cursor: &str) -> BackendResult<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|e| format!("invalid list cursor '{}': {}", cursor, e))?;
    String::from_utf8(bytes).map_err(|e| format!("invalid list cursor '{}': {}", cursor, e).into())
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use typedkv_application::ports::registry::{KV_BACKENDS, KvBackendConfig, KvBackendEntry};

#[linkme::distributed_slice(KV_BACKENDS)]
static MEMORY_BACKEND: KvBackendEntry = KvBackendEntry {
    name: MEMORY_BACKEND_NAME,
    description: "In-process ordered map (tests, no expiration enforcement)",
    factory: |config: &KvBackendConfig| {
        let backend = match config.list_page_limit {
            Some(limit) => MemoryKvBackend::with_page_limit(limit),
            None => MemoryKvBackend::new(),
        };
        Ok(Arc::new(backend))
    },
};
