//! Raw key-value facade
//!
//! One operation per backend capability. Every read returns `Option<T>`
//! (absence is not an error), every failure is mapped into exactly one
//! taxonomy kind at this boundary, and each operation's error type is the
//! narrowest one covering it.
//!
//! ## Example
//!
//! ```ignore
//! use typedkv_application::KvStore;
//! use typedkv_domain::value_objects::{GetOptions, PutOptions};
//!
//! store.put("greeting", "hello", PutOptions::default()).await?;
//! let value = store.get("greeting", GetOptions::default()).await?;
//! assert_eq!(value.as_deref(), Some("hello"));
//! ```

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};
use typedkv_domain::error::{
    Cause, DeleteFailure, GetFailure, GetOrFailError, KeyNotFound, ListFailure, PutFailure,
};
use typedkv_domain::ports::{BackendError, KvBackend};
use typedkv_domain::value_objects::{
    ByteStream, GetOptions, KvValue, ListKey, ListOptions, ListPage, PutOptions, Representation,
    StoredEntry,
};

/// Raw facade over the currently bound backend
///
/// Cloning is cheap; all clones share the same backend handle.
#[derive(Clone, Debug)]
pub struct KvStore {
    backend: Arc<dyn KvBackend>,
}

// Construction
impl KvStore {
    /// Create a facade over a backend
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        Self { backend }
    }

    /// Create a facade over an owned backend
    pub fn from_backend<B: KvBackend + 'static>(backend: B) -> Self {
        Self::new(Arc::new(backend))
    }

    /// Shared handle to the backend
    pub fn backend(&self) -> Arc<dyn KvBackend> {
        Arc::clone(&self.backend)
    }

    /// Name of the bound backend
    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }
}

// Reads
impl KvStore {
    async fn read_entry(
        &self,
        key: &str,
        representation: Representation,
        options: &GetOptions,
    ) -> Result<Option<StoredEntry>, GetFailure> {
        debug!(key, %representation, backend = self.backend_name(), "kv read");
        self.backend
            .read(key, representation, options)
            .await
            .map_err(|e| backend_get_failure(key, e))
    }

    /// Read a value as UTF-8 text
    pub async fn get(&self, key: &str, options: GetOptions) -> Result<Option<String>, GetFailure> {
        match self.read_entry(key, Representation::Text, &options).await? {
            Some(entry) => decode_text(key, entry.value).map(Some),
            None => Ok(None),
        }
    }

    /// Read a value as text together with its metadata
    pub async fn get_with_metadata(
        &self,
        key: &str,
        options: GetOptions,
    ) -> Result<Option<(String, Option<Value>)>, GetFailure> {
        match self.read_entry(key, Representation::Text, &options).await? {
            Some(entry) => {
                let text = decode_text(key, entry.value)?;
                Ok(Some((text, entry.metadata)))
            }
            None => Ok(None),
        }
    }

    /// Read a value and parse it as JSON
    ///
    /// A parse failure is a [`GetFailure`], not a separate decode error.
    pub async fn get_json<T>(&self, key: &str, options: GetOptions) -> Result<Option<T>, GetFailure>
    where
        T: DeserializeOwned,
    {
        match self.read_entry(key, Representation::Json, &options).await? {
            Some(entry) => serde_json::from_slice(&entry.value).map(Some).map_err(|e| {
                GetFailure::new(
                    key,
                    Cause::with_source(format!("failed to parse stored JSON: {}", e), e),
                )
            }),
            None => Ok(None),
        }
    }

    /// Read a value as raw bytes
    pub async fn get_array_buffer(
        &self,
        key: &str,
        options: GetOptions,
    ) -> Result<Option<Bytes>, GetFailure> {
        Ok(self
            .read_entry(key, Representation::ArrayBuffer, &options)
            .await?
            .map(|entry| entry.value))
    }

    /// Read a value as a byte stream
    pub async fn get_stream(
        &self,
        key: &str,
        options: GetOptions,
    ) -> Result<Option<ByteStream>, GetFailure> {
        debug!(key, representation = %Representation::Stream, backend = self.backend_name(), "kv read");
        self.backend
            .read_stream(key, &options)
            .await
            .map_err(|e| backend_get_failure(key, e))
    }

    /// Read a value that must exist
    ///
    /// Absence becomes [`KeyNotFound`]; every other failure is [`GetFailure`].
    pub async fn get_or_fail(&self, key: &str, options: GetOptions) -> Result<String, GetOrFailError> {
        self.get(key, options)
            .await?
            .ok_or_else(|| KeyNotFound::new(key).into())
    }

    /// Read a value, substituting `default` when absent
    pub async fn get_or_else<D>(
        &self,
        key: &str,
        default: D,
        options: GetOptions,
    ) -> Result<String, GetFailure>
    where
        D: Into<String>,
    {
        Ok(self
            .get(key, options)
            .await?
            .unwrap_or_else(|| default.into()))
    }
}

// Writes
impl KvStore {
    /// Store text, bytes or a byte stream under `key`
    ///
    /// Streams are drained before the backend write; a stream error is a
    /// [`PutFailure`].
    pub async fn put<V>(&self, key: &str, value: V, options: PutOptions) -> Result<(), PutFailure>
    where
        V: Into<KvValue>,
    {
        let value = value.into();
        debug!(key, kind = value.kind(), backend = self.backend_name(), "kv write");
        let bytes = value.into_bytes().await.map_err(|e| {
            PutFailure::new(
                key,
                Cause::with_source(format!("failed to read value stream: {}", e), e),
            )
        })?;
        self.write_bytes(key, bytes, &options).await
    }

    /// Serialize `value` to JSON and store it under `key`
    pub async fn put_json<T>(&self, key: &str, value: &T, options: PutOptions) -> Result<(), PutFailure>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_vec(value).map_err(|e| {
            PutFailure::new(
                key,
                Cause::with_source(format!("failed to serialize value: {}", e), e),
            )
        })?;
        debug!(key, kind = "json", backend = self.backend_name(), "kv write");
        self.write_bytes(key, Bytes::from(json), &options).await
    }

    async fn write_bytes(&self, key: &str, bytes: Bytes, options: &PutOptions) -> Result<(), PutFailure> {
        self.backend.write(key, bytes, options).await.map_err(|e| {
            warn!(key, backend = self.backend_name(), error = %e, "kv write failed");
            PutFailure::new(key, Cause::from_error(e))
        })
    }

    /// Remove `key`
    ///
    /// Succeeds when the key is already absent.
    pub async fn delete(&self, key: &str) -> Result<(), DeleteFailure> {
        debug!(key, backend = self.backend_name(), "kv delete");
        self.backend.remove(key).await.map_err(|e| {
            warn!(key, backend = self.backend_name(), error = %e, "kv delete failed");
            DeleteFailure::new(key, Cause::from_error(e))
        })
    }
}

// Enumeration
impl KvStore {
    /// Fetch one page of keys
    ///
    /// Callers loop, passing the returned cursor back in, until
    /// `list_complete` is set. See [`KvStore::list_all`].
    pub async fn list(&self, options: ListOptions) -> Result<ListPage, ListFailure> {
        debug!(
            prefix = options.prefix.as_deref(),
            limit = options.limit,
            backend = self.backend_name(),
            "kv list"
        );
        let page = self.backend.enumerate(&options).await.map_err(|e| {
            warn!(prefix = options.prefix.as_deref(), backend = self.backend_name(), error = %e, "kv list failed");
            ListFailure::new(options.prefix.clone(), Cause::from_error(e))
        })?;

        if !page.list_complete && page.cursor.is_none() {
            return Err(ListFailure::new(
                options.prefix,
                Cause::new("backend returned an incomplete page without a cursor"),
            ));
        }
        Ok(page)
    }

    /// Follow cursors until the listing is complete and return every key
    ///
    /// Backends may repeat a key across pages; each name appears once, at its
    /// first position.
    pub async fn list_all(&self, options: ListOptions) -> Result<Vec<ListKey>, ListFailure> {
        let mut keys = Vec::new();
        let mut seen = HashSet::new();
        let mut request = options;
        loop {
            let page = self.list(request.clone()).await?;
            keys.extend(
                page.keys
                    .into_iter()
                    .filter(|key| seen.insert(key.name.clone())),
            );
            match page.cursor {
                Some(cursor) if !page.list_complete => request.cursor = Some(cursor),
                _ => return Ok(keys),
            }
        }
    }
}

fn backend_get_failure(key: &str, error: BackendError) -> GetFailure {
    warn!(key, error = %error, "kv read failed");
    GetFailure::new(key, Cause::from_error(error))
}

fn decode_text(key: &str, bytes: Bytes) -> Result<String, GetFailure> {
    String::from_utf8(bytes.to_vec()).map_err(|e| {
        GetFailure::new(
            key,
            Cause::with_source("stored value is not valid UTF-8", e),
        )
    })
}
