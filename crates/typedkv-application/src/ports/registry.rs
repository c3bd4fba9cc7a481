//! Key-Value Backend Registry
//!
//! Auto-registration system for backend adapters. Adapters submit an entry to
//! the [`KV_BACKENDS`] distributed slice at compile time; the composition root
//! resolves one by name at program assembly time.
//!
//! ```text
//! #[linkme::distributed_slice(KV_BACKENDS)]   (typedkv-providers)
//!                  ↓
//! resolve_kv_backend(&config)                 (typedkv-infrastructure)
//!                  ↓
//! Arc<dyn KvBackend> → KvBinding
//! ```

use std::sync::Arc;

use typedkv_domain::ports::KvBackend;

/// Configuration for backend creation
///
/// Contains every option a backend might need. Backends use what they need
/// and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct KvBackendConfig {
    /// Backend name (e.g., "memory", "redis")
    pub backend: String,
    /// Connection URI (for networked backends)
    pub uri: Option<String>,
    /// Upper bound on serialized metadata size
    pub metadata_max_bytes: Option<usize>,
    /// Upper bound on keys per list page
    pub list_page_limit: Option<usize>,
}

impl KvBackendConfig {
    /// Create a new config with the given backend name
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the metadata size bound
    pub fn with_metadata_max_bytes(mut self, max_bytes: usize) -> Self {
        self.metadata_max_bytes = Some(max_bytes);
        self
    }

    /// Set the list page bound
    pub fn with_list_page_limit(mut self, limit: usize) -> Self {
        self.list_page_limit = Some(limit);
        self
    }
}

/// Registry entry for backend adapters
pub struct KvBackendEntry {
    /// Unique backend name (e.g., "memory", "redis")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a backend instance
    pub factory: fn(&KvBackendConfig) -> Result<Arc<dyn KvBackend>, String>,
}

/// Backends submit entries here at compile time
#[linkme::distributed_slice]
pub static KV_BACKENDS: [KvBackendEntry] = [..];

/// Resolve a backend by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn KvBackend>)` - Created backend instance
/// * `Err(String)` - Backend not found or creation failed
pub fn resolve_kv_backend(config: &KvBackendConfig) -> Result<Arc<dyn KvBackend>, String> {
    if let Some(entry) = KV_BACKENDS.iter().find(|e| e.name == config.backend) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = KV_BACKENDS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown key-value backend '{}'. Available backends: {:?}",
        config.backend, available
    ))
}

/// List all registered backends as (name, description) pairs
pub fn list_kv_backends() -> Vec<(&'static str, &'static str)> {
    KV_BACKENDS.iter().map(|e| (e.name, e.description)).collect()
}
