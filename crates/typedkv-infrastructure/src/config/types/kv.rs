//! Key-value backend configuration types

use crate::constants::DEFAULT_KV_BACKEND;
use serde::{Deserialize, Serialize};
use typedkv_application::ports::registry::KvBackendConfig;
use typedkv_domain::constants::{LIST_MAX_PAGE_SIZE, METADATA_DEFAULT_MAX_BYTES};

/// Backend selection and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KvConfig {
    /// Registered backend name ("memory", "redis")
    pub backend: String,

    /// Connection URL, required for the redis backend
    pub redis_url: Option<String>,

    /// Upper bound on serialized metadata size (bytes)
    pub metadata_max_bytes: usize,

    /// Upper bound on keys returned per list page
    pub list_page_limit: usize,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            backend: DEFAULT_KV_BACKEND.to_string(),
            redis_url: None,
            metadata_max_bytes: METADATA_DEFAULT_MAX_BYTES,
            list_page_limit: LIST_MAX_PAGE_SIZE,
        }
    }
}

impl KvConfig {
    /// Registry request for this configuration
    pub fn to_backend_config(&self) -> KvBackendConfig {
        let config = KvBackendConfig::new(&self.backend)
            .with_metadata_max_bytes(self.metadata_max_bytes)
            .with_list_page_limit(self.list_page_limit);
        match &self.redis_url {
            Some(url) => config.with_uri(url),
            None => config,
        }
    }
}
