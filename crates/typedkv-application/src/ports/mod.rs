//! Application ports
//!
//! The backend trait itself lives in `typedkv_domain::ports`; this module
//! holds the registry adapters submit themselves to.

pub mod registry;

pub use registry::{
    KV_BACKENDS, KvBackendConfig, KvBackendEntry, list_kv_backends, resolve_kv_backend,
};
