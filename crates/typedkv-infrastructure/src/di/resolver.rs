//! Dynamic Backend Resolver
//!
//! Turns the `kv` configuration section into a backend instance by looking
//! the configured name up in the registry. No knowledge of concrete
//! backends lives here.

use std::sync::Arc;

use tracing::{debug, error};
use typedkv_application::ports::registry::{list_kv_backends, resolve_kv_backend};
use typedkv_domain::ports::KvBackend;

use crate::config::KvConfig;
use crate::error::{InfraError, InfraResult};

/// Resolve the configured backend
pub fn resolve_backend(config: &KvConfig) -> InfraResult<Arc<dyn KvBackend>> {
    debug!(backend = %config.backend, "resolving kv backend");
    resolve_kv_backend(&config.to_backend_config()).map_err(|message| {
        error!(backend = %config.backend, %message, "kv backend resolution failed");
        InfraError::backend(message)
    })
}

/// Names and descriptions of every linked backend
pub fn available_backends() -> Vec<(&'static str, &'static str)> {
    list_kv_backends()
}
