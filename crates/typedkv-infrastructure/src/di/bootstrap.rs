//! Composition Root
//!
//! Binds exactly one backend per program run. Production code calls
//! [`init_app`] with loaded configuration; tests call [`init_test_app`] and
//! get a fresh in-memory backend. Business logic only ever sees the
//! resulting [`KvBinding`] through `KvCapability`.
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let users = context.binding().resolve_typed(ValidatedSchema::<User>::new());
//! ```

use std::sync::Arc;

use tracing::info;
use typedkv_application::{KvBinding, KvCapability, KvStore};
use typedkv_providers::kv::MemoryKvBackend;

use crate::config::AppConfig;
use crate::di::resolver::resolve_backend;
use crate::error::InfraResult;

/// Application context holding configuration and the bound backend
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    binding: KvBinding,
}

impl AppContext {
    /// The backend binding for this run
    pub fn binding(&self) -> &KvBinding {
        &self.binding
    }

    /// Consume the context, keeping only the binding
    pub fn into_binding(self) -> KvBinding {
        self.binding
    }
}

impl KvCapability for AppContext {
    fn resolve_raw(&self) -> KvStore {
        self.binding.resolve_raw()
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> InfraResult<AppContext> {
    let backend = resolve_backend(&config.kv)?;
    let binding = KvBinding::new(backend);
    info!(backend = binding.backend_name(), "typedkv initialized");

    Ok(AppContext {
        config: Arc::new(config),
        binding,
    })
}

/// Build an application context over a fresh in-memory backend
pub fn init_test_app() -> AppContext {
    AppContext {
        config: Arc::new(AppConfig::default()),
        binding: KvBinding::new(Arc::new(MemoryKvBackend::new())),
    }
}
