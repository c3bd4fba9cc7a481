//! Capability resolution
//!
//! Business logic declares that it needs key-value access by taking a
//! [`KvCapability`] instead of a concrete backend. The program's outer edge
//! creates one [`KvBinding`] per run (live backend in production, in-memory
//! backend in tests) and hands it in.
//!
//! Two named resolution functions:
//!
//! - [`KvCapability::resolve_raw`] - the raw facade over the bound backend
//! - [`KvCapability::resolve_typed`] - a schema-validated facade built on it
//!
//! ## Example
//!
//! ```ignore
//! async fn remember_user<C: KvCapability>(kv: &C, user: &User) -> Result<(), PutFailure> {
//!     let users = kv.resolve_typed(ValidatedSchema::<User>::new());
//!     users.put(&format!("user:{}", user.id), user, PutOptions::default()).await
//! }
//!
//! // production
//! let binding = KvBinding::new(resolve_kv_backend(&config)?);
//! // tests
//! let binding = KvBinding::new(Arc::new(MemoryKvBackend::new()));
//!
//! binding.run(|kv| async move { remember_user(&kv, &user).await }).await?;
//! ```

use std::future::Future;
use std::sync::Arc;
use tracing::debug;
use typedkv_domain::ports::{KvBackend, ValidationSchema};

use crate::services::{KvStore, SchemaStore};

/// Something that can hand out key-value facades
pub trait KvCapability {
    /// Resolve the raw facade
    fn resolve_raw(&self) -> KvStore;

    /// Resolve a schema-validated facade over the raw facade
    fn resolve_typed<S: ValidationSchema>(&self, schema: S) -> SchemaStore<S> {
        SchemaStore::new(self.resolve_raw(), schema)
    }
}

/// The backend bound for one program run
///
/// The binding is fixed at construction; there is no way to swap the backend
/// of an existing binding.
#[derive(Clone, Debug)]
pub struct KvBinding {
    store: KvStore,
}

impl KvBinding {
    /// Bind a backend
    pub fn new(backend: Arc<dyn KvBackend>) -> Self {
        debug!(backend = backend.backend_name(), "kv backend bound");
        Self {
            store: KvStore::new(backend),
        }
    }

    /// Name of the bound backend
    pub fn backend_name(&self) -> &str {
        self.store.backend_name()
    }

    /// Run a computation against this binding
    pub async fn run<F, Fut, T>(self, program: F) -> T
    where
        F: FnOnce(KvBinding) -> Fut,
        Fut: Future<Output = T>,
    {
        program(self).await
    }
}

impl KvCapability for KvBinding {
    fn resolve_raw(&self) -> KvStore {
        self.store.clone()
    }
}

impl KvCapability for KvStore {
    fn resolve_raw(&self) -> KvStore {
        self.clone()
    }
}
