//! Backend resolution and composition root
//!
//! ```text
//! AppConfig.kv → resolve_backend → KV_BACKENDS (linkme) → Arc<dyn KvBackend>
//!                                                               ↓
//!                                                  AppContext { KvBinding }
//! ```

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, init_app, init_test_app};
pub use resolver::{available_backends, resolve_backend};
