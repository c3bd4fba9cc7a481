//! Facade services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`KvStore`] | Raw text/bytes/stream/JSON access |
//! | [`SchemaStore`] | Typed access through a `ValidationSchema` |

pub mod kv_store;
pub mod schema_store;

pub use kv_store::KvStore;
pub use schema_store::SchemaStore;
