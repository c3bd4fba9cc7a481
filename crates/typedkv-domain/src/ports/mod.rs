//! Ports
//!
//! Contracts the application layer depends on and adapters implement.

pub mod backend;
pub mod schema;

pub use backend::{BackendError, BackendOperation, BackendResult, KvBackend};
pub use schema::{SchemaError, ValidationSchema};
