//! # typedkv Application Layer
//!
//! Facades over the key-value backend port and the mechanism that binds a
//! concrete backend to a program run.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`services`] | `KvStore` (raw facade) and `SchemaStore` (schema-validated facade) |
//! | [`schema`] | Ready-made `ValidationSchema` implementations |
//! | [`capability`] | `KvCapability` resolution and the per-run `KvBinding` |
//! | [`ports`] | Backend registry populated by adapters via linkme |
//!
//! ## Flow
//!
//! ```text
//! caller → SchemaStore ──► KvStore ──► Arc<dyn KvBackend> (memory | redis)
//!             │                │
//!             └── taxonomy ◄───┘   GetFailure / PutFailure / DeleteFailure /
//!                                  ListFailure / KeyNotFound
//! ```

pub mod capability;
pub mod ports;
pub mod schema;
pub mod services;

pub use capability::{KvBinding, KvCapability};
pub use services::{KvStore, SchemaStore};
