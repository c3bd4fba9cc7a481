//! # typedkv
//!
//! Typed facade over eventually-consistent key-value stores.
//!
//! - Raw operations (`get`, `get_json`, `get_array_buffer`, `get_stream`,
//!   `put`, `put_json`, `delete`, `list`, `get_or_fail`, `get_or_else`) where
//!   absence is `None` and every failure is one of five taxonomy kinds
//! - A schema-validated facade folding validation errors into the same kinds
//! - Capability resolution: code asks a [`KvCapability`] for `resolve_raw()`
//!   or `resolve_typed(schema)`; the program's edge decides which backend
//!   is bound
//!
//! ## Example
//!
//! ```ignore
//! use typedkv::prelude::*;
//!
//! #[derive(Serialize, Deserialize, Validate)]
//! struct User {
//!     #[validate(email)]
//!     email: String,
//! }
//!
//! let context = typedkv::infrastructure::init_test_app();
//! let users = context.resolve_typed(ValidatedSchema::<User>::new());
//! users.put("user:1", &user, PutOptions::default()).await?;
//! ```

pub mod cli;

/// Domain layer - taxonomy, value objects, port traits
pub mod domain {
    pub use typedkv_domain::*;
}

/// Application layer - facades, schemas, capability binding
pub mod application {
    pub use typedkv_application::*;
}

/// Infrastructure layer - configuration, logging, composition root
pub mod infrastructure {
    pub use typedkv_infrastructure::*;
}

/// Backend implementations
pub mod providers {
    pub use typedkv_providers::*;
}

pub use typedkv_application::{KvBinding, KvCapability, KvStore, SchemaStore};
pub use typedkv_domain::error::{
    DeleteFailure, GetFailure, GetOrFailError, KeyNotFound, KvError, ListFailure, PutFailure,
};

/// Commonly used items
pub mod prelude {
    pub use typedkv_application::schema::{JsonSchemaCodec, SerdeSchema, ValidatedSchema};
    pub use typedkv_application::{KvBinding, KvCapability, KvStore, SchemaStore};
    pub use typedkv_domain::error::{
        DeleteFailure, GetFailure, GetOrFailError, KeyNotFound, KvError, ListFailure, PutFailure,
    };
    pub use typedkv_domain::ports::ValidationSchema;
    pub use typedkv_domain::value_objects::{
        GetOptions, KvValue, ListKey, ListOptions, ListPage, PutOptions,
    };
}
