//! Ready-made validation schemas
//!
//! | Schema | Validation |
//! |--------|------------|
//! | [`SerdeSchema`] | Shape only, via serde |
//! | [`ValidatedSchema`] | Shape via serde plus `validator::Validate` rules |
//! | [`JsonSchemaCodec`] | JSON Schema document, then serde |
//!
//! Callers with other needs implement `ValidationSchema` directly.

pub mod json_schema;
pub mod serde_schema;
pub mod validated;

pub use json_schema::JsonSchemaCodec;
pub use serde_schema::SerdeSchema;
pub use validated::ValidatedSchema;
