//! Schema-validated key-value facade
//!
//! Wraps a [`KvStore`] with a [`ValidationSchema`]. Values are encoded before
//! they are stored and decoded on read; schema failures are reported through
//! the same taxonomy as transport failures:
//!
//! | Failure | Reported as |
//! |---------|-------------|
//! | encode on `put` | `PutFailure` ("encoding failed: ...") |
//! | decode on read | `GetFailure` ("validation failed: ...") |
//! | encode of a `get_or_else` default | `GetFailure` ("encoding failed: ...") |

use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;
use typedkv_domain::constants::SCHEMA_METADATA_FIELD;
use typedkv_domain::error::{Cause, GetFailure, GetOrFailError, KeyNotFound, PutFailure};
use typedkv_domain::ports::{SchemaError, ValidationSchema};
use typedkv_domain::value_objects::{GetOptions, PutOptions};

use super::KvStore;

/// Typed facade over a [`KvStore`]
pub struct SchemaStore<S: ValidationSchema> {
    raw: KvStore,
    schema: Arc<S>,
}

impl<S: ValidationSchema> Clone for SchemaStore<S> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            schema: Arc::clone(&self.schema),
        }
    }
}

impl<S: ValidationSchema> std::fmt::Debug for SchemaStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaStore")
            .field("backend", &self.raw.backend_name())
            .field("schema", &self.schema.identifier())
            .finish()
    }
}

impl<S: ValidationSchema> SchemaStore<S> {
    /// Build a typed facade on top of a raw facade
    pub fn new(raw: KvStore, schema: S) -> Self {
        Self {
            raw,
            schema: Arc::new(schema),
        }
    }

    /// The raw facade this store delegates to
    pub fn raw(&self) -> &KvStore {
        &self.raw
    }

    /// The schema values are validated against
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Read and decode a value
    pub async fn get(&self, key: &str, options: GetOptions) -> Result<Option<S::Value>, GetFailure> {
        match self.raw.get_json::<Value>(key, options).await? {
            Some(raw) => self.decode(key, raw).map(Some),
            None => Ok(None),
        }
    }

    /// Read and decode a value that must exist
    ///
    /// Absence is reported before any decoding is attempted.
    pub async fn get_or_fail(
        &self,
        key: &str,
        options: GetOptions,
    ) -> Result<S::Value, GetOrFailError> {
        let raw = self
            .raw
            .get_json::<Value>(key, options)
            .await?
            .ok_or_else(|| KeyNotFound::new(key))?;
        Ok(self.decode(key, raw)?)
    }

    /// Read and decode a value, substituting `default` when absent
    ///
    /// The default goes through encode-then-decode before it is returned, so
    /// a default that does not satisfy the schema is a [`GetFailure`].
    pub async fn get_or_else(
        &self,
        key: &str,
        default: S::Value,
        options: GetOptions,
    ) -> Result<S::Value, GetFailure> {
        match self.raw.get_json::<Value>(key, options).await? {
            Some(raw) => self.decode(key, raw),
            None => {
                debug!(key, "kv typed read absent, validating default");
                let encoded = self
                    .schema
                    .encode(&default)
                    .map_err(|e| GetFailure::new(key, schema_cause("encoding failed", e)))?;
                self.decode(key, encoded)
            }
        }
    }

    /// Encode and store a value
    pub async fn put(&self, key: &str, value: &S::Value, options: PutOptions) -> Result<(), PutFailure> {
        let encoded = self
            .schema
            .encode(value)
            .map_err(|e| PutFailure::new(key, schema_cause("encoding failed", e)))?;
        let options = self.stamp_schema(options);
        self.raw.put_json(key, &encoded, options).await
    }

    fn decode(&self, key: &str, raw: Value) -> Result<S::Value, GetFailure> {
        self.schema
            .decode(raw)
            .map_err(|e| GetFailure::new(key, schema_cause("validation failed", e)))
    }

    // Object metadata gains the identifier; non-object metadata is left as-is.
    fn stamp_schema(&self, mut options: PutOptions) -> PutOptions {
        let Some(id) = self.schema.identifier() else {
            return options;
        };
        match options.metadata.as_mut() {
            None => {
                let mut map = Map::new();
                map.insert(SCHEMA_METADATA_FIELD.to_string(), Value::String(id.to_string()));
                options.metadata = Some(Value::Object(map));
            }
            Some(Value::Object(map)) => {
                map.insert(SCHEMA_METADATA_FIELD.to_string(), Value::String(id.to_string()));
            }
            Some(_) => {}
        }
        options
    }
}

fn schema_cause(stage: &str, error: SchemaError) -> Cause {
    let (message, source) = error.into_parts();
    let message = format!("{}: {}", stage, message);
    match source {
        Some(source) => Cause::with_source(message, source),
        None => Cause::new(message),
    }
}
