//! JSON Schema backed codec
//!
//! Validates untyped JSON against a compiled JSON Schema document, then
//! deserializes it into `T`. Use `T = serde_json::Value` to keep values
//! untyped while still enforcing the document.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use typedkv_domain::ports::{SchemaError, ValidationSchema};

/// Codec checking values against a JSON Schema document
pub struct JsonSchemaCodec<T> {
    validator: Arc<jsonschema::Validator>,
    identifier: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSchemaCodec<T> {
    /// Compile a schema document
    ///
    /// The document's `$id`, if present, becomes the advisory identifier.
    pub fn new(schema: &Value) -> Result<Self, SchemaError> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::new(format!("invalid JSON Schema: {}", e)))?;
        let identifier = schema
            .get("$id")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            validator: Arc::new(validator),
            identifier,
            _marker: PhantomData,
        })
    }

    /// Override the advisory identifier
    pub fn with_identifier<S: Into<String>>(mut self, identifier: S) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    fn check(&self, instance: &Value) -> Result<(), SchemaError> {
        let errors: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::new(errors.join("; ")))
        }
    }
}

impl<T> Clone for JsonSchemaCodec<T> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            identifier: self.identifier.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> ValidationSchema for JsonSchemaCodec<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    type Value = T;

    fn decode(&self, raw: Value) -> Result<T, SchemaError> {
        self.check(&raw)?;
        serde_json::from_value(raw).map_err(|e| SchemaError::with_source(e.to_string(), e))
    }

    fn encode(&self, value: &T) -> Result<Value, SchemaError> {
        let encoded =
            serde_json::to_value(value).map_err(|e| SchemaError::with_source(e.to_string(), e))?;
        self.check(&encoded)?;
        Ok(encoded)
    }

    fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}
