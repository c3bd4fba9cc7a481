//! Serde-only schema

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use typedkv_domain::ports::{SchemaError, ValidationSchema};

/// Schema that accepts whatever `T` deserializes from
pub struct SerdeSchema<T> {
    identifier: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeSchema<T> {
    /// Schema without an identifier
    pub fn new() -> Self {
        Self {
            identifier: None,
            _marker: PhantomData,
        }
    }

    /// Set the advisory identifier recorded in metadata
    pub fn with_identifier<S: Into<String>>(mut self, identifier: S) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

impl<T> Default for SerdeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValidationSchema for SerdeSchema<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    type Value = T;

    fn decode(&self, raw: Value) -> Result<T, SchemaError> {
        serde_json::from_value(raw).map_err(|e| SchemaError::with_source(e.to_string(), e))
    }

    fn encode(&self, value: &T) -> Result<Value, SchemaError> {
        serde_json::to_value(value).map_err(|e| SchemaError::with_source(e.to_string(), e))
    }

    fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}
