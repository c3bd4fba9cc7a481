//! Serde schema with `validator` rules
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Validate)]
//! struct User {
//!     id: u64,
//!     #[validate(length(min = 1))]
//!     name: String,
//!     #[validate(email)]
//!     email: String,
//! }
//!
//! let users = binding.resolve_typed(ValidatedSchema::<User>::new().with_identifier("user/v1"));
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::marker::PhantomData;
use typedkv_domain::ports::{SchemaError, ValidationSchema};
use validator::Validate;

/// Schema that deserializes `T` and then runs its `Validate` rules
///
/// Rules are checked in both directions: a value that violates them can be
/// neither read nor written.
pub struct ValidatedSchema<T> {
    identifier: Option<String>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ValidatedSchema<T> {
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

impl<T> Default for ValidatedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ValidationSchema for ValidatedSchema<T>
where
    T: Serialize + DeserializeOwned + Validate + Send + Sync,
{
    type Value = T;

    fn decode(&self, raw: Value) -> Result<T, SchemaError> {
        let value: T =
            serde_json::from_value(raw).map_err(|e| SchemaError::with_source(e.to_string(), e))?;
        value
            .validate()
            .map_err(|e| SchemaError::with_source(e.to_string(), e))?;
        Ok(value)
    }

    fn encode(&self, value: &T) -> Result<Value, SchemaError> {
        value
            .validate()
            .map_err(|e| SchemaError::with_source(e.to_string(), e))?;
        serde_json::to_value(value).map_err(|e| SchemaError::with_source(e.to_string(), e))
    }

    fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}
