//! One page of a key-space enumeration

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A key as reported by `list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListKey {
    /// Key name
    pub name: String,
    /// Absolute expiration (seconds since epoch), if the entry has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u64>,
    /// Metadata stored with the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ListKey {
    /// A key with no expiration and no metadata
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            expiration: None,
            metadata: None,
        }
    }
}

/// One page of `list` results
///
/// Callers loop, feeding `cursor` back in, until `list_complete` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    /// Keys in this page, in backend order
    pub keys: Vec<ListKey>,
    /// Cursor for the next page; `None` once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Whether this is the last page
    pub list_complete: bool,
}

impl ListPage {
    /// Final page holding the given keys
    pub fn complete(keys: Vec<ListKey>) -> Self {
        Self {
            keys,
            cursor: None,
            list_complete: true,
        }
    }

    /// Intermediate page continuing at `cursor`
    pub fn partial(keys: Vec<ListKey>, cursor: String) -> Self {
        Self {
            keys,
            cursor: Some(cursor),
            list_complete: false,
        }
    }

    /// Key names in this page
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name.as_str())
    }
}
