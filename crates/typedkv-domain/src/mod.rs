//! # typedkv Domain Layer
//!
//! Types shared by every other layer of the typed key-value facade.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Closed error taxonomy (`GetFailure`, `PutFailure`, ...) |
//! | [`value_objects`] | Read/write/list options, list pages, stored values |
//! | [`ports`] | `KvBackend` capability contract and `ValidationSchema` |
//! | [`constants`] | Backend contract limits |
//!
//! The domain has no knowledge of concrete backends; adapters live in
//! `typedkv-providers` and are selected at program assembly time.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{
    Cause, DeleteFailure, ErrorKind, GetFailure, GetOrFailError, KeyNotFound, KvError, KvResult,
    ListFailure, PutFailure,
};
