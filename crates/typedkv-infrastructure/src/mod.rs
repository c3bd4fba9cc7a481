//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the key-value facades.
//!
//! ## Module Categories
//!
//! ### Configuration & Assembly
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Layered configuration (defaults, TOML, environment) via figment |
//! | [`di`] | Backend resolution and the `AppContext` composition root |
//! | [`constants`] | Configuration file names and environment prefixes |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error`] | Infrastructure error type |
//! | [`error_ext`] | Context extension for foreign errors |

// Keep backend registrations linked into every binary using this crate
extern crate typedkv_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, KvConfig, LoggingConfig};
pub use di::{AppContext, init_app, init_test_app};
pub use error::{InfraError, InfraResult};
pub use error_ext::ErrorContext;
