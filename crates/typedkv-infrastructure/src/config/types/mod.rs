//! Configuration types

mod app;
mod kv;
mod logging;

pub use app::AppConfig;
pub use kv::KvConfig;
pub use logging::LoggingConfig;
