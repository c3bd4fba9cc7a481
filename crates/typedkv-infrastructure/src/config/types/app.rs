//! Application configuration root

use serde::{Deserialize, Serialize};

use super::{KvConfig, LoggingConfig};

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Key-value backend selection
    pub kv: KvConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
