//! Infrastructure layer constants
//!
//! Domain limits live in `typedkv_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "typedkv.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "typedkv";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TYPEDKV";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// BACKEND CONSTANTS
// ============================================================================

/// Backend used when none is configured
pub const DEFAULT_KV_BACKEND: &str = "memory";

/// Backend name that requires a connection URL
pub const REDIS_KV_BACKEND: &str = "redis";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TYPEDKV_LOG";

/// File stem used when the log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "typedkv";
