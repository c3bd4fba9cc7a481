//! Configuration loader
//!
//! Loads configuration from defaults, a TOML file and environment
//! variables using Figment.

use crate::config::{AppConfig, KvConfig, LoggingConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    REDIS_KV_BACKEND,
};
use crate::error::{InfraError, InfraResult};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use typedkv_domain::constants::LIST_MAX_PAGE_SIZE;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first one found)
    /// 3. Environment variables, e.g. `TYPEDKV_KV__BACKEND=redis`
    pub fn load(&self) -> InfraResult<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> InfraResult<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> InfraResult<()> {
    validate_kv_config(&config.kv)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

fn validate_kv_config(config: &KvConfig) -> InfraResult<()> {
    if config.backend.trim().is_empty() {
        return Err(InfraError::configuration("Key-value backend name cannot be empty"));
    }
    if config.backend == REDIS_KV_BACKEND && config.redis_url.is_none() {
        return Err(InfraError::configuration(
            "redis_url is required when the redis backend is selected",
        ));
    }
    if config.metadata_max_bytes == 0 {
        return Err(InfraError::configuration("metadata_max_bytes cannot be 0"));
    }
    if config.list_page_limit == 0 || config.list_page_limit > LIST_MAX_PAGE_SIZE {
        return Err(InfraError::configuration(format!(
            "list_page_limit must be between 1 and {}",
            LIST_MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> InfraResult<()> {
    parse_log_level(&config.level).map(|_| ())
}

/// Configuration builder for programmatic configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set key-value configuration
    pub fn with_kv(mut self, kv: KvConfig) -> Self {
        self.config.kv = kv;
        self
    }

    /// Select a backend by name
    pub fn with_backend<S: Into<String>>(mut self, backend: S) -> Self {
        self.config.kv.backend = backend.into();
        self
    }

    /// Set the redis connection URL
    pub fn with_redis_url<S: Into<String>>(mut self, url: S) -> Self {
        self.config.kv.redis_url = Some(url.into());
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}
