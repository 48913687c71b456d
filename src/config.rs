//! Configuration System
//!
//! Where the settings endpoint lives, how long to wait for it, and how to log. Layered with the
//! `config` crate: built-in defaults, then the global config file, then `DOCKSET_*`
//! environment variables.

use crate::error::SettingsError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

use merge::merge_policy;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocksetConfig {
    /// Base URL of the Docker Desktop backend; `/settings` is appended
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_endpoint() -> String {
    merge_policy::DEFAULT_ENDPOINT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    merge_policy::DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_request_timeout_secs() -> u64 {
    merge_policy::DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for DocksetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DocksetConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.endpoint.trim().is_empty() {
            errors.push("Endpoint cannot be empty".to_string());
        } else if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://"))
        {
            errors.push(format!(
                "Endpoint '{}' must start with http:// or https://",
                self.endpoint
            ));
        }
        if self.connect_timeout_secs == 0 {
            errors.push("connect_timeout_secs must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Loads [`DocksetConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file, then the environment
    pub fn load() -> Result<DocksetConfig, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    /// Defaults, then the given file, then the environment
    pub fn load_from_file(path: &Path) -> Result<DocksetConfig, SettingsError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path).required(true));
        let builder = sources::environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        sources::global_file::global_config_path()
    }

    fn finish(config: config::Config) -> Result<DocksetConfig, SettingsError> {
        let config: DocksetConfig = config.try_deserialize()?;
        config.validate().map_err(|errors| {
            SettingsError::Config(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        Ok(config)
    }
}
