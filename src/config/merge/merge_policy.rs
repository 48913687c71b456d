//! Merge rules: defaults first, later sources override earlier ones.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:6060";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("connect_timeout_secs", DEFAULT_CONNECT_TIMEOUT_SECS)?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)
}
