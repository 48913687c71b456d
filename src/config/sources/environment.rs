//! Environment source: DOCKSET_ENDPOINT, DOCKSET_REQUEST_TIMEOUT_SECS, DOCKSET_LOGGING__LEVEL, ...

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "DOCKSET";

/// Add the environment as the highest-precedence source.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
