//! Error types for the Docker Desktop settings client.

use thiserror::Error;

/// Which bound a numeric setting violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Min => write!(f, "less than min allowed"),
            Bound::Max => write!(f, "greater than max allowed"),
        }
    }
}

/// Failures from the settings fetch/write collaborator
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("settings request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("settings endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("settings endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("nothing found at DockerDesktop setting \"{path}\"")]
    PathNotFound { path: String },

    #[error("expected map at DockerDesktop setting \"{path}\", got: {found}")]
    NotAMap { path: String, found: &'static str },

    #[error("setting value \"{path}\": {value} {bound} ({limit})")]
    OutOfRange {
        path: String,
        value: f64,
        bound: Bound,
        limit: f64,
    },

    #[error("setting value \"{path}\": cannot parse {value:?} as {expected}")]
    ParseError {
        path: String,
        value: String,
        expected: &'static str,
    },

    #[error("setting value \"{path}\": cannot set a setting holding {found}")]
    Unsupported { path: String, found: &'static str },

    #[error("malformed settings document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to serialize settings document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::Config(err.to_string())
    }
}
