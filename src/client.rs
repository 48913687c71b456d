//! Settings Client
//!
//! One call is one sequential cycle: fetch the document, normalize it, apply a mutation and
//! write the whole document back only if the mutation changed it. Nothing is cached between
//! calls.

use crate::config::DocksetConfig;
use crate::error::SettingsError;
use crate::settings::writer::{self, WriteGate};
use crate::settings::{self, normalize, SettingsDocument};
use crate::transport::{HttpTransport, SettingsTransport};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Reads and updates Docker Desktop settings through a [`SettingsTransport`]
pub struct SettingsClient<T> {
    transport: T,
}

impl SettingsClient<HttpTransport> {
    /// Client talking HTTP to the configured endpoint
    pub fn from_config(config: &DocksetConfig) -> Result<Self, SettingsError> {
        Ok(Self::new(HttpTransport::from_config(config)?))
    }
}

impl<T: SettingsTransport> SettingsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the current settings in canonical form
    pub async fn settings(&self) -> Result<SettingsDocument, SettingsError> {
        let raw = self.transport.fetch().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch settings");
            e
        })?;

        let doc: SettingsDocument = serde_json::from_slice(&raw)?;
        let (variant, doc) = normalize(doc);
        debug!(?variant, "Fetched settings");
        Ok(doc)
    }

    /// Write the whole document back, unconditionally
    pub async fn write_settings(&self, doc: &SettingsDocument) -> Result<(), SettingsError> {
        let body = writer::serialize(doc)?;
        self.transport.write(body).await?;
        info!("Wrote settings");
        Ok(())
    }

    /// Current value of the setting at `path`
    pub async fn get_setting_value(&self, path: &str) -> Result<Value, SettingsError> {
        let doc = self.settings().await?;
        settings::get_setting(&doc, path)
    }

    /// Set the setting at `path` from its string form. Returns whether a write happened.
    pub async fn set_setting_value(&self, path: &str, value: &str) -> Result<bool, SettingsError> {
        let written = self
            .update(|doc| settings::apply_setting(doc, path, value))
            .await?;
        if written {
            info!(setting = path, value, "Updated setting");
        }
        Ok(written)
    }

    pub async fn set_kubernetes_enabled(&self, enabled: bool) -> Result<bool, SettingsError> {
        let written = self
            .update(|doc| settings::set_kubernetes_enabled(doc, enabled))
            .await?;
        if written {
            info!(enabled, "Updated kubernetes");
        }
        Ok(written)
    }

    /// Make sure the VM has at least `min` CPUs
    pub async fn ensure_min_cpus(&self, min: u32) -> Result<bool, SettingsError> {
        let written = self
            .update(|doc| settings::ensure_min_cpus(doc, min))
            .await?;
        if written {
            info!(cpus = min, "Raised VM CPU count");
        }
        Ok(written)
    }

    async fn update<F>(&self, mutate: F) -> Result<bool, SettingsError>
    where
        F: FnOnce(&mut SettingsDocument) -> Result<bool, SettingsError>,
    {
        let mut doc = self.settings().await?;
        let gate = WriteGate::capture(&doc)?;
        let changed = mutate(&mut doc)?;
        gate.commit(&self.transport, &doc, changed).await
    }
}
