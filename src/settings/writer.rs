//! Change-detection write gate

use super::normalize::to_write_form;
use super::SettingsDocument;
use crate::error::SettingsError;
use crate::transport::SettingsTransport;
use tracing::debug;

/// Serialize the write form of a canonical document
pub fn serialize(doc: &SettingsDocument) -> Result<Vec<u8>, SettingsError> {
    serde_json::to_vec(&to_write_form(doc)).map_err(SettingsError::Encode)
}

/// Remembers how a document serialized before a mutation and writes it back only when
/// the mutation changed it.
#[derive(Debug, Clone)]
pub struct WriteGate {
    original: Vec<u8>,
}

impl WriteGate {
    pub fn capture(doc: &SettingsDocument) -> Result<Self, SettingsError> {
        Ok(Self {
            original: serialize(doc)?,
        })
    }

    /// Hand the whole document to `transport` when it changed. Returns whether a write
    /// was issued; at most one write happens per call.
    pub async fn commit<T>(
        &self,
        transport: &T,
        doc: &SettingsDocument,
        changed: bool,
    ) -> Result<bool, SettingsError>
    where
        T: SettingsTransport + ?Sized,
    {
        if !changed {
            debug!("Setting already has the requested value, skipping write");
            return Ok(false);
        }

        let body = serialize(doc)?;
        if body == self.original {
            debug!("Serialized settings unchanged, skipping write");
            return Ok(false);
        }

        transport.write(body).await?;
        Ok(true)
    }
}
