//! Settings Transport
//!
//! The settings document lives behind Docker Desktop's `/settings` endpoint. The client only
//! needs to fetch it and post it back, so the exchange is abstracted as [`SettingsTransport`]
//! and injected into [`crate::client::SettingsClient`]. [`HttpTransport`] talks to a real
//! endpoint; [`MemoryTransport`] serves a fixed document and records writes.

use crate::config::DocksetConfig;
use crate::error::TransportError;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Fixed path of the settings resource
pub const SETTINGS_ENDPOINT: &str = "/settings";

/// Fetch/write access to the settings resource
#[async_trait]
pub trait SettingsTransport: Send + Sync {
    /// Raw bytes of the current settings document
    async fn fetch(&self) -> Result<Vec<u8>, TransportError>;

    /// Replace the settings document with `body`
    async fn write(&self, body: Vec<u8>) -> Result<(), TransportError>;
}

/// HTTP transport against a Docker Desktop settings endpoint
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        // The settings endpoint is always local
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            client,
            url: format!("{}{}", base_url.trim_end_matches('/'), SETTINGS_ENDPOINT),
        })
    }

    pub fn from_config(config: &DocksetConfig) -> Result<Self, TransportError> {
        Self::new(
            &config.endpoint,
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

async fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl SettingsTransport for HttpTransport {
    async fn fetch(&self) -> Result<Vec<u8>, TransportError> {
        debug!(url = %self.url, "Fetching settings");
        let response = self.client.get(&self.url).send().await?;
        let response = check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn write(&self, body: Vec<u8>) -> Result<(), TransportError> {
        debug!(url = %self.url, bytes = body.len(), "Posting settings");
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// In-memory transport: serves a fixed document and records every write
#[derive(Default)]
pub struct MemoryTransport {
    document: Vec<u8>,
    unavailable: Option<String>,
    writes: Mutex<Vec<Vec<u8>>>,
}

impl MemoryTransport {
    pub fn new(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: document.into(),
            ..Self::default()
        }
    }

    /// A transport whose every call fails with `reason`
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            unavailable: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Bodies written so far, oldest first
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.writes.lock().clone()
    }

    /// Most recent write decoded as JSON
    pub fn last_written(&self) -> Option<serde_json::Value> {
        self.writes
            .lock()
            .last()
            .and_then(|body| serde_json::from_slice(body).ok())
    }

    pub fn clear_writes(&self) {
        self.writes.lock().clear();
    }

    fn check_available(&self) -> Result<(), TransportError> {
        match &self.unavailable {
            Some(reason) => Err(TransportError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SettingsTransport for MemoryTransport {
    async fn fetch(&self) -> Result<Vec<u8>, TransportError> {
        self.check_available()?;
        Ok(self.document.clone())
    }

    async fn write(&self, body: Vec<u8>) -> Result<(), TransportError> {
        self.check_available()?;
        self.writes.lock().push(body);
        Ok(())
    }
}
