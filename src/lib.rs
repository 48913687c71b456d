//! Dockset: Docker Desktop Settings Client
//!
//! Reads Docker Desktop's settings document, addresses values by dotted path
//! (`vm.resources.cpus`), applies typed and bounds-checked updates, and writes the document
//! back only when an update actually changed it.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod settings;
pub mod transport;

pub use client::SettingsClient;
pub use error::{SettingsError, TransportError};
pub use settings::{SettingPath, SettingsDocument};
pub use transport::{HttpTransport, MemoryTransport, SettingsTransport};
