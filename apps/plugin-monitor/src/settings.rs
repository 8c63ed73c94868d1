//! Plugin manifest for the monitor.
//!
//! Read from `plugin-monitor.json` in the working directory. The file holds the
//! plugin identity plus an optional heartbeat interval:
//!
//! ```json
//! {
//!   "uuid": "3f0c…",
//!   "name": "plugin-monitor",
//!   "version": "0.1.0",
//!   "description": "Prints every host event as JSON",
//!   "capabilities": ["WSJTX_MESSAGE", "RIG_DATA"],
//!   "heartbeat_interval_secs": 5
//! }
//! ```

use crate::error::MonitorError;

use clh_plugin_sdk::DEFAULT_HEARTBEAT_INTERVAL;

use models::{Capability, ErrorLocation, PluginConfig};

use std::fs::read_to_string;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SETTINGS_FILE_NAME: &str = "plugin-monitor.json";

const DEFAULT_NAME: &str = "plugin-monitor";
const DEFAULT_DESCRIPTION: &str = "Prints every host event as JSON";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSettings {
    #[serde(flatten)]
    pub plugin: PluginConfig,
    #[serde(default = "default_heartbeat_interval_secs")]
    pub heartbeat_interval_secs: u64,
}

fn default_heartbeat_interval_secs() -> u64 {
    DEFAULT_HEARTBEAT_INTERVAL.as_secs()
}

impl Default for MonitorSettings {
    /// Fresh identity subscribed to every event stream.
    fn default() -> Self {
        let plugin = PluginConfig::new(
            Uuid::new_v4().to_string(),
            DEFAULT_NAME,
            env!("CARGO_PKG_VERSION"),
            DEFAULT_DESCRIPTION,
        )
        .with_capability(Capability::WsjtxMessage)
        .with_capability(Capability::RigData)
        .with_capability(Capability::ClhInternalData);

        Self {
            plugin,
            heartbeat_interval_secs: default_heartbeat_interval_secs(),
        }
    }
}

impl MonitorSettings {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }

    /// Load the manifest from `dir`, or fall back to defaults if there is none.
    ///
    /// The heartbeat range is checked later, when the client is built.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Settings`] if the file exists but cannot be read,
    /// is not valid JSON, or has an empty identity field.
    #[track_caller]
    pub fn load(dir: &Path) -> Result<Self, MonitorError> {
        let path = dir.join(SETTINGS_FILE_NAME);
        if !path.exists() {
            info!("No {} found, using a fresh identity", path.display());
            return Ok(Self::default());
        }

        let contents = read_to_string(&path).map_err(|e| MonitorError::Settings {
            message: format!("Failed to read {}: {e}", path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let settings: MonitorSettings =
            serde_json::from_str(&contents).map_err(|e| MonitorError::Settings {
                message: format!("Failed to parse {}: {e}", path.display()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        settings.plugin.validate()?;
        info!("Loaded plugin manifest from {}", path.display());

        Ok(settings)
    }
}
