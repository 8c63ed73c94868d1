//! Plugin identity announced to the host during registration.

use crate::error::model_error::ModelError;
use crate::{ErrorLocation, proto};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Event stream a plugin can subscribe to.
///
/// Values map one-to-one onto the host's `Capability` enumeration; adding one
/// needs a coordinated schema bump on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    /// Relayed WSJT-X UDP messages.
    WsjtxMessage,
    /// Live rig frequency/mode/power telemetry.
    RigData,
    /// Host-internal notifications such as QSO upload status.
    ClhInternalData,
}

impl From<Capability> for proto::Capability {
    fn from(capability: Capability) -> Self {
        match capability {
            Capability::WsjtxMessage => proto::Capability::WsjtxMessage,
            Capability::RigData => proto::Capability::RigData,
            Capability::ClhInternalData => proto::Capability::ClhInternalData,
        }
    }
}

/// Identity of a connecting plugin.
///
/// All four identity fields are required; see [`PluginConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub uuid: String,
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl PluginConfig {
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            version: version.into(),
            description: description.into(),
            capabilities: Vec::new(),
        }
    }

    pub fn with_capability(mut self, capability: Capability) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    /// Check that every identity field is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] naming the first empty field.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        let fields = [
            ("uuid", &self.uuid),
            ("name", &self.name),
            ("version", &self.version),
            ("description", &self.description),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(ModelError::Validation {
                    message: format!("Plugin {field} cannot be empty"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// Build the registration frame announcing this plugin.
    pub fn to_register_request(&self) -> proto::PipeRegisterPluginReq {
        proto::PipeRegisterPluginReq {
            uuid: self.uuid.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            description: self.description.clone(),
            capabilities: self
                .capabilities
                .iter()
                .map(|&capability| proto::Capability::from(capability) as i32)
                .collect(),
        }
    }
}
