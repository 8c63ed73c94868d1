use clh_plugin_sdk::ClientError;

use models::{ErrorLocation, ModelError};

use std::panic::Location;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    /// Error from this app's own setup (logging, output)
    #[error("Monitor Error: {message} {location}")]
    Monitor {
        message: String,
        location: ErrorLocation,
    },

    /// The plugin manifest could not be read or is invalid
    #[error("Settings Error: {message} {location}")]
    Settings {
        message: String,
        location: ErrorLocation,
    },

    /// Error from the plugin SDK (connect, receive, close)
    #[error("Client Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ClientError> for MonitorError {
    #[track_caller]
    fn from(error: ClientError) -> Self {
        MonitorError::Client {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for MonitorError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        MonitorError::Settings {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
