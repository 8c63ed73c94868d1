use models::{ErrorLocation, ModelError};

use std::io::Error as IoError;
use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClientError {
    /// Plugin identity or a client option failed validation; no client was built.
    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The transport could not be dialed. The client stays usable for another Connect.
    #[error("Connection Error: {message} {location}")]
    Connection {
        message: String,
        location: ErrorLocation,
    },

    /// Registration was rejected or its response could not be read.
    #[error("Handshake Error: {message} {location}")]
    Handshake {
        message: String,
        location: ErrorLocation,
    },

    /// Connect was called on a client that has already been closed.
    #[error("Closed Error: {message} {location}")]
    Closed {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not Connected Error: {message} {location}")]
    NotConnected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Protobuf Decode Error: {message} {location}")]
    ProtobufDecode {
        message: String,
        location: ErrorLocation,
    },

    /// The envelope names a wire type the registry does not know.
    #[error("Unknown Type Error: {message} {location}")]
    UnknownType {
        message: String,
        location: ErrorLocation,
    },

    /// The envelope names a registered wire type that the receive loop does not deliver.
    #[error("Unhandled Type Error: {message} {location}")]
    UnhandledType {
        message: String,
        location: ErrorLocation,
    },

    /// The client was closed while the operation was in flight.
    #[error("Shutdown Error: {message} {location}")]
    Shutdown {
        message: String,
        location: ErrorLocation,
    },

    /// The host closed the channel, or the connection was replaced by a new Connect.
    #[error("Disconnected Error: {message} {location}")]
    Disconnected {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO Error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
    },

    #[error("Protobuf Encode Error: {message} {location}")]
    ProtobufEncode {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// `true` when the error was caused by Close on this client.
    pub fn is_shutdown(&self) -> bool {
        matches!(self, ClientError::Shutdown { .. })
    }

    /// `true` for per-frame failures. The channel is still usable and the next
    /// `wait_message` call reads the following frame.
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            ClientError::ProtobufDecode { .. }
                | ClientError::UnknownType { .. }
                | ClientError::UnhandledType { .. }
        )
    }

    /// `true` when a receive loop should stop instead of reading again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ClientError::Closed { .. }
                | ClientError::NotConnected { .. }
                | ClientError::Shutdown { .. }
                | ClientError::Disconnected { .. }
                | ClientError::Io { .. }
        )
    }
}

impl From<IoError> for ClientError {
    #[track_caller]
    fn from(error: IoError) -> Self {
        ClientError::Io {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<prost::DecodeError> for ClientError {
    #[track_caller]
    fn from(error: prost::DecodeError) -> Self {
        ClientError::ProtobufDecode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<prost::EncodeError> for ClientError {
    #[track_caller]
    fn from(error: prost::EncodeError) -> Self {
        ClientError::ProtobufEncode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for ClientError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match error {
            ModelError::Validation { message, .. } => ClientError::Config { message, location },
            ModelError::Conversion { message, .. } => {
                ClientError::ProtobufDecode { message, location }
            }
        }
    }
}
