use super::ClhClient;
use crate::codec::envelope::{WireMessage, unpack};
use crate::error::ClientError;
use crate::transport::Transport;

use models::message::{
    ClhInternalMessage, PackedWsjtxMessage, PipeConnectionClosed, RigData, WsjtxMessage,
};
use models::{ErrorLocation, Message};

use std::panic::Location;

use log::debug;
use prost_types::Any;

impl<T: Transport> ClhClient<T> {
    /// Block until the host sends one event and return it.
    ///
    /// Reads exactly one frame per call; nothing is buffered ahead. Only one task
    /// should call this at a time.
    ///
    /// # Errors
    ///
    /// Per-frame failures leave the channel usable (see [`ClientError::is_decode`]):
    /// - [`ClientError::ProtobufDecode`] for a malformed frame or inconsistent message
    /// - [`ClientError::UnknownType`] for an envelope type the SDK does not know
    /// - [`ClientError::UnhandledType`] for a known type that is not an event
    ///
    /// The receive loop should stop on the rest (see [`ClientError::is_terminal`]):
    /// - [`ClientError::Shutdown`] once [`ClhClient::close`] has been called
    /// - [`ClientError::Disconnected`] if the host closed the channel or a new
    ///   Connect replaced this connection
    /// - [`ClientError::NotConnected`] before the first successful Connect
    /// - [`ClientError::Io`] if the stream fails mid-frame
    pub async fn wait_message(&self) -> Result<Message, ClientError> {
        let envelope = self.read_envelope().await?;
        debug!("Received envelope {}", envelope.type_url);
        dispatch(unpack(&envelope)?)
    }

    async fn read_envelope(&self) -> Result<Any, ClientError> {
        let mut guard = self.reader.lock().await;
        let Some(connection) = guard.as_mut() else {
            if self.shutdown.is_cancelled() {
                return Err(self.shutdown_error());
            }
            return Err(ClientError::NotConnected {
                message: String::from("wait_message called before a successful connect"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let token = connection.token.clone();
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                if self.shutdown.is_cancelled() {
                    Err(self.shutdown_error())
                } else {
                    Err(ClientError::Disconnected {
                        message: String::from("connection replaced by a new connect"),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
            frame = connection.frames.read::<Any>() => match frame {
                Err(_) if self.shutdown.is_cancelled() => Err(self.shutdown_error()),
                other => other,
            },
        }
    }
}

#[track_caller]
fn dispatch(wire: WireMessage) -> Result<Message, ClientError> {
    match wire {
        WireMessage::RigData(rig) => Ok(Message::RigData(RigData::from(rig))),
        WireMessage::WsjtxMessage(message) => Ok(Message::Wsjtx(WsjtxMessage::try_from(message)?)),
        WireMessage::PackedWsjtxMessage(packed) => Ok(Message::PackedWsjtx(
            PackedWsjtxMessage::try_from(packed)?,
        )),
        WireMessage::ClhInternalMessage(internal) => {
            Ok(Message::ClhInternal(ClhInternalMessage::from(internal)))
        }
        WireMessage::PipeConnectionClosed(closed) => Ok(Message::PipeConnectionClosed(
            PipeConnectionClosed::from(closed),
        )),
        other @ (WireMessage::PipeRegisterPluginReq(_)
        | WireMessage::PipeRegisterPluginResp(_)
        | WireMessage::PipeHeartbeat(_)) => Err(ClientError::UnhandledType {
            message: format!("{} is not a plugin event", other.full_name()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
