//! `google.protobuf.Any` envelope around host events.
//!
//! The registry of known wire types is fixed at build time. Lookup goes by the
//! full protobuf name after the last `/` of the type URL, so any URL prefix the
//! host uses is accepted.

use crate::error::ClientError;

use models::ErrorLocation;
use models::proto::{
    ClhInternalMessage, PackedWsjtxMessage, PipeConnectionClosed, PipeHeartbeat,
    PipeRegisterPluginReq, PipeRegisterPluginResp, RigData, WsjtxMessage,
};

use std::collections::HashMap;
use std::panic::Location;

use once_cell::sync::Lazy;
use prost::{DecodeError, Name};
use prost_types::Any;

/// Every wire type that may appear inside an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum WireMessage {
    RigData(RigData),
    WsjtxMessage(WsjtxMessage),
    PackedWsjtxMessage(PackedWsjtxMessage),
    ClhInternalMessage(ClhInternalMessage),
    PipeConnectionClosed(PipeConnectionClosed),
    PipeRegisterPluginReq(PipeRegisterPluginReq),
    PipeRegisterPluginResp(PipeRegisterPluginResp),
    PipeHeartbeat(PipeHeartbeat),
}

impl WireMessage {
    /// Full protobuf name, e.g. `plugin.RigData`.
    pub fn full_name(&self) -> String {
        match self {
            WireMessage::RigData(_) => RigData::full_name(),
            WireMessage::WsjtxMessage(_) => WsjtxMessage::full_name(),
            WireMessage::PackedWsjtxMessage(_) => PackedWsjtxMessage::full_name(),
            WireMessage::ClhInternalMessage(_) => ClhInternalMessage::full_name(),
            WireMessage::PipeConnectionClosed(_) => PipeConnectionClosed::full_name(),
            WireMessage::PipeRegisterPluginReq(_) => PipeRegisterPluginReq::full_name(),
            WireMessage::PipeRegisterPluginResp(_) => PipeRegisterPluginResp::full_name(),
            WireMessage::PipeHeartbeat(_) => PipeHeartbeat::full_name(),
        }
    }
}

type Decoder = Box<dyn Fn(&[u8]) -> Result<WireMessage, DecodeError> + Send + Sync>;

static REGISTRY: Lazy<HashMap<String, Decoder>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    register(&mut registry, WireMessage::RigData);
    register(&mut registry, WireMessage::WsjtxMessage);
    register(&mut registry, WireMessage::PackedWsjtxMessage);
    register(&mut registry, WireMessage::ClhInternalMessage);
    register(&mut registry, WireMessage::PipeConnectionClosed);
    register(&mut registry, WireMessage::PipeRegisterPluginReq);
    register(&mut registry, WireMessage::PipeRegisterPluginResp);
    register(&mut registry, WireMessage::PipeHeartbeat);
    registry
});

fn register<M>(registry: &mut HashMap<String, Decoder>, wrap: fn(M) -> WireMessage)
where
    M: Name + Default + 'static,
{
    registry.insert(
        M::full_name(),
        Box::new(move |bytes: &[u8]| M::decode(bytes).map(wrap)),
    );
}

/// `true` if `type_url` names a registered wire type.
pub(crate) fn is_registered(type_url: &str) -> bool {
    REGISTRY.contains_key(full_name_of(type_url))
}

fn full_name_of(type_url: &str) -> &str {
    type_url.rsplit('/').next().unwrap_or(type_url)
}

/// Wrap `message` in an envelope tagged with its type URL.
///
/// # Errors
///
/// Returns [`ClientError::ProtobufEncode`] if the message cannot be encoded.
#[track_caller]
pub fn pack<M: Name>(message: &M) -> Result<Any, ClientError> {
    Ok(Any::from_msg(message)?)
}

/// Recover the concrete wire type from an envelope.
///
/// # Errors
///
/// - [`ClientError::UnknownType`] if the type URL is not registered
/// - [`ClientError::ProtobufDecode`] if the value does not decode as that type
#[track_caller]
pub fn unpack(envelope: &Any) -> Result<WireMessage, ClientError> {
    let decode = REGISTRY
        .get(full_name_of(&envelope.type_url))
        .ok_or_else(|| ClientError::UnknownType {
            message: format!("no wire type registered for {:?}", envelope.type_url),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(decode(envelope.value.as_slice())?)
}
