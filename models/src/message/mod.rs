//! Domain-level events delivered to plugin code.
//!
//! Every type here is immutable plain data produced by [`crate::convert`].
//! Optional wire fields stay `Option<T>` so "absent" and "present but zero"
//! remain distinguishable. Absent wire timestamps become [`UNIX_EPOCH`](std::time::UNIX_EPOCH).

mod internal;
mod rig;
mod wsjtx;

pub use internal::{ClhInternalMessage, PipeConnectionClosed, QsoUploadStatusChanged};
pub use rig::RigData;
pub use wsjtx::{
    Clear, ClearWindow, Close, Configure, Decode, FreeText, HaltTx, Heartbeat, HighlightCallsign,
    KeyModifiers, Location, LoggedAdif, MessageHeader, MessageType, PackedWsjtxMessage, QsoLogged,
    Reply, SpecialOperationMode, Status, SwitchConfiguration, WsjtxMessage, WsjtxPayload,
    WsprDecode,
};

use serde::Serialize;

/// One event received from the host. Exactly one variant per frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data")]
pub enum Message {
    RigData(RigData),
    Wsjtx(WsjtxMessage),
    PackedWsjtx(PackedWsjtxMessage),
    ClhInternal(ClhInternalMessage),
    PipeConnectionClosed(PipeConnectionClosed),
}

impl From<RigData> for Message {
    fn from(value: RigData) -> Self {
        Message::RigData(value)
    }
}

impl From<WsjtxMessage> for Message {
    fn from(value: WsjtxMessage) -> Self {
        Message::Wsjtx(value)
    }
}

impl From<PackedWsjtxMessage> for Message {
    fn from(value: PackedWsjtxMessage) -> Self {
        Message::PackedWsjtx(value)
    }
}

impl From<ClhInternalMessage> for Message {
    fn from(value: ClhInternalMessage) -> Self {
        Message::ClhInternal(value)
    }
}

impl From<PipeConnectionClosed> for Message {
    fn from(value: PipeConnectionClosed) -> Self {
        Message::PipeConnectionClosed(value)
    }
}
