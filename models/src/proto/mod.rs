//! prost mirror of the host's `plugin` protobuf package.
//!
//! The schema is versioned and owned by the host application; these types only
//! mirror it. Field tags and enumeration values must stay in lock-step with the
//! host's `.proto` files, so any change here needs a matching schema bump there.
//!
//! Top-level frame types implement [`prost::Name`] so they can travel inside a
//! `google.protobuf.Any` envelope.

/// Protobuf package every top-level frame type belongs to.
pub const PACKAGE: &str = "plugin";

/// Prefix used when packing a message into an `Any` envelope.
pub const TYPE_URL_PREFIX: &str = "type.googleapis.com/";

macro_rules! wire_name {
    ($ty:ident, $name:literal) => {
        impl ::prost::Name for $ty {
            const NAME: &'static str = $name;
            const PACKAGE: &'static str = $crate::proto::PACKAGE;

            fn full_name() -> String {
                format!("{}.{}", Self::PACKAGE, Self::NAME)
            }

            fn type_url() -> String {
                format!("{}{}", $crate::proto::TYPE_URL_PREFIX, Self::full_name())
            }
        }
    };
}

mod internal;
mod plugin;
mod rig;
mod wsjtx;

pub use internal::{ClhInternalMessage, ClhQsoUploadStatusChanged, PipeConnectionClosed};
pub use plugin::{Capability, PipeHeartbeat, PipeRegisterPluginReq, PipeRegisterPluginResp};
pub use rig::RigData;
pub use wsjtx::{
    Clear, ClearWindow, Close, Configure, Decode, FreeText, HaltTx, Heartbeat, HighlightCallsign,
    Location, LoggedAdif, MessageHeader, MessageType, PackedWsjtxMessage, QsoLogged, Reply,
    SpecialOperationMode, Status, SwitchConfiguration, WsjtxMessage, WsprDecode, wsjtx_message,
};
