//! Registration handshake and keep-alive frames (package: plugin).

use prost_types::Timestamp;

/// Event stream a plugin subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Capability {
    WsjtxMessage = 0,
    RigData = 1,
    ClhInternalData = 2,
}

/// First frame a plugin writes after dialing the host.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PipeRegisterPluginReq {
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub version: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(enumeration = "Capability", repeated, tag = "5")]
    pub capabilities: Vec<i32>,
}

/// Host's single reply to [`PipeRegisterPluginReq`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PipeRegisterPluginResp {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub message: String,
}

/// Keep-alive written by the plugin while connected.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PipeHeartbeat {
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<Timestamp>,
}

wire_name!(PipeRegisterPluginReq, "PipeRegisterPluginReq");
wire_name!(PipeRegisterPluginResp, "PipeRegisterPluginResp");
wire_name!(PipeHeartbeat, "PipeHeartbeat");
