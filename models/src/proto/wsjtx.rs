//! WSJT-X UDP protocol messages as relayed by the host (package: plugin).

use prost_types::Timestamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MessageType {
    Heartbeat = 0,
    Status = 1,
    Decode = 2,
    Clear = 3,
    Reply = 4,
    QsoLogged = 5,
    Close = 6,
    Replay = 7,
    HaltTx = 8,
    FreeText = 9,
    WsprDecode = 10,
    Location = 11,
    LoggedAdif = 12,
    HighlightCallsign = 13,
    SwitchConfiguration = 14,
    Configure = 15,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SpecialOperationMode {
    /// `NONE` in the host schema.
    Off = 0,
    NaVhf = 1,
    EuVhf = 2,
    FieldDay = 3,
    RttyRu = 4,
    WwDigi = 5,
    Fox = 6,
    Hound = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ClearWindow {
    ClearBandActivity = 0,
    ClearRxFrequency = 1,
    ClearBoth = 2,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MessageHeader {
    #[prost(uint32, tag = "1")]
    pub magic_number: u32,
    #[prost(uint32, tag = "2")]
    pub schema_number: u32,
    #[prost(enumeration = "MessageType", tag = "3")]
    pub r#type: i32,
    #[prost(string, tag = "4")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Heartbeat {
    #[prost(uint32, tag = "1")]
    pub max_schema_number: u32,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, optional, tag = "3")]
    pub revision: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Status {
    #[prost(uint64, tag = "1")]
    pub dial_frequency: u64,
    #[prost(string, tag = "2")]
    pub mode: String,
    #[prost(string, tag = "3")]
    pub dx_call: String,
    #[prost(string, tag = "4")]
    pub report: String,
    #[prost(string, tag = "5")]
    pub tx_mode: String,
    #[prost(bool, tag = "6")]
    pub tx_enabled: bool,
    #[prost(bool, tag = "7")]
    pub transmitting: bool,
    #[prost(bool, tag = "8")]
    pub decoding: bool,
    #[prost(uint32, tag = "9")]
    pub rx_df: u32,
    #[prost(uint32, tag = "10")]
    pub tx_df: u32,
    #[prost(string, tag = "11")]
    pub de_call: String,
    #[prost(string, tag = "12")]
    pub de_grid: String,
    #[prost(string, tag = "13")]
    pub dx_grid: String,
    #[prost(bool, tag = "14")]
    pub tx_watchdog: bool,
    #[prost(string, tag = "15")]
    pub sub_mode: String,
    #[prost(bool, tag = "16")]
    pub fast_mode: bool,
    #[prost(enumeration = "SpecialOperationMode", optional, tag = "17")]
    pub special_op_mode: Option<i32>,
    #[prost(uint32, optional, tag = "18")]
    pub frequency_tolerance: Option<u32>,
    #[prost(uint32, optional, tag = "19")]
    pub tr_period: Option<u32>,
    #[prost(string, optional, tag = "20")]
    pub config_name: Option<String>,
    #[prost(string, optional, tag = "21")]
    pub tx_message: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Decode {
    #[prost(bool, tag = "1")]
    pub is_new: bool,
    #[prost(message, optional, tag = "2")]
    pub time: Option<Timestamp>,
    #[prost(int32, tag = "3")]
    pub snr: i32,
    #[prost(double, tag = "4")]
    pub delta_time: f64,
    #[prost(uint32, tag = "5")]
    pub delta_frequency: u32,
    #[prost(string, tag = "6")]
    pub mode: String,
    #[prost(string, tag = "7")]
    pub message: String,
    #[prost(bool, tag = "8")]
    pub low_confidence: bool,
    #[prost(bool, tag = "9")]
    pub off_air: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Clear {
    #[prost(enumeration = "ClearWindow", tag = "1")]
    pub window: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Reply {
    #[prost(message, optional, tag = "1")]
    pub time: Option<Timestamp>,
    #[prost(int32, tag = "2")]
    pub snr: i32,
    #[prost(double, tag = "3")]
    pub delta_time: f64,
    #[prost(uint32, tag = "4")]
    pub delta_frequency: u32,
    #[prost(string, tag = "5")]
    pub mode: String,
    #[prost(string, tag = "6")]
    pub message: String,
    #[prost(bool, tag = "7")]
    pub low_confidence: bool,
    #[prost(uint32, tag = "8")]
    pub modifiers: u32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QsoLogged {
    #[prost(message, optional, tag = "1")]
    pub datetime_off: Option<Timestamp>,
    #[prost(string, tag = "2")]
    pub dx_call: String,
    #[prost(string, tag = "3")]
    pub dx_grid: String,
    #[prost(uint64, tag = "4")]
    pub tx_frequency: u64,
    #[prost(string, tag = "5")]
    pub mode: String,
    #[prost(string, tag = "6")]
    pub report_sent: String,
    #[prost(string, tag = "7")]
    pub report_received: String,
    #[prost(string, tag = "8")]
    pub tx_power: String,
    #[prost(string, tag = "9")]
    pub comments: String,
    #[prost(message, optional, tag = "10")]
    pub datetime_on: Option<Timestamp>,
    #[prost(string, tag = "11")]
    pub operator_call: String,
    #[prost(string, tag = "12")]
    pub my_call: String,
    #[prost(string, tag = "13")]
    pub my_grid: String,
    #[prost(string, optional, tag = "14")]
    pub exchange_sent: Option<String>,
    #[prost(string, optional, tag = "15")]
    pub exchange_received: Option<String>,
    #[prost(string, optional, tag = "16")]
    pub adif_propagation_mode: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Close {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HaltTx {
    #[prost(bool, tag = "1")]
    pub auto_tx_only: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FreeText {
    #[prost(string, tag = "1")]
    pub text: String,
    #[prost(bool, tag = "2")]
    pub send: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WsprDecode {
    #[prost(bool, tag = "1")]
    pub is_new: bool,
    #[prost(message, optional, tag = "2")]
    pub time: Option<Timestamp>,
    #[prost(int32, tag = "3")]
    pub snr: i32,
    #[prost(double, tag = "4")]
    pub delta_time: f64,
    #[prost(uint64, tag = "5")]
    pub frequency: u64,
    #[prost(int32, tag = "6")]
    pub drift: i32,
    #[prost(string, tag = "7")]
    pub callsign: String,
    #[prost(string, tag = "8")]
    pub grid: String,
    #[prost(int32, tag = "9")]
    pub power: i32,
    #[prost(bool, optional, tag = "10")]
    pub off_air: Option<bool>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Location {
    #[prost(string, tag = "1")]
    pub location: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LoggedAdif {
    #[prost(string, tag = "1")]
    pub adif_text: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HighlightCallsign {
    #[prost(string, tag = "1")]
    pub callsign: String,
    #[prost(uint32, tag = "2")]
    pub background_color: u32,
    #[prost(uint32, tag = "3")]
    pub foreground_color: u32,
    #[prost(bool, tag = "4")]
    pub highlight_last: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SwitchConfiguration {
    #[prost(string, tag = "1")]
    pub config_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Configure {
    #[prost(string, tag = "1")]
    pub mode: String,
    #[prost(uint32, tag = "2")]
    pub frequency_tolerance: u32,
    #[prost(string, tag = "3")]
    pub sub_mode: String,
    #[prost(bool, tag = "4")]
    pub fast_mode: bool,
    #[prost(uint32, tag = "5")]
    pub tr_period: u32,
    #[prost(uint32, tag = "6")]
    pub rx_df: u32,
    #[prost(string, tag = "7")]
    pub dx_call: String,
    #[prost(string, tag = "8")]
    pub dx_grid: String,
    #[prost(bool, tag = "9")]
    pub generate_messages: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WsjtxMessage {
    #[prost(message, optional, tag = "1")]
    pub header: Option<MessageHeader>,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<Timestamp>,
    #[prost(
        oneof = "wsjtx_message::Payload",
        tags = "3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17"
    )]
    pub payload: Option<wsjtx_message::Payload>,
}

/// Nested types for [`WsjtxMessage`].
pub mod wsjtx_message {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Payload {
        #[prost(message, tag = "3")]
        Heartbeat(super::Heartbeat),
        #[prost(message, tag = "4")]
        Status(super::Status),
        #[prost(message, tag = "5")]
        Decode(super::Decode),
        #[prost(message, tag = "6")]
        Clear(super::Clear),
        #[prost(message, tag = "7")]
        Reply(super::Reply),
        #[prost(message, tag = "8")]
        QsoLogged(super::QsoLogged),
        #[prost(message, tag = "9")]
        Close(super::Close),
        #[prost(message, tag = "10")]
        HaltTx(super::HaltTx),
        #[prost(message, tag = "11")]
        FreeText(super::FreeText),
        #[prost(message, tag = "12")]
        WsprDecode(super::WsprDecode),
        #[prost(message, tag = "13")]
        Location(super::Location),
        #[prost(message, tag = "14")]
        LoggedAdif(super::LoggedAdif),
        #[prost(message, tag = "15")]
        HighlightCallsign(super::HighlightCallsign),
        #[prost(message, tag = "16")]
        SwitchConfiguration(super::SwitchConfiguration),
        #[prost(message, tag = "17")]
        Configure(super::Configure),
    }
}

/// Batch of WSJT-X messages delivered in one frame.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackedWsjtxMessage {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<WsjtxMessage>,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<Timestamp>,
}

wire_name!(WsjtxMessage, "WsjtxMessage");
wire_name!(PackedWsjtxMessage, "PackedWsjtxMessage");
