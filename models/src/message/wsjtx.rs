//! WSJT-X events in domain form.

use std::time::SystemTime;

use serde::Serialize;

/// WSJT-X message type tag carried in every [`MessageHeader`].
///
/// Header values the SDK does not know are kept as [`MessageType::Unrecognized`]
/// instead of failing the whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageType {
    Heartbeat,
    Status,
    Decode,
    Clear,
    Reply,
    QsoLogged,
    Close,
    /// Carries no payload of its own.
    Replay,
    HaltTx,
    FreeText,
    WsprDecode,
    Location,
    LoggedAdif,
    HighlightCallsign,
    SwitchConfiguration,
    Configure,
    Unrecognized(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialOperationMode {
    Off,
    NaVhf,
    EuVhf,
    FieldDay,
    RttyRu,
    WwDigi,
    Fox,
    Hound,
    Unrecognized(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ClearWindow {
    BandActivity,
    RxFrequency,
    Both,
    Unrecognized(i32),
}

/// Keyboard modifiers held while a Reply was triggered (Qt modifier bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct KeyModifiers(pub u32);

impl KeyModifiers {
    pub const NONE: KeyModifiers = KeyModifiers(0x00);
    pub const SHIFT: KeyModifiers = KeyModifiers(0x02);
    pub const CTRL: KeyModifiers = KeyModifiers(0x04);
    pub const ALT: KeyModifiers = KeyModifiers(0x08);
    pub const META: KeyModifiers = KeyModifiers(0x10);
    pub const KEYPAD: KeyModifiers = KeyModifiers(0x20);
    pub const GROUP_SWITCH: KeyModifiers = KeyModifiers(0x40);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: KeyModifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageHeader {
    pub magic_number: u32,
    pub schema_number: u32,
    pub message_type: MessageType,
    /// Identifies the WSJT-X instance; correlates requests with replies.
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heartbeat {
    pub max_schema_number: u32,
    pub version: String,
    pub revision: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub dial_frequency: u64,
    pub mode: String,
    pub dx_call: String,
    pub report: String,
    pub tx_mode: String,
    pub tx_enabled: bool,
    pub transmitting: bool,
    pub decoding: bool,
    pub rx_df: u32,
    pub tx_df: u32,
    pub de_call: String,
    pub de_grid: String,
    pub dx_grid: String,
    pub tx_watchdog: bool,
    pub sub_mode: String,
    pub fast_mode: bool,
    pub special_op_mode: Option<SpecialOperationMode>,
    pub frequency_tolerance: Option<u32>,
    pub tr_period: Option<u32>,
    pub config_name: Option<String>,
    pub tx_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decode {
    pub is_new: bool,
    pub time: SystemTime,
    pub snr: i32,
    pub delta_time: f64,
    pub delta_frequency: u32,
    pub mode: String,
    pub message: String,
    pub low_confidence: bool,
    pub off_air: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Clear {
    pub window: ClearWindow,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub time: SystemTime,
    pub snr: i32,
    pub delta_time: f64,
    pub delta_frequency: u32,
    pub mode: String,
    pub message: String,
    pub low_confidence: bool,
    pub modifiers: KeyModifiers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QsoLogged {
    pub datetime_off: SystemTime,
    pub dx_call: String,
    pub dx_grid: String,
    pub tx_frequency: u64,
    pub mode: String,
    pub report_sent: String,
    pub report_received: String,
    pub tx_power: String,
    pub comments: String,
    pub datetime_on: SystemTime,
    pub operator_call: String,
    pub my_call: String,
    pub my_grid: String,
    pub exchange_sent: Option<String>,
    pub exchange_received: Option<String>,
    pub adif_propagation_mode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Close;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HaltTx {
    pub auto_tx_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeText {
    pub text: String,
    pub send: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsprDecode {
    pub is_new: bool,
    pub time: SystemTime,
    pub snr: i32,
    pub delta_time: f64,
    pub frequency: u64,
    pub drift: i32,
    pub callsign: String,
    pub grid: String,
    pub power: i32,
    pub off_air: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedAdif {
    pub adif_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightCallsign {
    pub callsign: String,
    pub background_color: u32,
    pub foreground_color: u32,
    pub highlight_last: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchConfiguration {
    pub config_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configure {
    pub mode: String,
    pub frequency_tolerance: u32,
    pub sub_mode: String,
    pub fast_mode: bool,
    pub tr_period: u32,
    pub rx_df: u32,
    pub dx_call: String,
    pub dx_grid: String,
    pub generate_messages: bool,
}

/// The payload of a [`WsjtxMessage`]; one variant per WSJT-X message kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "fields")]
pub enum WsjtxPayload {
    Heartbeat(Heartbeat),
    Status(Status),
    Decode(Decode),
    Clear(Clear),
    Reply(Reply),
    QsoLogged(QsoLogged),
    Close(Close),
    HaltTx(HaltTx),
    FreeText(FreeText),
    WsprDecode(WsprDecode),
    Location(Location),
    LoggedAdif(LoggedAdif),
    HighlightCallsign(HighlightCallsign),
    SwitchConfiguration(SwitchConfiguration),
    Configure(Configure),
}

impl WsjtxPayload {
    /// Header tag this payload kind must travel with.
    pub const fn message_type(&self) -> MessageType {
        match self {
            WsjtxPayload::Heartbeat(_) => MessageType::Heartbeat,
            WsjtxPayload::Status(_) => MessageType::Status,
            WsjtxPayload::Decode(_) => MessageType::Decode,
            WsjtxPayload::Clear(_) => MessageType::Clear,
            WsjtxPayload::Reply(_) => MessageType::Reply,
            WsjtxPayload::QsoLogged(_) => MessageType::QsoLogged,
            WsjtxPayload::Close(_) => MessageType::Close,
            WsjtxPayload::HaltTx(_) => MessageType::HaltTx,
            WsjtxPayload::FreeText(_) => MessageType::FreeText,
            WsjtxPayload::WsprDecode(_) => MessageType::WsprDecode,
            WsjtxPayload::Location(_) => MessageType::Location,
            WsjtxPayload::LoggedAdif(_) => MessageType::LoggedAdif,
            WsjtxPayload::HighlightCallsign(_) => MessageType::HighlightCallsign,
            WsjtxPayload::SwitchConfiguration(_) => MessageType::SwitchConfiguration,
            WsjtxPayload::Configure(_) => MessageType::Configure,
        }
    }
}

/// A single WSJT-X message.
///
/// `payload` is `None` when the host sent a payload kind this SDK does not know
/// (or a payload-less kind such as Replay). Treat that as a no-op, not a fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WsjtxMessage {
    pub header: MessageHeader,
    pub payload: Option<WsjtxPayload>,
    pub timestamp: SystemTime,
}

/// Batch of WSJT-X messages, in the order the host packed them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedWsjtxMessage {
    pub messages: Vec<WsjtxMessage>,
    pub timestamp: SystemTime,
}
