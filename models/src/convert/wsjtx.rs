use crate::convert::timestamp_or_epoch;
use crate::error::model_error::ModelError;
use crate::message::{
    Clear, ClearWindow, Close, Configure, Decode, FreeText, HaltTx, Heartbeat, HighlightCallsign,
    KeyModifiers, Location, LoggedAdif, MessageHeader, MessageType, PackedWsjtxMessage, QsoLogged,
    Reply, SpecialOperationMode, Status, SwitchConfiguration, WsjtxMessage, WsjtxPayload,
    WsprDecode,
};
use crate::proto::{self, wsjtx_message::Payload};
use crate::ErrorLocation;

use std::panic::Location as PanicLocation;

impl From<i32> for MessageType {
    fn from(value: i32) -> Self {
        match proto::MessageType::try_from(value) {
            Ok(proto::MessageType::Heartbeat) => MessageType::Heartbeat,
            Ok(proto::MessageType::Status) => MessageType::Status,
            Ok(proto::MessageType::Decode) => MessageType::Decode,
            Ok(proto::MessageType::Clear) => MessageType::Clear,
            Ok(proto::MessageType::Reply) => MessageType::Reply,
            Ok(proto::MessageType::QsoLogged) => MessageType::QsoLogged,
            Ok(proto::MessageType::Close) => MessageType::Close,
            Ok(proto::MessageType::Replay) => MessageType::Replay,
            Ok(proto::MessageType::HaltTx) => MessageType::HaltTx,
            Ok(proto::MessageType::FreeText) => MessageType::FreeText,
            Ok(proto::MessageType::WsprDecode) => MessageType::WsprDecode,
            Ok(proto::MessageType::Location) => MessageType::Location,
            Ok(proto::MessageType::LoggedAdif) => MessageType::LoggedAdif,
            Ok(proto::MessageType::HighlightCallsign) => MessageType::HighlightCallsign,
            Ok(proto::MessageType::SwitchConfiguration) => MessageType::SwitchConfiguration,
            Ok(proto::MessageType::Configure) => MessageType::Configure,
            Err(_) => MessageType::Unrecognized(value),
        }
    }
}

impl From<i32> for SpecialOperationMode {
    fn from(value: i32) -> Self {
        match proto::SpecialOperationMode::try_from(value) {
            Ok(proto::SpecialOperationMode::Off) => SpecialOperationMode::Off,
            Ok(proto::SpecialOperationMode::NaVhf) => SpecialOperationMode::NaVhf,
            Ok(proto::SpecialOperationMode::EuVhf) => SpecialOperationMode::EuVhf,
            Ok(proto::SpecialOperationMode::FieldDay) => SpecialOperationMode::FieldDay,
            Ok(proto::SpecialOperationMode::RttyRu) => SpecialOperationMode::RttyRu,
            Ok(proto::SpecialOperationMode::WwDigi) => SpecialOperationMode::WwDigi,
            Ok(proto::SpecialOperationMode::Fox) => SpecialOperationMode::Fox,
            Ok(proto::SpecialOperationMode::Hound) => SpecialOperationMode::Hound,
            Err(_) => SpecialOperationMode::Unrecognized(value),
        }
    }
}

impl From<i32> for ClearWindow {
    fn from(value: i32) -> Self {
        match proto::ClearWindow::try_from(value) {
            Ok(proto::ClearWindow::ClearBandActivity) => ClearWindow::BandActivity,
            Ok(proto::ClearWindow::ClearRxFrequency) => ClearWindow::RxFrequency,
            Ok(proto::ClearWindow::ClearBoth) => ClearWindow::Both,
            Err(_) => ClearWindow::Unrecognized(value),
        }
    }
}

impl From<proto::MessageHeader> for MessageHeader {
    fn from(wire: proto::MessageHeader) -> Self {
        Self {
            magic_number: wire.magic_number,
            schema_number: wire.schema_number,
            message_type: MessageType::from(wire.r#type),
            id: wire.id,
        }
    }
}

impl From<proto::Heartbeat> for Heartbeat {
    fn from(wire: proto::Heartbeat) -> Self {
        Self {
            max_schema_number: wire.max_schema_number,
            version: wire.version,
            revision: wire.revision,
        }
    }
}

impl From<proto::Status> for Status {
    fn from(wire: proto::Status) -> Self {
        Self {
            dial_frequency: wire.dial_frequency,
            mode: wire.mode,
            dx_call: wire.dx_call,
            report: wire.report,
            tx_mode: wire.tx_mode,
            tx_enabled: wire.tx_enabled,
            transmitting: wire.transmitting,
            decoding: wire.decoding,
            rx_df: wire.rx_df,
            tx_df: wire.tx_df,
            de_call: wire.de_call,
            de_grid: wire.de_grid,
            dx_grid: wire.dx_grid,
            tx_watchdog: wire.tx_watchdog,
            sub_mode: wire.sub_mode,
            fast_mode: wire.fast_mode,
            special_op_mode: wire.special_op_mode.map(SpecialOperationMode::from),
            frequency_tolerance: wire.frequency_tolerance,
            tr_period: wire.tr_period,
            config_name: wire.config_name,
            tx_message: wire.tx_message,
        }
    }
}

impl From<proto::Decode> for Decode {
    fn from(wire: proto::Decode) -> Self {
        Self {
            is_new: wire.is_new,
            time: timestamp_or_epoch(wire.time),
            snr: wire.snr,
            delta_time: wire.delta_time,
            delta_frequency: wire.delta_frequency,
            mode: wire.mode,
            message: wire.message,
            low_confidence: wire.low_confidence,
            off_air: wire.off_air,
        }
    }
}

impl From<proto::Clear> for Clear {
    fn from(wire: proto::Clear) -> Self {
        Self {
            window: ClearWindow::from(wire.window),
        }
    }
}

impl From<proto::Reply> for Reply {
    fn from(wire: proto::Reply) -> Self {
        Self {
            time: timestamp_or_epoch(wire.time),
            snr: wire.snr,
            delta_time: wire.delta_time,
            delta_frequency: wire.delta_frequency,
            mode: wire.mode,
            message: wire.message,
            low_confidence: wire.low_confidence,
            modifiers: KeyModifiers(wire.modifiers),
        }
    }
}

impl From<proto::QsoLogged> for QsoLogged {
    fn from(wire: proto::QsoLogged) -> Self {
        Self {
            datetime_off: timestamp_or_epoch(wire.datetime_off),
            dx_call: wire.dx_call,
            dx_grid: wire.dx_grid,
            tx_frequency: wire.tx_frequency,
            mode: wire.mode,
            report_sent: wire.report_sent,
            report_received: wire.report_received,
            tx_power: wire.tx_power,
            comments: wire.comments,
            datetime_on: timestamp_or_epoch(wire.datetime_on),
            operator_call: wire.operator_call,
            my_call: wire.my_call,
            my_grid: wire.my_grid,
            exchange_sent: wire.exchange_sent,
            exchange_received: wire.exchange_received,
            adif_propagation_mode: wire.adif_propagation_mode,
        }
    }
}

impl From<proto::WsprDecode> for WsprDecode {
    fn from(wire: proto::WsprDecode) -> Self {
        Self {
            is_new: wire.is_new,
            time: timestamp_or_epoch(wire.time),
            snr: wire.snr,
            delta_time: wire.delta_time,
            frequency: wire.frequency,
            drift: wire.drift,
            callsign: wire.callsign,
            grid: wire.grid,
            power: wire.power,
            off_air: wire.off_air,
        }
    }
}

impl From<proto::HighlightCallsign> for HighlightCallsign {
    fn from(wire: proto::HighlightCallsign) -> Self {
        Self {
            callsign: wire.callsign,
            background_color: wire.background_color,
            foreground_color: wire.foreground_color,
            highlight_last: wire.highlight_last,
        }
    }
}

impl From<proto::Configure> for Configure {
    fn from(wire: proto::Configure) -> Self {
        Self {
            mode: wire.mode,
            frequency_tolerance: wire.frequency_tolerance,
            sub_mode: wire.sub_mode,
            fast_mode: wire.fast_mode,
            tr_period: wire.tr_period,
            rx_df: wire.rx_df,
            dx_call: wire.dx_call,
            dx_grid: wire.dx_grid,
            generate_messages: wire.generate_messages,
        }
    }
}

impl From<Payload> for WsjtxPayload {
    fn from(payload: Payload) -> Self {
        match payload {
            Payload::Heartbeat(p) => WsjtxPayload::Heartbeat(p.into()),
            Payload::Status(p) => WsjtxPayload::Status(p.into()),
            Payload::Decode(p) => WsjtxPayload::Decode(p.into()),
            Payload::Clear(p) => WsjtxPayload::Clear(p.into()),
            Payload::Reply(p) => WsjtxPayload::Reply(p.into()),
            Payload::QsoLogged(p) => WsjtxPayload::QsoLogged(p.into()),
            Payload::Close(_) => WsjtxPayload::Close(Close),
            Payload::HaltTx(p) => WsjtxPayload::HaltTx(HaltTx {
                auto_tx_only: p.auto_tx_only,
            }),
            Payload::FreeText(p) => WsjtxPayload::FreeText(FreeText {
                text: p.text,
                send: p.send,
            }),
            Payload::WsprDecode(p) => WsjtxPayload::WsprDecode(p.into()),
            Payload::Location(p) => WsjtxPayload::Location(Location {
                location: p.location,
            }),
            Payload::LoggedAdif(p) => WsjtxPayload::LoggedAdif(LoggedAdif {
                adif_text: p.adif_text,
            }),
            Payload::HighlightCallsign(p) => WsjtxPayload::HighlightCallsign(p.into()),
            Payload::SwitchConfiguration(p) => {
                WsjtxPayload::SwitchConfiguration(SwitchConfiguration {
                    config_name: p.config_name,
                })
            }
            Payload::Configure(p) => WsjtxPayload::Configure(p.into()),
        }
    }
}

impl TryFrom<proto::WsjtxMessage> for WsjtxMessage {
    type Error = ModelError;

    /// # Errors
    ///
    /// Returns [`ModelError::Conversion`] if the header is missing or its type
    /// tag disagrees with the payload kind.
    #[track_caller]
    fn try_from(wire: proto::WsjtxMessage) -> Result<Self, Self::Error> {
        let header = MessageHeader::from(wire.header.ok_or_else(|| ModelError::Conversion {
            message: String::from("WSJT-X message has no header"),
            location: ErrorLocation::from(PanicLocation::caller()),
        })?);

        // Unknown oneof tags are skipped by prost and land here as `None`.
        let payload = wire.payload.map(WsjtxPayload::from);

        if let Some(ref payload) = payload {
            let expected = payload.message_type();
            if header.message_type != expected {
                return Err(ModelError::Conversion {
                    message: format!(
                        "WSJT-X header type {:?} does not match {:?} payload",
                        header.message_type, expected
                    ),
                    location: ErrorLocation::from(PanicLocation::caller()),
                });
            }
        }

        Ok(Self {
            header,
            payload,
            timestamp: timestamp_or_epoch(wire.timestamp),
        })
    }
}

impl TryFrom<proto::PackedWsjtxMessage> for PackedWsjtxMessage {
    type Error = ModelError;

    #[track_caller]
    fn try_from(wire: proto::PackedWsjtxMessage) -> Result<Self, Self::Error> {
        let messages = wire
            .messages
            .into_iter()
            .map(WsjtxMessage::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            messages,
            timestamp: timestamp_or_epoch(wire.timestamp),
        })
    }
}
