use super::{domain_time, through_wire, wire_time};

use crate::ModelError;
use crate::message::{
    Clear, ClearWindow, Close, Configure, Decode, FreeText, HaltTx, Heartbeat, HighlightCallsign,
    KeyModifiers, Location, LoggedAdif, MessageType, PackedWsjtxMessage, QsoLogged, Reply,
    SpecialOperationMode, Status, SwitchConfiguration, WsjtxMessage, WsjtxPayload, WsprDecode,
};
use crate::proto::{self, wsjtx_message::Payload};

use std::time::UNIX_EPOCH;

use prost::Message as ProstMessage;

const MAGIC: u32 = 0xadbc_cbda;

fn header(message_type: proto::MessageType) -> proto::MessageHeader {
    proto::MessageHeader {
        magic_number: MAGIC,
        schema_number: 3,
        r#type: message_type as i32,
        id: String::from("WSJT-X"),
    }
}

fn wire_message(message_type: proto::MessageType, payload: Option<Payload>) -> proto::WsjtxMessage {
    proto::WsjtxMessage {
        header: Some(header(message_type)),
        timestamp: wire_time(0),
        payload,
    }
}

fn convert(wire: proto::WsjtxMessage) -> Result<WsjtxMessage, ModelError> {
    WsjtxMessage::try_from(through_wire(&wire))
}

/// **VALUE**: Verifies that all 15 payload kinds survive encode → decode → convert.
///
/// **WHY THIS MATTERS**: Plugins match on [`WsjtxPayload`] to react to WSJT-X. A kind
/// that converts into the wrong variant, or loses a field, silently breaks every plugin
/// that depends on it.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A oneof arm maps to the wrong domain variant
/// - A field is copied from the wrong wire field (e.g. tx_df ↔ rx_df)
/// - A wire tag collides with another payload's tag
#[test]
fn given_each_payload_kind_when_round_tripped_then_same_kind_and_fields() {
    // GIVEN: One populated wire payload per kind and its expected domain form
    let cases: Vec<(proto::MessageType, Payload, WsjtxPayload)> = vec![
        (
            proto::MessageType::Heartbeat,
            Payload::Heartbeat(proto::Heartbeat {
                max_schema_number: 3,
                version: String::from("2.7.0"),
                revision: Some(String::from("a1b2c3")),
            }),
            WsjtxPayload::Heartbeat(Heartbeat {
                max_schema_number: 3,
                version: String::from("2.7.0"),
                revision: Some(String::from("a1b2c3")),
            }),
        ),
        (
            proto::MessageType::Status,
            Payload::Status(proto::Status {
                dial_frequency: 14_074_000,
                mode: String::from("FT8"),
                dx_call: String::from("JA1ABC"),
                report: String::from("-10"),
                tx_mode: String::from("FT8"),
                tx_enabled: true,
                transmitting: false,
                decoding: true,
                rx_df: 1200,
                tx_df: 1500,
                de_call: String::from("BG0AAA"),
                de_grid: String::from("OM89"),
                dx_grid: String::from("PM95"),
                tx_watchdog: false,
                sub_mode: String::new(),
                fast_mode: false,
                special_op_mode: Some(proto::SpecialOperationMode::Hound as i32),
                frequency_tolerance: Some(20),
                tr_period: Some(15),
                config_name: Some(String::from("Default")),
                tx_message: Some(String::from("JA1ABC BG0AAA OM89")),
            }),
            WsjtxPayload::Status(Status {
                dial_frequency: 14_074_000,
                mode: String::from("FT8"),
                dx_call: String::from("JA1ABC"),
                report: String::from("-10"),
                tx_mode: String::from("FT8"),
                tx_enabled: true,
                transmitting: false,
                decoding: true,
                rx_df: 1200,
                tx_df: 1500,
                de_call: String::from("BG0AAA"),
                de_grid: String::from("OM89"),
                dx_grid: String::from("PM95"),
                tx_watchdog: false,
                sub_mode: String::new(),
                fast_mode: false,
                special_op_mode: Some(SpecialOperationMode::Hound),
                frequency_tolerance: Some(20),
                tr_period: Some(15),
                config_name: Some(String::from("Default")),
                tx_message: Some(String::from("JA1ABC BG0AAA OM89")),
            }),
        ),
        (
            proto::MessageType::Decode,
            Payload::Decode(proto::Decode {
                is_new: true,
                time: wire_time(-15),
                snr: -12,
                delta_time: 0.3,
                delta_frequency: 1234,
                mode: String::from("~"),
                message: String::from("CQ JA1ABC PM95"),
                low_confidence: false,
                off_air: true,
            }),
            WsjtxPayload::Decode(Decode {
                is_new: true,
                time: domain_time(-15),
                snr: -12,
                delta_time: 0.3,
                delta_frequency: 1234,
                mode: String::from("~"),
                message: String::from("CQ JA1ABC PM95"),
                low_confidence: false,
                off_air: true,
            }),
        ),
        (
            proto::MessageType::Clear,
            Payload::Clear(proto::Clear {
                window: proto::ClearWindow::ClearBoth as i32,
            }),
            WsjtxPayload::Clear(Clear {
                window: ClearWindow::Both,
            }),
        ),
        (
            proto::MessageType::Reply,
            Payload::Reply(proto::Reply {
                time: wire_time(-30),
                snr: 3,
                delta_time: -0.1,
                delta_frequency: 800,
                mode: String::from("~"),
                message: String::from("BG0AAA JA1ABC -05"),
                low_confidence: true,
                modifiers: 0x02 | 0x04,
            }),
            WsjtxPayload::Reply(Reply {
                time: domain_time(-30),
                snr: 3,
                delta_time: -0.1,
                delta_frequency: 800,
                mode: String::from("~"),
                message: String::from("BG0AAA JA1ABC -05"),
                low_confidence: true,
                modifiers: KeyModifiers(0x06),
            }),
        ),
        (
            proto::MessageType::QsoLogged,
            Payload::QsoLogged(proto::QsoLogged {
                datetime_off: wire_time(0),
                dx_call: String::from("JA1ABC"),
                dx_grid: String::from("PM95"),
                tx_frequency: 14_075_500,
                mode: String::from("FT8"),
                report_sent: String::from("-10"),
                report_received: String::from("-05"),
                tx_power: String::from("50"),
                comments: String::from("tnx"),
                datetime_on: wire_time(-90),
                operator_call: String::from("BG0AAA"),
                my_call: String::from("BG0AAA"),
                my_grid: String::from("OM89"),
                exchange_sent: Some(String::from("599 001")),
                exchange_received: None,
                adif_propagation_mode: Some(String::from("ES")),
            }),
            WsjtxPayload::QsoLogged(QsoLogged {
                datetime_off: domain_time(0),
                dx_call: String::from("JA1ABC"),
                dx_grid: String::from("PM95"),
                tx_frequency: 14_075_500,
                mode: String::from("FT8"),
                report_sent: String::from("-10"),
                report_received: String::from("-05"),
                tx_power: String::from("50"),
                comments: String::from("tnx"),
                datetime_on: domain_time(-90),
                operator_call: String::from("BG0AAA"),
                my_call: String::from("BG0AAA"),
                my_grid: String::from("OM89"),
                exchange_sent: Some(String::from("599 001")),
                exchange_received: None,
                adif_propagation_mode: Some(String::from("ES")),
            }),
        ),
        (
            proto::MessageType::Close,
            Payload::Close(proto::Close {}),
            WsjtxPayload::Close(Close),
        ),
        (
            proto::MessageType::HaltTx,
            Payload::HaltTx(proto::HaltTx { auto_tx_only: true }),
            WsjtxPayload::HaltTx(HaltTx { auto_tx_only: true }),
        ),
        (
            proto::MessageType::FreeText,
            Payload::FreeText(proto::FreeText {
                text: String::from("TNX 73"),
                send: true,
            }),
            WsjtxPayload::FreeText(FreeText {
                text: String::from("TNX 73"),
                send: true,
            }),
        ),
        (
            proto::MessageType::WsprDecode,
            Payload::WsprDecode(proto::WsprDecode {
                is_new: false,
                time: wire_time(-120),
                snr: -25,
                delta_time: 1.1,
                frequency: 14_097_050,
                drift: -1,
                callsign: String::from("K1ABC"),
                grid: String::from("FN42"),
                power: 37,
                off_air: Some(false),
            }),
            WsjtxPayload::WsprDecode(WsprDecode {
                is_new: false,
                time: domain_time(-120),
                snr: -25,
                delta_time: 1.1,
                frequency: 14_097_050,
                drift: -1,
                callsign: String::from("K1ABC"),
                grid: String::from("FN42"),
                power: 37,
                off_air: Some(false),
            }),
        ),
        (
            proto::MessageType::Location,
            Payload::Location(proto::Location {
                location: String::from("OM89ab"),
            }),
            WsjtxPayload::Location(Location {
                location: String::from("OM89ab"),
            }),
        ),
        (
            proto::MessageType::LoggedAdif,
            Payload::LoggedAdif(proto::LoggedAdif {
                adif_text: String::from("<call:6>JA1ABC <eor>"),
            }),
            WsjtxPayload::LoggedAdif(LoggedAdif {
                adif_text: String::from("<call:6>JA1ABC <eor>"),
            }),
        ),
        (
            proto::MessageType::HighlightCallsign,
            Payload::HighlightCallsign(proto::HighlightCallsign {
                callsign: String::from("JA1ABC"),
                background_color: 0xff00_00ff,
                foreground_color: 0xffff_ffff,
                highlight_last: true,
            }),
            WsjtxPayload::HighlightCallsign(HighlightCallsign {
                callsign: String::from("JA1ABC"),
                background_color: 0xff00_00ff,
                foreground_color: 0xffff_ffff,
                highlight_last: true,
            }),
        ),
        (
            proto::MessageType::SwitchConfiguration,
            Payload::SwitchConfiguration(proto::SwitchConfiguration {
                config_name: String::from("Contest"),
            }),
            WsjtxPayload::SwitchConfiguration(SwitchConfiguration {
                config_name: String::from("Contest"),
            }),
        ),
        (
            proto::MessageType::Configure,
            Payload::Configure(proto::Configure {
                mode: String::from("FT4"),
                frequency_tolerance: 50,
                sub_mode: String::from("A"),
                fast_mode: true,
                tr_period: 7,
                rx_df: 900,
                dx_call: String::from("K1ABC"),
                dx_grid: String::from("FN42"),
                generate_messages: true,
            }),
            WsjtxPayload::Configure(Configure {
                mode: String::from("FT4"),
                frequency_tolerance: 50,
                sub_mode: String::from("A"),
                fast_mode: true,
                tr_period: 7,
                rx_df: 900,
                dx_call: String::from("K1ABC"),
                dx_grid: String::from("FN42"),
                generate_messages: true,
            }),
        ),
    ];
    assert_eq!(cases.len(), 15, "every payload kind must be covered");

    for (message_type, payload, expected) in cases {
        // WHEN: Converting after a trip through the encoder
        let message = convert(wire_message(message_type, Some(payload)))
            .unwrap_or_else(|e| panic!("{message_type:?} failed to convert: {e}"));

        // THEN: Same kind, same fields, consistent header
        assert_eq!(message.header.message_type, expected.message_type());
        assert_eq!(message.header.magic_number, MAGIC);
        assert_eq!(message.header.id, "WSJT-X");
        assert_eq!(message.timestamp, domain_time(0));
        assert_eq!(message.payload, Some(expected));
    }
}

/// **VALUE**: Verifies that an unset optional stays absent rather than becoming "".
///
/// **WHY THIS MATTERS**: WSJT-X only sends a revision on some builds. A plugin that
/// shows "revision: " for a missing value, or compares against "", gets it wrong if
/// absence collapses to an empty string.
#[test]
fn given_heartbeat_without_revision_when_converted_then_revision_is_absent() {
    // GIVEN: Heartbeat with revision unset
    let wire = wire_message(
        proto::MessageType::Heartbeat,
        Some(Payload::Heartbeat(proto::Heartbeat {
            max_schema_number: 3,
            version: String::from("V"),
            revision: None,
        })),
    );

    // WHEN
    let message = convert(wire).expect("heartbeat should convert");

    // THEN
    assert_eq!(
        message.payload,
        Some(WsjtxPayload::Heartbeat(Heartbeat {
            max_schema_number: 3,
            version: String::from("V"),
            revision: None,
        }))
    );
}

#[test]
fn given_present_but_empty_optionals_when_converted_then_presence_is_kept() {
    // GIVEN: Optionals explicitly set to their zero values
    let wire = wire_message(
        proto::MessageType::Status,
        Some(Payload::Status(proto::Status {
            special_op_mode: Some(proto::SpecialOperationMode::Off as i32),
            frequency_tolerance: Some(0),
            tr_period: None,
            config_name: Some(String::new()),
            tx_message: None,
            ..Default::default()
        })),
    );

    // WHEN
    let message = convert(wire).expect("status should convert");

    // THEN: Zero-but-present and absent stay distinguishable
    let Some(WsjtxPayload::Status(status)) = message.payload else {
        panic!("Expected Status payload");
    };
    assert_eq!(status.special_op_mode, Some(SpecialOperationMode::Off));
    assert_eq!(status.frequency_tolerance, Some(0));
    assert_eq!(status.tr_period, None);
    assert_eq!(status.config_name, Some(String::new()));
    assert_eq!(status.tx_message, None);
}

#[test]
fn given_decode_without_time_when_converted_then_time_is_epoch() {
    let wire = proto::WsjtxMessage {
        header: Some(header(proto::MessageType::Decode)),
        timestamp: None,
        payload: Some(Payload::Decode(proto::Decode::default())),
    };

    let message = convert(wire).expect("decode should convert");

    assert_eq!(message.timestamp, UNIX_EPOCH);
    let Some(WsjtxPayload::Decode(decode)) = message.payload else {
        panic!("Expected Decode payload");
    };
    assert_eq!(decode.time, UNIX_EPOCH);
}

/// **VALUE**: Verifies that a header type which disagrees with the payload is rejected.
///
/// **WHY THIS MATTERS**: Plugins may dispatch on either the header tag or the payload
/// variant. If the two can disagree, the same frame means different things to
/// different plugins.
#[test]
fn given_header_type_mismatching_payload_when_converted_then_returns_conversion_error() {
    // GIVEN: Header says Status, payload is a Heartbeat
    let wire = wire_message(
        proto::MessageType::Status,
        Some(Payload::Heartbeat(proto::Heartbeat::default())),
    );

    // WHEN
    let result = convert(wire);

    // THEN
    match result {
        Err(ModelError::Conversion { message, .. }) => {
            assert!(message.contains("Status"), "message was: {message}");
            assert!(message.contains("Heartbeat"), "message was: {message}");
        }
        other => panic!("Expected conversion error, got {other:?}"),
    }
}

#[test]
fn given_missing_header_when_converted_then_returns_conversion_error() {
    let wire = proto::WsjtxMessage {
        header: None,
        timestamp: None,
        payload: Some(Payload::Close(proto::Close {})),
    };

    let result = convert(wire);

    assert!(matches!(result, Err(ModelError::Conversion { .. })));
}

/// **VALUE**: Verifies that a payload kind newer than this SDK yields an unset payload.
///
/// **WHY THIS MATTERS**: The host may add a 16th WSJT-X kind before plugins upgrade.
/// Old plugins must keep running and skip the frame, not crash.
#[test]
fn given_unknown_payload_tag_when_converted_then_payload_is_unset() {
    // GIVEN: A valid message with an extra length-delimited field (tag 40) appended
    let mut bytes = proto::WsjtxMessage {
        header: Some(proto::MessageHeader {
            r#type: 16,
            ..header(proto::MessageType::Heartbeat)
        }),
        timestamp: wire_time(0),
        payload: None,
    }
    .encode_to_vec();
    bytes.extend_from_slice(&[0xc2, 0x02, 0x00]);

    // WHEN
    let decoded = proto::WsjtxMessage::decode(&bytes[..]).expect("unknown fields are skipped");
    let message = WsjtxMessage::try_from(decoded).expect("should convert");

    // THEN
    assert_eq!(message.payload, None);
    assert_eq!(message.header.message_type, MessageType::Unrecognized(16));
}

#[test]
fn given_replay_header_without_payload_when_converted_then_succeeds_with_unset_payload() {
    let wire = wire_message(proto::MessageType::Replay, None);

    let message = convert(wire).expect("replay should convert");

    assert_eq!(message.header.message_type, MessageType::Replay);
    assert!(message.payload.is_none());
}

/// **VALUE**: Verifies that a packed batch keeps every entry, in order.
///
/// **WHY THIS MATTERS**: Decodes in one period are batched. Reordering or dropping
/// entries would corrupt band-activity displays built from the batch.
#[test]
fn given_packed_batch_when_converted_then_same_count_in_host_order() {
    // GIVEN: Three decodes with distinct messages
    let texts = ["CQ K1ABC FN42", "CQ JA1ABC PM95", "CQ DL1ABC JO62"];
    let wire = proto::PackedWsjtxMessage {
        messages: texts
            .iter()
            .map(|text| {
                wire_message(
                    proto::MessageType::Decode,
                    Some(Payload::Decode(proto::Decode {
                        message: text.to_string(),
                        ..Default::default()
                    })),
                )
            })
            .collect(),
        timestamp: wire_time(1),
    };

    // WHEN
    let packed = PackedWsjtxMessage::try_from(through_wire(&wire)).expect("batch should convert");

    // THEN
    assert_eq!(packed.messages.len(), 3);
    assert_eq!(packed.timestamp, domain_time(1));
    let decoded: Vec<&str> = packed
        .messages
        .iter()
        .map(|message| match &message.payload {
            Some(WsjtxPayload::Decode(decode)) => decode.message.as_str(),
            other => panic!("Expected Decode payload, got {other:?}"),
        })
        .collect();
    assert_eq!(decoded, texts);
}

#[test]
fn given_packed_batch_with_inconsistent_entry_when_converted_then_whole_batch_fails() {
    let wire = proto::PackedWsjtxMessage {
        messages: vec![
            wire_message(proto::MessageType::Close, Some(Payload::Close(proto::Close {}))),
            wire_message(proto::MessageType::Clear, Some(Payload::Close(proto::Close {}))),
        ],
        timestamp: None,
    };

    let result = PackedWsjtxMessage::try_from(wire);

    assert!(matches!(result, Err(ModelError::Conversion { .. })));
}

#[test]
fn given_reply_modifiers_when_inspected_then_bits_decode() {
    let modifiers = KeyModifiers(0x02 | 0x08);

    assert!(modifiers.contains(KeyModifiers::SHIFT));
    assert!(modifiers.contains(KeyModifiers::ALT));
    assert!(!modifiers.contains(KeyModifiers::CTRL));
    assert!(KeyModifiers::NONE.is_empty());
    assert_eq!(modifiers.bits(), 0x0a);
}
