use crate::ClientError;
use crate::codec::envelope::{WireMessage, is_registered, pack, unpack};

use models::proto::{PackedWsjtxMessage, PipeHeartbeat, RigData};

use prost_types::Any;

#[test]
fn given_wire_message_when_packed_then_type_url_names_plugin_package() {
    let envelope = pack(&RigData::default()).expect("pack should succeed");

    assert_eq!(envelope.type_url, "type.googleapis.com/plugin.RigData");
}

#[test]
fn given_packed_rig_data_when_unpacked_then_same_wire_message() {
    // GIVEN
    let rig = RigData {
        provider: String::from("FLRig"),
        rig_name: String::from("IC-7300"),
        frequency: 14_074_000,
        ..Default::default()
    };
    let envelope = pack(&rig).expect("pack should succeed");

    // WHEN
    let unpacked = unpack(&envelope).expect("registered type should unpack");

    // THEN
    assert_eq!(unpacked, WireMessage::RigData(rig));
}

/// **VALUE**: Verifies that lookup ignores the type URL prefix.
///
/// **WHY THIS MATTERS**: Protobuf only guarantees the part after the last `/`. A
/// host that switches prefixes must not break every plugin.
#[test]
fn given_custom_url_prefix_when_unpacked_then_resolves_by_full_name() {
    let envelope = Any {
        type_url: String::from("example.org/types/plugin.PackedWsjtxMessage"),
        value: Vec::new(),
    };

    let unpacked = unpack(&envelope).expect("prefix should not matter");

    assert_eq!(
        unpacked,
        WireMessage::PackedWsjtxMessage(PackedWsjtxMessage::default())
    );
}

#[test]
fn given_unregistered_type_url_when_unpacked_then_returns_unknown_type() {
    let envelope = Any {
        type_url: String::from("type.googleapis.com/plugin.Mystery"),
        value: Vec::new(),
    };

    let result = unpack(&envelope);

    match result {
        Err(ClientError::UnknownType { message, .. }) => assert!(message.contains("plugin.Mystery")),
        other => panic!("Expected unknown type, got {other:?}"),
    }
}

#[test]
fn given_registered_type_with_bad_value_when_unpacked_then_returns_decode_error() {
    let envelope = Any {
        type_url: String::from("type.googleapis.com/plugin.PipeHeartbeat"),
        value: vec![0xff, 0xff],
    };

    let result = unpack(&envelope);

    assert!(matches!(result, Err(ClientError::ProtobufDecode { .. })));
}

#[test]
fn given_every_frame_type_when_checked_then_registry_knows_it() {
    let names = [
        "RigData",
        "WsjtxMessage",
        "PackedWsjtxMessage",
        "ClhInternalMessage",
        "PipeConnectionClosed",
        "PipeRegisterPluginReq",
        "PipeRegisterPluginResp",
        "PipeHeartbeat",
    ];

    for name in names {
        assert!(is_registered(&format!("type.googleapis.com/plugin.{name}")), "{name}");
    }
    assert!(!is_registered("type.googleapis.com/plugin.MessageHeader"));
}

#[test]
fn given_heartbeat_envelope_when_unpacked_then_full_name_is_reported() {
    let envelope = pack(&PipeHeartbeat::default()).expect("pack should succeed");

    let unpacked = unpack(&envelope).expect("registered type should unpack");

    assert_eq!(unpacked.full_name(), "plugin.PipeHeartbeat");
}
