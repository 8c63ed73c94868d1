use super::{domain_time, through_wire, wire_time};

use crate::message::RigData;
use crate::proto;

use std::time::UNIX_EPOCH;

#[test]
fn given_wire_rig_data_when_converted_then_every_field_is_copied() {
    // GIVEN: A split-operation rig report
    let wire = proto::RigData {
        uuid: String::from("rig-1"),
        provider: String::from("flrig"),
        rig_name: String::from("IC-7300"),
        frequency: 14_074_000,
        mode: String::from("USB"),
        frequency_rx: 14_076_000,
        mode_rx: String::from("USB"),
        split: true,
        power: 50,
        timestamp: wire_time(0),
    };

    // WHEN: Converting after a trip through the encoder
    let rig = RigData::from(through_wire(&wire));

    // THEN
    assert_eq!(
        rig,
        RigData {
            uuid: String::from("rig-1"),
            provider: String::from("flrig"),
            rig_name: String::from("IC-7300"),
            frequency: 14_074_000,
            mode: String::from("USB"),
            frequency_rx: 14_076_000,
            mode_rx: String::from("USB"),
            split: true,
            power: 50,
            timestamp: domain_time(0),
        }
    );
}

/// **VALUE**: Verifies that a missing timestamp becomes the epoch instead of failing.
///
/// **WHY THIS MATTERS**: Older hosts omit timestamps on some frames. Rejecting those
/// frames would drop otherwise valid rig telemetry.
#[test]
fn given_missing_timestamp_when_converted_then_uses_epoch() {
    // GIVEN: Rig data without a timestamp
    let wire = proto::RigData::default();

    // WHEN
    let rig = RigData::from(through_wire(&wire));

    // THEN
    assert_eq!(rig.timestamp, UNIX_EPOCH);
}
