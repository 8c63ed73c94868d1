use crate::convert::timestamp_or_epoch;
use crate::message::RigData;
use crate::proto;

impl From<proto::RigData> for RigData {
    fn from(wire: proto::RigData) -> Self {
        Self {
            uuid: wire.uuid,
            provider: wire.provider,
            rig_name: wire.rig_name,
            frequency: wire.frequency,
            mode: wire.mode,
            frequency_rx: wire.frequency_rx,
            mode_rx: wire.mode_rx,
            split: wire.split,
            power: wire.power,
            timestamp: timestamp_or_epoch(wire.timestamp),
        }
    }
}
