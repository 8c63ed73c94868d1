mod internal;
mod rig;
mod wsjtx;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use prost::Message as ProstMessage;
use prost_types::Timestamp;

const SECONDS: i64 = 1_700_000_000;

fn wire_time(offset: i64) -> Option<Timestamp> {
    Some(Timestamp {
        seconds: SECONDS + offset,
        nanos: 0,
    })
}

fn domain_time(offset: i64) -> SystemTime {
    UNIX_EPOCH + Duration::from_secs((SECONDS + offset) as u64)
}

/// Encode then decode, so the assertions see what actually crosses the pipe.
fn through_wire<M: ProstMessage + Default>(message: &M) -> M {
    let bytes = message.encode_to_vec();
    M::decode(&bytes[..]).expect("Failed to decode protobuf")
}
