//! Pure wire → domain conversions.
//!
//! Conversions never touch I/O. Rules applied throughout:
//!
//! - optional wire fields stay `Option<T>`; presence is never collapsed to a default
//! - an absent wire timestamp becomes [`UNIX_EPOCH`], not an error
//! - a WSJT-X header whose type disagrees with its payload is rejected

mod internal;
mod rig;
mod wsjtx;

use std::time::{SystemTime, UNIX_EPOCH};

use prost_types::Timestamp;

/// Convert an optional wire timestamp, mapping absence to the epoch.
///
/// A present timestamp outside the range `SystemTime` can represent is also
/// mapped to the epoch.
pub fn timestamp_or_epoch(timestamp: Option<Timestamp>) -> SystemTime {
    timestamp
        .and_then(|ts| SystemTime::try_from(ts).ok())
        .unwrap_or(UNIX_EPOCH)
}
