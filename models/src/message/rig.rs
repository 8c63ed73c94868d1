use std::time::SystemTime;

use serde::Serialize;

/// Live state of a connected transceiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RigData {
    pub uuid: String,
    pub provider: String,
    pub rig_name: String,
    /// TX (or simplex) frequency in Hz.
    pub frequency: u64,
    pub mode: String,
    /// RX frequency in Hz; only meaningful when `split` is set.
    pub frequency_rx: u64,
    pub mode_rx: String,
    pub split: bool,
    pub power: u32,
    pub timestamp: SystemTime,
}
