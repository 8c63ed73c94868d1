use std::collections::HashMap;
use std::time::SystemTime;

use serde::Serialize;

/// Outcome of uploading one logged QSO to the configured logbook services.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QsoUploadStatusChanged {
    /// Service name → upload succeeded.
    pub uploaded_services: HashMap<String, bool>,
    /// Service name → failure text for services that rejected the upload.
    pub uploaded_services_error_message: HashMap<String, String>,
    pub original_country_name: String,
    pub cq_zone: i32,
    pub itu_zone: i32,
    pub continent: String,
    pub latitude: f32,
    pub longitude: f32,
    pub gmt_offset: f32,
    pub dxcc: String,
    pub date_time_off: SystemTime,
    pub dx_call: String,
    pub dx_grid: String,
    pub tx_frequency_in_hz: u64,
    pub tx_frequency_in_meters: String,
    pub mode: String,
    pub parent_mode: String,
    pub report_sent: String,
    pub report_received: String,
    pub tx_power: String,
    pub comments: String,
    pub name: String,
    pub date_time_on: SystemTime,
    pub operator_call: String,
    pub my_call: String,
    pub my_grid: String,
    pub exchange_sent: String,
    pub exchange_received: String,
    pub adif_propagation_mode: String,
    pub client_id: String,
    pub raw_data: String,
    pub fail_reason: String,
    pub upload_status: i32,
    pub forced_upload: bool,
}

/// Host-internal notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClhInternalMessage {
    pub qso_upload_status: Option<QsoUploadStatusChanged>,
    pub timestamp: SystemTime,
}

/// The host is tearing the channel down; no further frames follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipeConnectionClosed {
    pub timestamp: SystemTime,
}
