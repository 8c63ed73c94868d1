//! Host-internal events (package: plugin).

use std::collections::HashMap;

use prost_types::Timestamp;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClhQsoUploadStatusChanged {
    #[prost(map = "string, bool", tag = "1")]
    pub uploaded_services: HashMap<String, bool>,
    #[prost(map = "string, string", tag = "2")]
    pub uploaded_services_error_message: HashMap<String, String>,
    #[prost(string, tag = "3")]
    pub original_country_name: String,
    #[prost(int32, tag = "4")]
    pub cq_zone: i32,
    #[prost(int32, tag = "5")]
    pub itu_zone: i32,
    #[prost(string, tag = "6")]
    pub continent: String,
    #[prost(float, tag = "7")]
    pub latitude: f32,
    #[prost(float, tag = "8")]
    pub longitude: f32,
    #[prost(float, tag = "9")]
    pub gmt_offset: f32,
    #[prost(string, tag = "10")]
    pub dxcc: String,
    #[prost(message, optional, tag = "11")]
    pub date_time_off: Option<Timestamp>,
    #[prost(string, tag = "12")]
    pub dx_call: String,
    #[prost(string, tag = "13")]
    pub dx_grid: String,
    #[prost(uint64, tag = "14")]
    pub tx_frequency_in_hz: u64,
    #[prost(string, tag = "15")]
    pub tx_frequency_in_meters: String,
    #[prost(string, tag = "16")]
    pub mode: String,
    #[prost(string, tag = "17")]
    pub parent_mode: String,
    #[prost(string, tag = "18")]
    pub report_sent: String,
    #[prost(string, tag = "19")]
    pub report_received: String,
    #[prost(string, tag = "20")]
    pub tx_power: String,
    #[prost(string, tag = "21")]
    pub comments: String,
    #[prost(string, tag = "22")]
    pub name: String,
    #[prost(message, optional, tag = "23")]
    pub date_time_on: Option<Timestamp>,
    #[prost(string, tag = "24")]
    pub operator_call: String,
    #[prost(string, tag = "25")]
    pub my_call: String,
    #[prost(string, tag = "26")]
    pub my_grid: String,
    #[prost(string, tag = "27")]
    pub exchange_sent: String,
    #[prost(string, tag = "28")]
    pub exchange_received: String,
    #[prost(string, tag = "29")]
    pub adif_propagation_mode: String,
    #[prost(string, tag = "30")]
    pub client_id: String,
    #[prost(string, tag = "31")]
    pub raw_data: String,
    #[prost(string, tag = "32")]
    pub fail_reason: String,
    #[prost(int32, tag = "33")]
    pub upload_status: i32,
    #[prost(bool, tag = "34")]
    pub forced_upload: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ClhInternalMessage {
    #[prost(message, optional, tag = "1")]
    pub qso_upload_status: Option<ClhQsoUploadStatusChanged>,
    #[prost(message, optional, tag = "2")]
    pub timestamp: Option<Timestamp>,
}

/// Sentinel the host writes right before tearing the channel down.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PipeConnectionClosed {
    #[prost(message, optional, tag = "1")]
    pub timestamp: Option<Timestamp>,
}

wire_name!(ClhInternalMessage, "ClhInternalMessage");
wire_name!(PipeConnectionClosed, "PipeConnectionClosed");
