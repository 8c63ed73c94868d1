use prost_types::Timestamp;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RigData {
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(string, tag = "2")]
    pub provider: String,
    #[prost(string, tag = "3")]
    pub rig_name: String,
    #[prost(uint64, tag = "4")]
    pub frequency: u64,
    #[prost(string, tag = "5")]
    pub mode: String,
    #[prost(uint64, tag = "6")]
    pub frequency_rx: u64,
    #[prost(string, tag = "7")]
    pub mode_rx: String,
    #[prost(bool, tag = "8")]
    pub split: bool,
    #[prost(uint32, tag = "9")]
    pub power: u32,
    #[prost(message, optional, tag = "10")]
    pub timestamp: Option<Timestamp>,
}

wire_name!(RigData, "RigData");
