use crate::convert::timestamp_or_epoch;
use crate::message::{ClhInternalMessage, PipeConnectionClosed, QsoUploadStatusChanged};
use crate::proto;

impl From<proto::ClhQsoUploadStatusChanged> for QsoUploadStatusChanged {
    fn from(wire: proto::ClhQsoUploadStatusChanged) -> Self {
        Self {
            uploaded_services: wire.uploaded_services,
            uploaded_services_error_message: wire.uploaded_services_error_message,
            original_country_name: wire.original_country_name,
            cq_zone: wire.cq_zone,
            itu_zone: wire.itu_zone,
            continent: wire.continent,
            latitude: wire.latitude,
            longitude: wire.longitude,
            gmt_offset: wire.gmt_offset,
            dxcc: wire.dxcc,
            date_time_off: timestamp_or_epoch(wire.date_time_off),
            dx_call: wire.dx_call,
            dx_grid: wire.dx_grid,
            tx_frequency_in_hz: wire.tx_frequency_in_hz,
            tx_frequency_in_meters: wire.tx_frequency_in_meters,
            mode: wire.mode,
            parent_mode: wire.parent_mode,
            report_sent: wire.report_sent,
            report_received: wire.report_received,
            tx_power: wire.tx_power,
            comments: wire.comments,
            name: wire.name,
            date_time_on: timestamp_or_epoch(wire.date_time_on),
            operator_call: wire.operator_call,
            my_call: wire.my_call,
            my_grid: wire.my_grid,
            exchange_sent: wire.exchange_sent,
            exchange_received: wire.exchange_received,
            adif_propagation_mode: wire.adif_propagation_mode,
            client_id: wire.client_id,
            raw_data: wire.raw_data,
            fail_reason: wire.fail_reason,
            upload_status: wire.upload_status,
            forced_upload: wire.forced_upload,
        }
    }
}

impl From<proto::ClhInternalMessage> for ClhInternalMessage {
    fn from(wire: proto::ClhInternalMessage) -> Self {
        Self {
            qso_upload_status: wire.qso_upload_status.map(QsoUploadStatusChanged::from),
            timestamp: timestamp_or_epoch(wire.timestamp),
        }
    }
}

impl From<proto::PipeConnectionClosed> for PipeConnectionClosed {
    fn from(wire: proto::PipeConnectionClosed) -> Self {
        Self {
            timestamp: timestamp_or_epoch(wire.timestamp),
        }
    }
}
