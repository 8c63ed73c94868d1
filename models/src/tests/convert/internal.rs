use super::{domain_time, through_wire, wire_time};

use crate::message::{ClhInternalMessage, PipeConnectionClosed};
use crate::proto;

use std::collections::HashMap;
use std::time::UNIX_EPOCH;

#[test]
fn given_upload_status_when_converted_then_service_maps_and_times_survive() {
    // GIVEN: One service accepted the QSO, one rejected it
    let wire = proto::ClhInternalMessage {
        qso_upload_status: Some(proto::ClhQsoUploadStatusChanged {
            uploaded_services: HashMap::from([
                (String::from("qrz"), true),
                (String::from("clublog"), false),
            ]),
            uploaded_services_error_message: HashMap::from([(
                String::from("clublog"),
                String::from("invalid api key"),
            )]),
            dx_call: String::from("JA1ABC"),
            cq_zone: 25,
            latitude: 35.5,
            date_time_on: wire_time(-120),
            date_time_off: wire_time(0),
            upload_status: 2,
            forced_upload: true,
            ..Default::default()
        }),
        timestamp: wire_time(5),
    };

    // WHEN
    let message = ClhInternalMessage::from(through_wire(&wire));

    // THEN
    let status = message
        .qso_upload_status
        .expect("upload status should be present");
    assert_eq!(status.uploaded_services.get("qrz"), Some(&true));
    assert_eq!(status.uploaded_services.get("clublog"), Some(&false));
    assert_eq!(
        status.uploaded_services_error_message.get("clublog"),
        Some(&String::from("invalid api key"))
    );
    assert_eq!(status.dx_call, "JA1ABC");
    assert_eq!(status.cq_zone, 25);
    assert_eq!(status.latitude, 35.5);
    assert_eq!(status.date_time_on, domain_time(-120));
    assert_eq!(status.date_time_off, domain_time(0));
    assert_eq!(status.upload_status, 2);
    assert!(status.forced_upload);
    assert_eq!(message.timestamp, domain_time(5));
}

#[test]
fn given_internal_message_without_status_when_converted_then_status_is_absent() {
    // GIVEN: An internal message carrying nothing but a timestamp
    let wire = proto::ClhInternalMessage {
        qso_upload_status: None,
        timestamp: None,
    };

    // WHEN
    let message = ClhInternalMessage::from(through_wire(&wire));

    // THEN
    assert!(message.qso_upload_status.is_none());
    assert_eq!(message.timestamp, UNIX_EPOCH);
}

#[test]
fn given_connection_closed_sentinel_when_converted_then_keeps_timestamp() {
    let wire = proto::PipeConnectionClosed {
        timestamp: wire_time(9),
    };

    let closed = PipeConnectionClosed::from(through_wire(&wire));

    assert_eq!(closed.timestamp, domain_time(9));
}
