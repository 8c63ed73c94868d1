use crate::helpers::{TEST_TIMEOUT, connected_client};

use clh_plugin_sdk::{ClientError, Message};

use models::message::{Heartbeat, WsjtxPayload};
use models::proto::{
    self, ClhInternalMessage, ClhQsoUploadStatusChanged, PackedWsjtxMessage, PipeConnectionClosed,
    PipeHeartbeat, RigData, WsjtxMessage, wsjtx_message::Payload,
};

use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

use prost_types::{Any, Timestamp};
use tokio::time::timeout;

fn wsjtx(message_type: proto::MessageType, payload: Payload) -> WsjtxMessage {
    WsjtxMessage {
        header: Some(proto::MessageHeader {
            magic_number: 0xadbc_cbda,
            schema_number: 3,
            r#type: message_type as i32,
            id: String::from("WSJT-X"),
        }),
        timestamp: Some(Timestamp {
            seconds: 1_700_000_000,
            nanos: 0,
        }),
        payload: Some(payload),
    }
}

fn free_text(text: &str) -> WsjtxMessage {
    wsjtx(
        proto::MessageType::FreeText,
        Payload::FreeText(proto::FreeText {
            text: text.to_string(),
            send: false,
        }),
    )
}

/// **VALUE**: End-to-end check of the basic plugin session.
///
/// **WHY THIS MATTERS**: This is the path every plugin takes: connect, receive a
/// WSJT-X heartbeat, close twice. Optional-field absence must survive the trip.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The envelope is not unwrapped before dispatch
/// - An unset revision comes back as `Some("")`
/// - Close fails while the heartbeat task is running
#[tokio::test]
async fn given_connected_client_when_host_sends_wsjtx_heartbeat_then_returns_it_with_absent_revision() {
    // GIVEN: A connected client
    let (client, _host, mut connection) = connected_client().await;

    // WHEN: The host sends a WSJT-X heartbeat with no revision
    connection
        .send_event(&wsjtx(
            proto::MessageType::Heartbeat,
            Payload::Heartbeat(proto::Heartbeat {
                max_schema_number: 3,
                version: String::from("V"),
                revision: None,
            }),
        ))
        .await;
    let message = client.wait_message().await.expect("Should receive a message");

    // THEN
    let Message::Wsjtx(wsjtx) = message else {
        panic!("Expected a WSJT-X message, got {message:?}");
    };
    assert_eq!(
        wsjtx.payload,
        Some(WsjtxPayload::Heartbeat(Heartbeat {
            max_schema_number: 3,
            version: String::from("V"),
            revision: None,
        }))
    );
    client.close().await.expect("First close should succeed");
    client.close().await.expect("Second close should succeed");
}

#[tokio::test]
async fn given_connected_client_when_host_sends_rig_data_then_returns_rig_data() {
    let (client, _host, mut connection) = connected_client().await;

    connection
        .send_event(&RigData {
            uuid: String::from("rig-1"),
            provider: String::from("FLRig"),
            rig_name: String::from("IC-7300"),
            frequency: 14_074_000,
            mode: String::from("USB"),
            split: true,
            power: 50,
            timestamp: None,
            ..Default::default()
        })
        .await;
    let message = client.wait_message().await.expect("Should receive a message");

    let Message::RigData(rig) = message else {
        panic!("Expected rig data, got {message:?}");
    };
    assert_eq!(rig.rig_name, "IC-7300");
    assert_eq!(rig.frequency, 14_074_000);
    assert!(rig.split);
    assert_eq!(rig.timestamp, UNIX_EPOCH);

    client.close().await.expect("Close should succeed");
}

/// **VALUE**: Verifies that a packed batch arrives whole and in order.
#[tokio::test]
async fn given_packed_batch_when_received_then_entries_keep_host_order() {
    // GIVEN
    let (client, _host, mut connection) = connected_client().await;
    let texts = ["one", "two", "three", "four"];

    // WHEN
    connection
        .send_event(&PackedWsjtxMessage {
            messages: texts.iter().map(|text| free_text(text)).collect(),
            timestamp: None,
        })
        .await;
    let message = client.wait_message().await.expect("Should receive a message");

    // THEN
    let Message::PackedWsjtx(packed) = message else {
        panic!("Expected a packed batch, got {message:?}");
    };
    let received: Vec<String> = packed
        .messages
        .into_iter()
        .map(|message| match message.payload {
            Some(WsjtxPayload::FreeText(free_text)) => free_text.text,
            other => panic!("Expected FreeText, got {other:?}"),
        })
        .collect();
    assert_eq!(received, texts);

    client.close().await.expect("Close should succeed");
}

#[tokio::test]
async fn given_internal_events_when_received_then_upload_status_and_close_sentinel_are_delivered() {
    // GIVEN
    let (client, _host, mut connection) = connected_client().await;
    let mut status = ClhQsoUploadStatusChanged {
        dx_call: String::from("JA1ABC"),
        forced_upload: true,
        ..Default::default()
    };
    status
        .uploaded_services
        .insert(String::from("qrz"), true);

    // WHEN
    connection
        .send_event(&ClhInternalMessage {
            qso_upload_status: Some(status),
            timestamp: None,
        })
        .await;
    connection
        .send_event(&PipeConnectionClosed {
            timestamp: Some(Timestamp {
                seconds: 60,
                nanos: 0,
            }),
        })
        .await;
    let internal = client.wait_message().await.expect("Should receive internal event");
    let closed = client.wait_message().await.expect("Should receive close sentinel");

    // THEN
    let Message::ClhInternal(internal) = internal else {
        panic!("Expected internal message, got {internal:?}");
    };
    let status = internal.qso_upload_status.expect("status should be present");
    assert_eq!(status.dx_call, "JA1ABC");
    assert_eq!(status.uploaded_services.get("qrz"), Some(&true));
    assert!(status.forced_upload);
    assert_eq!(
        closed,
        Message::PipeConnectionClosed(models::message::PipeConnectionClosed {
            timestamp: UNIX_EPOCH + Duration::from_secs(60),
        })
    );

    client.close().await.expect("Close should succeed");
}

/// **VALUE**: Verifies that per-frame failures do not poison the channel.
///
/// **WHY THIS MATTERS**: The host may run a newer schema than the plugin. A plugin must
/// be able to skip a frame it cannot understand and keep receiving.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - A corrupt body leaves the stream misaligned
/// - Unknown and unhandled types are reported the same way
/// - A header/payload mismatch tears the connection down
#[tokio::test]
async fn given_bad_frames_between_good_ones_when_received_then_each_fails_alone() {
    // GIVEN: Four bad frames followed by one good frame
    let (client, _host, mut connection) = connected_client().await;
    connection.send_raw(&[0x02, 0xff, 0xff]).await;
    connection
        .send_envelope(&Any {
            type_url: String::from("type.googleapis.com/plugin.FutureEvent"),
            value: Vec::new(),
        })
        .await;
    connection
        .send_event(&PipeHeartbeat {
            uuid: String::from("host"),
            timestamp: None,
        })
        .await;
    connection
        .send_event(&wsjtx(
            proto::MessageType::Status,
            Payload::Close(proto::Close {}),
        ))
        .await;
    connection.send_event(&free_text("still here")).await;

    // WHEN: Receiving five times
    let corrupt = client.wait_message().await;
    let unknown = client.wait_message().await;
    let unhandled = client.wait_message().await;
    let mismatched = client.wait_message().await;
    let good = client.wait_message().await;

    // THEN: Each bad frame has its own decode error; the good one still arrives
    assert!(matches!(corrupt, Err(ClientError::ProtobufDecode { .. })));
    match unknown {
        Err(ClientError::UnknownType { message, .. }) => {
            assert!(message.contains("plugin.FutureEvent"))
        }
        other => panic!("Expected unknown type, got {other:?}"),
    }
    match unhandled {
        Err(ClientError::UnhandledType { message, .. }) => {
            assert!(message.contains("plugin.PipeHeartbeat"))
        }
        other => panic!("Expected unhandled type, got {other:?}"),
    }
    let mismatched = mismatched.expect_err("mismatch should fail");
    assert!(mismatched.is_decode(), "got {mismatched}");
    match good.expect("Good frame should arrive") {
        Message::Wsjtx(message) => assert!(matches!(
            message.payload,
            Some(WsjtxPayload::FreeText(ref text)) if text.text == "still here"
        )),
        other => panic!("Expected WSJT-X message, got {other:?}"),
    }

    client.close().await.expect("Close should succeed");
}

/// **VALUE**: Verifies that Close unblocks a pending receive with a shutdown error.
///
/// **WHY THIS MATTERS**: A plugin's receive loop runs until told to stop. It must be
/// able to tell "you asked me to stop" apart from "the stream broke" to exit cleanly.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Close waits for the pending read to finish on its own
/// - The interrupted read surfaces as a raw I/O error
#[tokio::test]
async fn given_pending_receive_when_client_closes_then_receive_returns_shutdown() {
    // GIVEN: A receive waiting on a quiet channel
    let (client, _host, _connection) = connected_client().await;
    let waiter = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.wait_message().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    // WHEN: Closing from another task
    timeout(TEST_TIMEOUT, client.close())
        .await
        .expect("Close must not block on a pending receive")
        .expect("Close should succeed");

    // THEN
    let result = timeout(TEST_TIMEOUT, waiter)
        .await
        .expect("Pending receive must unblock")
        .expect("Receive task panicked");
    let error = result.expect_err("Receive should fail after close");
    assert!(error.is_shutdown(), "got {error}");
    assert!(error.is_terminal());

    // THEN: Later receives report the same
    let later = client.wait_message().await.expect_err("Receive after close");
    assert!(later.is_shutdown());
}

#[tokio::test]
async fn given_host_closes_channel_when_receiving_then_returns_disconnected() {
    let (client, _host, connection) = connected_client().await;

    connection.close().await;
    let error = client
        .wait_message()
        .await
        .expect_err("Receive should fail once the host hangs up");

    assert!(matches!(error, ClientError::Disconnected { .. }));
    assert!(error.is_terminal());
    client.close().await.expect("Close after a host hang-up should succeed");
}
