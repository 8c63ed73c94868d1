use crate::helpers::{TEST_TIMEOUT, client_with_host, connected_client};

use clh_plugin_sdk::{ClientError, ClientState};

use models::proto::Capability as WireCapability;

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::time::timeout;

// ============================================================================
// Public API tests for the client lifecycle
// The test plays the host on the far end of an in-memory pipe
// ============================================================================

// ----------------------------------------------------------------------------
// connect() - registration handshake
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies that Connect announces the full plugin identity.
///
/// **WHY THIS MATTERS**: The host routes events by declared capability and shows the
/// identity to the user. A missing field or a wrong capability value means the plugin
/// receives nothing.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Registration is sent inside an envelope instead of as a bare frame
/// - Capabilities are encoded with the wrong enumeration values
/// - Any identity field is dropped
#[tokio::test]
async fn given_valid_client_when_connecting_then_host_receives_full_registration() {
    // GIVEN: A client and a host that accepts registrations
    let (client, mut host) = client_with_host();

    // WHEN: Connecting
    let (connected, (_connection, request)) =
        tokio::join!(client.connect(), host.accept_and_register(true, "ok"));

    // THEN: Connect succeeds and the request carries the identity
    connected.expect("Connect should succeed");
    assert_eq!(request.uuid, "p1");
    assert_eq!(request.name, "Plugin");
    assert_eq!(request.version, "1.0.0");
    assert_eq!(request.description, "test");
    assert_eq!(request.capabilities, vec![WireCapability::WsjtxMessage as i32]);
    assert_eq!(client.state().await, ClientState::Connected);

    client.close().await.expect("Close should succeed");
}

/// **VALUE**: Verifies that a rejected registration fails Connect and starts no heartbeat.
///
/// **WHY THIS MATTERS**: The host rejects plugins it does not trust. A plugin that kept
/// heartbeating after rejection would look alive to the host and confuse its bookkeeping.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The success flag is ignored
/// - The host's message is dropped from the error
/// - The heartbeat is spawned before the response is checked
/// - The rejected stream is kept open
#[tokio::test]
async fn given_host_rejects_registration_when_connecting_then_handshake_error_and_no_heartbeat() {
    // GIVEN: A host that replies success=false, message="blocked"
    let (client, mut host) = client_with_host();

    // WHEN: Connecting
    let (connected, (mut connection, _)) =
        tokio::join!(client.connect(), host.accept_and_register(false, "blocked"));

    // THEN: Handshake error carrying the host's message
    match connected {
        Err(ClientError::Handshake { message, .. }) => {
            assert!(message.contains("blocked"), "message was: {message}")
        }
        other => panic!("Expected handshake error, got {other:?}"),
    }

    // THEN: The channel closes without a single heartbeat, even past one interval
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(connection.drain_until_closed().await, 0);
    assert_eq!(client.state().await, ClientState::Created);
}

#[tokio::test]
async fn given_host_closes_before_responding_when_connecting_then_handshake_error() {
    let (client, mut host) = client_with_host();

    let (connected, ()) = tokio::join!(client.connect(), async {
        let mut connection = host.accept().await;
        let _: models::proto::PipeRegisterPluginReq = connection.read().await;
        connection.close().await;
    });

    assert!(matches!(connected, Err(ClientError::Handshake { .. })));
}

/// **VALUE**: Verifies that Close interrupts a Connect still waiting on the host.
///
/// **WHY THIS MATTERS**: A host that accepts the channel but never answers registration
/// must not be able to keep the plugin from shutting down on Ctrl-C.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Connect holds the session lock across the handshake read without watching shutdown
/// - Close waits for a Connect that can never finish
#[tokio::test]
async fn given_host_never_answers_registration_when_closing_then_close_returns_and_connect_shuts_down() {
    // GIVEN: Connect is blocked on the registration response
    let (client, mut host) = client_with_host();
    let connecting = tokio::spawn({
        let client = Arc::clone(&client);
        async move { client.connect().await }
    });
    let mut connection = host.accept().await;
    let _: models::proto::PipeRegisterPluginReq = connection.read().await;

    // WHEN: Closing while the host stays silent
    timeout(TEST_TIMEOUT, client.close())
        .await
        .expect("Close should not wait for the handshake")
        .expect("Close should succeed");

    // THEN: Connect fails with Shutdown and the client is closed
    let connected = timeout(TEST_TIMEOUT, connecting)
        .await
        .expect("Connect should return after close")
        .expect("Connect task should not panic");
    match connected {
        Err(error) => assert!(error.is_shutdown(), "Expected shutdown, got {error:?}"),
        Ok(()) => panic!("Connect should not succeed after close"),
    }
    assert_eq!(client.state().await, ClientState::Closed);
    drop(connection);
}

#[tokio::test]
async fn given_dial_fails_when_connecting_then_connection_error_and_retry_succeeds() {
    // GIVEN: The first dial finds nothing listening
    let (client, mut host) = client_with_host();
    host.refuse_next_dial();

    // WHEN: Connecting twice
    let first = client.connect().await;
    let (second, _) = tokio::join!(client.connect(), host.accept_and_register(true, "ok"));

    // THEN: First fails with a connection error, client stays reusable
    assert!(matches!(first, Err(ClientError::Connection { .. })));
    second.expect("Retry after a failed dial should succeed");
    assert_eq!(client.state().await, ClientState::Connected);

    client.close().await.expect("Close should succeed");
}

// ----------------------------------------------------------------------------
// heartbeat loop
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies that heartbeats flow on the configured interval with id and time.
///
/// **WHY THIS MATTERS**: The host drops plugins it stops hearing from. No heartbeat
/// means the plugin is silently disconnected after the host's timeout.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The heartbeat task is never spawned
/// - Heartbeats are enveloped instead of sent bare
/// - The uuid or timestamp is left empty
#[tokio::test]
async fn given_connected_client_when_interval_elapses_then_host_receives_heartbeats() {
    // GIVEN: A connected client with a 1s interval
    let (client, _host, mut connection) = connected_client().await;
    let started = SystemTime::now();

    // WHEN: Waiting for two heartbeats
    let first = connection.next_heartbeat().await;
    let second = connection.next_heartbeat().await;

    // THEN: Both identify the plugin and carry the send time
    for beat in [first, second] {
        assert_eq!(beat.uuid, "p1");
        let sent = SystemTime::try_from(beat.timestamp.expect("heartbeat has a timestamp"))
            .expect("timestamp should be valid");
        assert!(sent + Duration::from_secs(1) >= started);
    }

    client.close().await.expect("Close should succeed");
}

// ----------------------------------------------------------------------------
// close()
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies that Close is idempotent and leaves no background activity.
///
/// **WHY THIS MATTERS**: Plugins close from signal handlers and from normal exit paths,
/// often both. A second Close must not fail, and a heartbeat after Close would write
/// into a channel the plugin has given up.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Close does not wait for the heartbeat task
/// - The write half is left open after Close
/// - A second Close tries to shut the stream down again and errors
#[tokio::test]
async fn given_connected_client_when_closed_repeatedly_then_all_succeed_and_channel_ends() {
    // GIVEN
    let (client, _host, mut connection) = connected_client().await;

    // WHEN: Closing three times
    client.close().await.expect("First close should succeed");
    client.close().await.expect("Second close should succeed");
    client.close().await.expect("Third close should succeed");

    // THEN: The host sees the channel end, with nothing after it
    connection.drain_until_closed().await;
    tokio::time::sleep(Duration::from_millis(1200)).await;
    assert!(matches!(
        connection.try_read::<models::proto::PipeHeartbeat>().await,
        Err(ClientError::Disconnected { .. })
    ));
    assert_eq!(client.state().await, ClientState::Closed);
}

/// **VALUE**: Verifies that Closed is terminal.
///
/// **WHY THIS MATTERS**: Close is the only way to stop the heartbeat for good. If a late
/// Connect could revive the client, a plugin that shut down would reappear on the host.
#[tokio::test]
async fn given_closed_client_when_connecting_then_always_closed_error() {
    // GIVEN: Connect, then Close immediately
    let (client, _host, _connection) = connected_client().await;
    client.close().await.expect("Close should succeed");

    // WHEN/THEN: Every later Connect fails the same way, without dialing
    for _ in 0..3 {
        let result = timeout(TEST_TIMEOUT, client.connect())
            .await
            .expect("Connect after close must not block");
        assert!(matches!(result, Err(ClientError::Closed { .. })));
    }
}

#[tokio::test]
async fn given_connected_client_when_dropped_then_heartbeat_stops() {
    let (client, _host, mut connection) = connected_client().await;

    drop(client);

    assert!(connection.drain_until_closed().await <= 1);
}

// ----------------------------------------------------------------------------
// connect() while connected
// ----------------------------------------------------------------------------

/// **VALUE**: Verifies that re-Connect replaces the old connection instead of leaking it.
///
/// **WHY THIS MATTERS**: Each connection owns a heartbeat task. Keeping the old one alive
/// would heartbeat on a stale channel forever and hold its stream open.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - The previous heartbeat task is not cancelled
/// - The previous stream is not closed
/// - A receive pending on the old connection hangs
#[tokio::test]
async fn given_connected_client_when_connecting_again_then_previous_connection_is_torn_down() {
    // GIVEN: A connected client with a receive pending on the first connection
    let (client, mut host, mut first) = connected_client().await;
    let waiter = {
        let client = Arc::clone(&client);
        tokio::spawn(async move { client.wait_message().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    // WHEN: Connecting again
    let (reconnected, (mut second, _)) =
        tokio::join!(client.connect(), host.accept_and_register(true, "ok"));

    // THEN: The new connection is live
    reconnected.expect("Re-connect should succeed");
    assert_eq!(client.state().await, ClientState::Connected);

    // THEN: The pending receive reports the disconnect
    let pending = timeout(TEST_TIMEOUT, waiter)
        .await
        .expect("Pending receive must unblock")
        .expect("Receive task panicked");
    assert!(matches!(pending, Err(ClientError::Disconnected { .. })));

    // THEN: The old channel ended, the new one heartbeats
    first.drain_until_closed().await;
    assert_eq!(second.next_heartbeat().await.uuid, "p1");

    client.close().await.expect("Close should succeed");
}
