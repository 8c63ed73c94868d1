//! Test helpers for client integration tests.
//!
//! The host is simulated in-process:
//! - [`MockTransport`] hands the client one end of a duplex pipe per dial
//! - [`MockHost`] receives the other end as a [`HostConnection`]
//! - [`HostConnection`] answers registration, reads heartbeats and writes events

use clh_plugin_sdk::codec::envelope::pack;
use clh_plugin_sdk::codec::{read_frame, write_frame};
use clh_plugin_sdk::{Capability, ClhClient, ClhClientBuilder, ClientError, PluginConfig, Transport};

use models::proto::{PipeHeartbeat, PipeRegisterPluginReq, PipeRegisterPluginResp};

use std::io::{Error as IoError, ErrorKind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use prost::{Message as ProstMessage, Name};
use prost_types::Any;
use tokio::io::{AsyncWriteExt, BufReader, DuplexStream, ReadHalf, WriteHalf, duplex, split};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::timeout;

/// Upper bound for any single wait in these tests.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

pub type TestClient = ClhClient<MockTransport>;

pub struct MockTransport {
    hosts: UnboundedSender<DuplexStream>,
    fail_next: Arc<AtomicBool>,
}

impl Transport for MockTransport {
    type Stream = DuplexStream;

    async fn dial(&self) -> std::io::Result<Self::Stream> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(IoError::new(ErrorKind::NotFound, "no host listening"));
        }

        let (plugin, host) = duplex(64 * 1024);
        self.hosts
            .send(host)
            .map_err(|_| IoError::new(ErrorKind::ConnectionRefused, "host gone"))?;
        Ok(plugin)
    }
}

pub struct MockHost {
    incoming: UnboundedReceiver<DuplexStream>,
    fail_next: Arc<AtomicBool>,
}

impl MockHost {
    /// Make the next dial fail as if nothing were listening.
    pub fn refuse_next_dial(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    pub async fn accept(&mut self) -> HostConnection {
        let stream = timeout(TEST_TIMEOUT, self.incoming.recv())
            .await
            .expect("Timed out waiting for the client to dial")
            .expect("Transport dropped");
        let (reader, writer) = split(stream);
        HostConnection {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Accept a dial and answer its registration.
    pub async fn accept_and_register(
        &mut self,
        success: bool,
        message: &str,
    ) -> (HostConnection, PipeRegisterPluginReq) {
        let mut connection = self.accept().await;
        let request = connection.register(success, message).await;
        (connection, request)
    }
}

pub struct HostConnection {
    reader: BufReader<ReadHalf<DuplexStream>>,
    writer: WriteHalf<DuplexStream>,
}

impl HostConnection {
    /// Read one bare frame from the plugin.
    pub async fn try_read<M: ProstMessage + Default>(&mut self) -> Result<M, ClientError> {
        timeout(TEST_TIMEOUT, read_frame(&mut self.reader))
            .await
            .expect("Timed out waiting for a frame from the plugin")
    }

    pub async fn read<M: ProstMessage + Default>(&mut self) -> M {
        self.try_read().await.expect("Failed to read frame from plugin")
    }

    pub async fn register(&mut self, success: bool, message: &str) -> PipeRegisterPluginReq {
        let request: PipeRegisterPluginReq = self.read().await;
        let response = PipeRegisterPluginResp {
            success,
            message: message.to_string(),
        };
        write_frame(&mut self.writer, &response)
            .await
            .expect("Failed to send register response");
        request
    }

    pub async fn next_heartbeat(&mut self) -> PipeHeartbeat {
        self.read().await
    }

    /// Read frames until the plugin closes its side. Returns how many frames came first.
    pub async fn drain_until_closed(&mut self) -> usize {
        let mut frames = 0;
        loop {
            match self.try_read::<PipeHeartbeat>().await {
                Ok(_) => frames += 1,
                Err(ClientError::Disconnected { .. }) => return frames,
                Err(other) => panic!("Expected clean close, got {other}"),
            }
        }
    }

    /// Send `message` wrapped in an `Any` envelope.
    pub async fn send_event<M: Name>(&mut self, message: &M) {
        let envelope = pack(message).expect("Failed to pack event");
        self.send_envelope(&envelope).await;
    }

    pub async fn send_envelope(&mut self, envelope: &Any) {
        write_frame(&mut self.writer, envelope)
            .await
            .expect("Failed to send event");
    }

    pub async fn send_raw(&mut self, bytes: &[u8]) {
        self.writer
            .write_all(bytes)
            .await
            .expect("Failed to send raw bytes");
    }

    pub async fn close(mut self) {
        self.writer.shutdown().await.expect("Failed to close host side");
    }
}

pub fn test_config() -> PluginConfig {
    PluginConfig::new("p1", "Plugin", "1.0.0", "test").with_capability(Capability::WsjtxMessage)
}

/// Build a client on a fresh mock transport with a 1s heartbeat.
pub fn client_with_host() -> (Arc<TestClient>, MockHost) {
    let (hosts, incoming) = unbounded_channel();
    let fail_next = Arc::new(AtomicBool::new(false));
    let transport = MockTransport {
        hosts,
        fail_next: Arc::clone(&fail_next),
    };

    let client = ClhClientBuilder::new(test_config())
        .with_heartbeat_interval(Duration::from_secs(1))
        .with_transport(transport)
        .build()
        .expect("Failed to build client");

    (Arc::new(client), MockHost { incoming, fail_next })
}

/// Build a client and complete a successful registration.
pub async fn connected_client() -> (Arc<TestClient>, MockHost, HostConnection) {
    let (client, mut host) = client_with_host();
    let (connected, (connection, _)) =
        tokio::join!(client.connect(), host.accept_and_register(true, "ok"));
    connected.expect("Connect should succeed");
    (client, host, connection)
}
