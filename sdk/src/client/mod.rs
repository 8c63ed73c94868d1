//! Plugin-side client: registration, heartbeat and shutdown.
//!
//! A [`ClhClient`] dials the host, registers the plugin, then keeps the channel
//! alive with a background heartbeat until [`ClhClient::close`] is called. Events
//! are pulled one at a time with [`ClhClient::wait_message`].
//!
//! All methods take `&self`; share the client through an `Arc` to call `close`
//! from another task while `wait_message` is pending.
//!
//! # Locking
//!
//! `session` guards lifecycle state and the write side, `reader` guards the read
//! side. Code that needs both takes `session` first.

mod builder;
mod heartbeat;
mod receive;
mod state;

pub use builder::{
    ClhClientBuilder, ClientOption, DEFAULT_HEARTBEAT_INTERVAL, MAX_HEARTBEAT_INTERVAL,
    MIN_HEARTBEAT_INTERVAL,
};
pub use state::ClientState;

use crate::codec::{FrameReader, FrameWriter};
use crate::error::ClientError;
use crate::transport::{PipeTransport, Transport};
use builder::ClientSettings;
use state::{ActiveConnection, ConnectionReader, Session};

use models::proto::PipeRegisterPluginResp;
use models::{ErrorLocation, PluginConfig};

use std::panic::Location;
use std::time::Duration;

use log::{error, info, warn};
use tokio::io::{ReadHalf, WriteHalf};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

pub struct ClhClient<T: Transport = PipeTransport> {
    config: PluginConfig,
    heartbeat_interval: Duration,
    transport: T,
    shutdown: CancellationToken,
    session: Mutex<Session<WriteHalf<T::Stream>>>,
    reader: Mutex<Option<ConnectionReader<T::Stream>>>,
}

impl ClhClient<PipeTransport> {
    /// Build a client for the platform pipe.
    ///
    /// Shorthand for [`ClhClientBuilder`] with `options` applied in order.
    #[track_caller]
    pub fn new(
        config: PluginConfig,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self, ClientError> {
        ClhClientBuilder::new(config).with_options(options).build()
    }
}

impl<T: Transport> ClhClient<T> {
    fn from_parts(config: PluginConfig, settings: ClientSettings, transport: T) -> Self {
        Self {
            config,
            heartbeat_interval: settings.heartbeat_interval,
            transport,
            shutdown: CancellationToken::new(),
            session: Mutex::new(Session::new()),
            reader: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn heartbeat_interval(&self) -> Duration {
        self.heartbeat_interval
    }

    pub async fn state(&self) -> ClientState {
        self.session.lock().await.state
    }

    /// Dial the host, register, and start the heartbeat.
    ///
    /// Calling this while connected first tears the current connection down. A
    /// `wait_message` pending on that connection fails with
    /// [`ClientError::Disconnected`].
    ///
    /// # Errors
    ///
    /// - [`ClientError::Closed`] if the client has been closed
    /// - [`ClientError::Connection`] if the transport cannot be dialed
    /// - [`ClientError::Handshake`] if registration fails or is rejected
    /// - [`ClientError::Shutdown`] if `close` is called while dialing or registering
    pub async fn connect(&self) -> Result<(), ClientError> {
        let mut session = self.session.lock().await;

        if session.state == ClientState::Closed {
            return Err(ClientError::Closed {
                message: String::from(
                    "connect called on a closed client; build a new client instead",
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(previous) = session.active.take() {
            warn!(
                "Plugin {} is already connected; tearing down the previous connection",
                self.config.uuid
            );
            session.state = ClientState::Created;
            previous.token.cancel();
            self.reader.lock().await.take();
            if let Err(error) = previous.teardown().await {
                warn!("Closing the previous connection failed: {}", error);
            }
        }

        info!("Connecting plugin {} to host", self.config.uuid);
        let stream = tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => return Err(self.shutdown_error()),
            dialed = self.transport.dial() => dialed.map_err(|error| ClientError::Connection {
                message: format!("dial pipe failed: {error}"),
                location: ErrorLocation::from(Location::caller()),
            })?,
        };

        let (read_half, write_half) = tokio::io::split(stream);
        let mut frames = FrameReader::new(read_half);
        let writer = FrameWriter::new(write_half);

        tokio::select! {
            biased;
            _ = self.shutdown.cancelled() => {
                info!("Plugin {} closed before the host answered registration", self.config.uuid);
                return Err(self.shutdown_error());
            }
            registered = self.register(&mut frames, &writer) => registered?,
        }

        let token = self.shutdown.child_token();
        let heartbeat = heartbeat::spawn(
            writer.clone(),
            self.config.uuid.clone(),
            self.heartbeat_interval,
            token.clone(),
        );

        *self.reader.lock().await = Some(ConnectionReader {
            frames,
            token: token.clone(),
        });
        session.active = Some(ActiveConnection {
            writer,
            heartbeat,
            token,
        });
        session.state = ClientState::Connected;

        info!("Plugin {} registered with host", self.config.uuid);
        Ok(())
    }

    async fn register(
        &self,
        frames: &mut FrameReader<ReadHalf<T::Stream>>,
        writer: &FrameWriter<WriteHalf<T::Stream>>,
    ) -> Result<(), ClientError> {
        let request = self.config.to_register_request();
        writer
            .write(&request)
            .await
            .map_err(|error| ClientError::Handshake {
                message: format!("send register request failed: {error}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let response: PipeRegisterPluginResp =
            frames
                .read()
                .await
                .map_err(|error| ClientError::Handshake {
                    message: format!("read register response failed: {error}"),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        if !response.success {
            error!(
                "Host rejected plugin {}: {}",
                self.config.uuid, response.message
            );
            return Err(ClientError::Handshake {
                message: format!("register plugin failed: {}", response.message),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    #[track_caller]
    fn shutdown_error(&self) -> ClientError {
        ClientError::Shutdown {
            message: String::from("client closed"),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stop the heartbeat, wait for it to exit, and close the channel.
    ///
    /// Idempotent: only the first call does any work, later calls return `Ok`.
    /// A pending `wait_message` or `connect` fails with [`ClientError::Shutdown`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the first call cannot shut the stream down.
    /// The client is `Closed` either way.
    pub async fn close(&self) -> Result<(), ClientError> {
        self.shutdown.cancel();

        let mut session = self.session.lock().await;
        if session.state == ClientState::Closed {
            return Ok(());
        }
        session.state = ClientState::Closed;

        let active = session.active.take();
        self.reader.lock().await.take();

        match active {
            Some(active) => {
                info!("Closing connection for plugin {}", self.config.uuid);
                active.teardown().await
            }
            None => Ok(()),
        }
    }
}

impl<T: Transport> Drop for ClhClient<T> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
