//! Per-client lifecycle state.

use crate::codec::{FrameReader, FrameWriter};
use crate::error::ClientError;

use log::warn;
use tokio::io::{AsyncWrite, ReadHalf};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Lifecycle of a [`ClhClient`](super::ClhClient).
///
/// `Created → Connected → Closed`. A failed Connect leaves the client in
/// `Created`; `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    Created,
    Connected,
    Closed,
}

/// Everything owned by one live connection except its read half.
pub(crate) struct ActiveConnection<W> {
    pub(crate) writer: FrameWriter<W>,
    pub(crate) heartbeat: JoinHandle<()>,
    pub(crate) token: CancellationToken,
}

impl<W: AsyncWrite + Unpin> ActiveConnection<W> {
    /// Stop the heartbeat, wait until it has exited, then shut the write half down.
    pub(crate) async fn teardown(self) -> Result<(), ClientError> {
        self.token.cancel();
        if let Err(error) = self.heartbeat.await {
            warn!("Heartbeat task ended abnormally: {}", error);
        }
        self.writer.shutdown().await
    }
}

pub(crate) struct Session<W> {
    pub(crate) state: ClientState,
    pub(crate) active: Option<ActiveConnection<W>>,
}

impl<W> Session<W> {
    pub(crate) fn new() -> Self {
        Self {
            state: ClientState::Created,
            active: None,
        }
    }
}

/// Read half of the live connection, paired with that connection's token so an
/// in-flight read can be interrupted by Close or by a re-Connect.
pub(crate) struct ConnectionReader<S> {
    pub(crate) frames: FrameReader<ReadHalf<S>>,
    pub(crate) token: CancellationToken,
}
