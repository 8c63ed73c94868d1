//! Duplex byte channel to the host.
//!
//! The host listens on one fixed, well-known local address. Unix targets reach it
//! through a Unix domain socket and Windows targets through a named pipe; exactly
//! one [`PipeTransport`] is compiled in per target.
//!
//! Transports never retry. A failed dial is returned to the caller as-is.

use std::future::Future;
use std::io;

use tokio::io::{AsyncRead, AsyncWrite};

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{PIPE_PATH, PipeTransport};
#[cfg(windows)]
pub use windows::{PIPE_PATH, PipeTransport};

/// Name shared by the socket path and the pipe path.
pub const PIPE_NAME: &str = "clh.plugin";

/// Something that can open a fresh duplex stream to the host.
///
/// Every Connect dials once. Implementations hold no per-connection state.
pub trait Transport: Send + Sync + 'static {
    type Stream: AsyncRead + AsyncWrite + Send + Unpin + 'static;

    fn dial(&self) -> impl Future<Output = io::Result<Self::Stream>> + Send;
}
