use super::{PIPE_NAME, Transport};

use std::io;

use log::debug;
use tokio::net::UnixStream;

pub const PIPE_PATH: &str = const_format::concatcp!("/tmp/", PIPE_NAME);

/// Unix domain socket at [`PIPE_PATH`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeTransport;

impl Transport for PipeTransport {
    type Stream = UnixStream;

    async fn dial(&self) -> io::Result<Self::Stream> {
        debug!("Dialing host socket {}", PIPE_PATH);
        UnixStream::connect(PIPE_PATH).await
    }
}
