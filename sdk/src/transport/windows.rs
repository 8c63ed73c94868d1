use super::{PIPE_NAME, Transport};

use std::io;

use log::debug;
use tokio::net::windows::named_pipe::{ClientOptions, NamedPipeClient};

pub const PIPE_PATH: &str = const_format::concatcp!(r"\\.\pipe\", PIPE_NAME);

/// Named pipe at [`PIPE_PATH`]. A busy pipe is reported, not waited on.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipeTransport;

impl Transport for PipeTransport {
    type Stream = NamedPipeClient;

    async fn dial(&self) -> io::Result<Self::Stream> {
        debug!("Opening host pipe {}", PIPE_PATH);
        ClientOptions::new().open(PIPE_PATH)
    }
}
