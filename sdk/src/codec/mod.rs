//! Frame codec for the host channel.
//!
//! Every frame is one protobuf message prefixed with its length as a protobuf
//! varint (the protodelim layout). Registration and heartbeat frames travel bare;
//! host events travel inside a `google.protobuf.Any` envelope, see [`envelope`].

pub mod envelope;

use crate::error::ClientError;

use models::ErrorLocation;

use std::io::ErrorKind;
use std::panic::Location;
use std::sync::Arc;

use log::debug;
use prost::Message as ProstMessage;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader, copy, sink};
use tokio::sync::Mutex;

/// Longest accepted varint length prefix.
pub const MAX_LENGTH_PREFIX: usize = 10;

/// Largest accepted frame body (4 MiB).
pub const MAX_FRAME_LEN: usize = 4 * 1024 * 1024;

/// Encode `message` as one frame: varint length followed by the body.
pub fn encode_frame<M: ProstMessage>(message: &M) -> Vec<u8> {
    message.encode_length_delimited_to_vec()
}

/// Write one frame and flush it.
///
/// # Errors
///
/// Returns [`ClientError::Io`] if the stream rejects the write.
pub async fn write_frame<W, M>(writer: &mut W, message: &M) -> Result<(), ClientError>
where
    W: AsyncWrite + Unpin,
    M: ProstMessage,
{
    let frame = encode_frame(message);
    writer.write_all(&frame).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one frame and decode its body as `M`.
///
/// The body is always consumed in full before decoding, so a body that fails to
/// decode, or one over [`MAX_FRAME_LEN`], leaves the stream positioned at the
/// next frame.
///
/// # Errors
///
/// - [`ClientError::Disconnected`] if the stream ends cleanly before a new frame
/// - [`ClientError::ProtobufDecode`] for an oversized or malformed frame
/// - [`ClientError::Io`] if the stream fails or ends mid-frame
pub async fn read_frame<R, M>(reader: &mut R) -> Result<M, ClientError>
where
    R: AsyncRead + Unpin,
    M: ProstMessage + Default,
{
    let declared = read_length_prefix(reader).await?;
    let Some(len) = usize::try_from(declared)
        .ok()
        .filter(|len| *len <= MAX_FRAME_LEN)
    else {
        skip_body(reader, declared).await?;
        return Err(ClientError::ProtobufDecode {
            message: format!("frame length {declared} exceeds {MAX_FRAME_LEN} bytes"),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).await?;
    debug!("Read frame of {} bytes", len);

    Ok(M::decode(&body[..])?)
}

/// Discard `len` body bytes without buffering them.
async fn skip_body<R>(reader: &mut R, len: u64) -> Result<(), ClientError>
where
    R: AsyncRead + Unpin,
{
    let skipped = copy(&mut (&mut *reader).take(len), &mut sink()).await?;
    if skipped < len {
        return Err(ClientError::Io {
            message: format!("stream ended {skipped} bytes into a {len} byte frame"),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    debug!("Skipped oversized frame of {} bytes", len);
    Ok(())
}

async fn read_length_prefix<R>(reader: &mut R) -> Result<u64, ClientError>
where
    R: AsyncRead + Unpin,
{
    let mut value: u64 = 0;

    for index in 0..MAX_LENGTH_PREFIX {
        let byte = match reader.read_u8().await {
            Ok(byte) => byte,
            Err(error) if error.kind() == ErrorKind::UnexpectedEof && index == 0 => {
                return Err(ClientError::Disconnected {
                    message: String::from("host closed the channel"),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(error) => return Err(error.into()),
        };

        value |= u64::from(byte & 0x7f) << (7 * index);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }

    Err(ClientError::ProtobufDecode {
        message: format!("length prefix longer than {MAX_LENGTH_PREFIX} bytes"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Buffered read half of a channel. Owned by the single receiving caller.
pub struct FrameReader<R> {
    inner: BufReader<R>,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
        }
    }

    pub async fn read<M: ProstMessage + Default>(&mut self) -> Result<M, ClientError> {
        read_frame(&mut self.inner).await
    }
}

/// Write half of a channel behind a single lock.
///
/// Clones share the same stream. Each frame is written and flushed while the lock
/// is held, so frames from different tasks never interleave.
pub struct FrameWriter<W> {
    inner: Arc<Mutex<Option<W>>>,
}

impl<W> Clone for FrameWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(writer))),
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Disconnected`] once [`FrameWriter::shutdown`] has run.
    pub async fn write<M: ProstMessage>(&self, message: &M) -> Result<(), ClientError> {
        let mut guard = self.inner.lock().await;
        let writer = guard.as_mut().ok_or_else(|| ClientError::Disconnected {
            message: String::from("write half already shut down"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        write_frame(writer, message).await
    }

    /// Shut the write half down. Later calls are no-ops.
    pub async fn shutdown(&self) -> Result<(), ClientError> {
        let mut guard = self.inner.lock().await;
        match guard.take() {
            Some(mut writer) => Ok(writer.shutdown().await?),
            None => Ok(()),
        }
    }
}
