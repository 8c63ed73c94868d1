use crate::codec::FrameWriter;

use models::proto::PipeHeartbeat;

use std::time::{Duration, SystemTime};

use log::{debug, warn};
use prost_types::Timestamp;
use tokio::io::AsyncWrite;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

/// Spawn the keep-alive loop for one connection.
///
/// The first heartbeat goes out one `interval` after registration. Write failures
/// are logged and otherwise ignored; losing the channel is reported by the
/// receive path. The loop exits as soon as `token` is cancelled, abandoning a
/// write that is still pending.
pub(crate) fn spawn<W>(
    writer: FrameWriter<W>,
    uuid: String,
    interval: Duration,
    token: CancellationToken,
) -> JoinHandle<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let beat = PipeHeartbeat {
                uuid: uuid.clone(),
                timestamp: Some(Timestamp::from(SystemTime::now())),
            };

            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                result = writer.write(&beat) => match result {
                    Ok(()) => debug!("Heartbeat sent for plugin {}", uuid),
                    Err(error) => warn!("Heartbeat for plugin {} failed: {}", uuid, error),
                },
            }
        }

        debug!("Heartbeat loop for plugin {} stopped", uuid);
    })
}
