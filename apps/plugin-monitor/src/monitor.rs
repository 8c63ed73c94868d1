//! Receive loop that prints host events as JSON lines.

use crate::error::MonitorError;

use clh_plugin_sdk::{ClhClient, ClientError, Message, Transport};

use models::ErrorLocation;

use std::io::Write;
use std::panic::Location;

use log::{debug, info, warn};

/// Print every event from `client` to `out`, one JSON object per line.
///
/// Returns the number of events printed once the host announces it is closing,
/// the channel ends, or the client is closed. Frames that fail to decode are
/// logged and skipped.
///
/// # Errors
///
/// - [`MonitorError::Client`] for a receive failure other than a clean stop
/// - [`MonitorError::Monitor`] if an event cannot be written to `out`
pub async fn run<T, W>(client: &ClhClient<T>, mut out: W) -> Result<usize, MonitorError>
where
    T: Transport,
    W: Write,
{
    let mut printed = 0;

    loop {
        let message = match client.wait_message().await {
            Ok(message) => message,
            Err(error) if error.is_decode() => {
                warn!("Skipping frame: {}", error);
                continue;
            }
            Err(error) if error.is_shutdown() => {
                info!("Client closed, stopping");
                break;
            }
            Err(error @ ClientError::Disconnected { .. }) => {
                info!("Host closed the channel: {}", error);
                break;
            }
            Err(error) => return Err(error.into()),
        };

        write_line(&mut out, &message)?;
        printed += 1;

        if let Message::PipeConnectionClosed(_) = message {
            info!("Host announced it is closing the connection");
            break;
        }
    }

    debug!("Printed {} events", printed);
    Ok(printed)
}

#[track_caller]
fn write_line<W: Write>(out: &mut W, message: &Message) -> Result<(), MonitorError> {
    let line = serde_json::to_string(message).map_err(|e| MonitorError::Monitor {
        message: format!("Failed to serialize event: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(|e| MonitorError::Monitor {
            message: format!("Failed to write event: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
