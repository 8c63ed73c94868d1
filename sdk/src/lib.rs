//! Plugin SDK for the CLH host.
//!
//! A plugin builds a [`ClhClient`], connects it, and then pulls host events with
//! [`ClhClient::wait_message`] until the channel closes.
//!
//! ```no_run
//! use clh_plugin_sdk::{Capability, ClhClient, PluginConfig};
//!
//! # async fn run() -> Result<(), clh_plugin_sdk::ClientError> {
//! let config = PluginConfig::new("p1", "Plugin", "1.0.0", "test")
//!     .with_capability(Capability::WsjtxMessage);
//! let client = ClhClient::new(config, [])?;
//! client.connect().await?;
//!
//! loop {
//!     match client.wait_message().await {
//!         Ok(message) => println!("{message:?}"),
//!         Err(error) if error.is_decode() => continue,
//!         Err(_) => break,
//!     }
//! }
//!
//! client.close().await
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::{
    ClhClient, ClhClientBuilder, ClientOption, ClientState, DEFAULT_HEARTBEAT_INTERVAL,
    MAX_HEARTBEAT_INTERVAL, MIN_HEARTBEAT_INTERVAL,
};
pub use error::ClientError;
pub use models::{Capability, Message, PluginConfig};
pub use transport::{PIPE_NAME, PIPE_PATH, PipeTransport, Transport};
