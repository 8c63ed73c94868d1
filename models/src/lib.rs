//! Data model for the CLH plugin protocol.
//!
//! This crate holds the pure data structures shared by the SDK and by plugins:
//! no sockets, no tasks, no logging. It has four parts:
//!
//! - [`proto`]: prost mirror of the host's wire schema
//! - [`message`]: the domain-level event model handed to plugin code
//! - [`convert`]: the pure wire → domain mapping
//! - [`plugin`]: plugin identity and declared capabilities
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures and conversions
//! - **clh-plugin-sdk**: Transport, framing and client lifecycle operating on these models
//! - **plugin-monitor**: Demo plugin wiring everything together

pub mod convert;
pub mod error;
pub mod message;
pub mod plugin;
pub mod proto;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::model_error::ModelError;
pub use message::Message;
pub use plugin::{Capability, PluginConfig};
