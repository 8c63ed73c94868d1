use super::ClhClient;
use crate::error::ClientError;
use crate::transport::{PipeTransport, Transport};

use models::{ErrorLocation, PluginConfig};

use std::panic::Location;
use std::time::Duration;

pub const DEFAULT_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
pub const MIN_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(1);
pub const MAX_HEARTBEAT_INTERVAL: Duration = Duration::from_secs(10);

/// A construction-time client setting. Options are applied in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOption {
    /// Period between heartbeats, within `[MIN_HEARTBEAT_INTERVAL, MAX_HEARTBEAT_INTERVAL]`.
    HeartbeatInterval(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClientSettings {
    pub(crate) heartbeat_interval: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            heartbeat_interval: DEFAULT_HEARTBEAT_INTERVAL,
        }
    }
}

impl ClientOption {
    #[track_caller]
    fn apply(self, settings: &mut ClientSettings) -> Result<(), ClientError> {
        match self {
            ClientOption::HeartbeatInterval(interval) => {
                if !(MIN_HEARTBEAT_INTERVAL..=MAX_HEARTBEAT_INTERVAL).contains(&interval) {
                    return Err(ClientError::Config {
                        message: format!(
                            "heartbeat interval {:?} must be between {:?} and {:?}",
                            interval, MIN_HEARTBEAT_INTERVAL, MAX_HEARTBEAT_INTERVAL
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                settings.heartbeat_interval = interval;
            }
        }
        Ok(())
    }
}

/// Builds a [`ClhClient`], validating identity and options up front.
///
/// # Example
///
/// ```no_run
/// use clh_plugin_sdk::{Capability, ClhClientBuilder, PluginConfig};
/// use std::time::Duration;
///
/// let config = PluginConfig::new("p1", "Plugin", "1.0.0", "test")
///     .with_capability(Capability::WsjtxMessage);
/// let client = ClhClientBuilder::new(config)
///     .with_heartbeat_interval(Duration::from_secs(2))
///     .build()?;
/// # Ok::<(), clh_plugin_sdk::ClientError>(())
/// ```
pub struct ClhClientBuilder<T: Transport = PipeTransport> {
    config: PluginConfig,
    options: Vec<ClientOption>,
    transport: T,
}

impl ClhClientBuilder<PipeTransport> {
    pub fn new(config: PluginConfig) -> Self {
        Self {
            config,
            options: Vec::new(),
            transport: PipeTransport,
        }
    }
}

impl<T: Transport> ClhClientBuilder<T> {
    pub fn with_option(mut self, option: ClientOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = ClientOption>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn with_heartbeat_interval(self, interval: Duration) -> Self {
        self.with_option(ClientOption::HeartbeatInterval(interval))
    }

    /// Dial through `transport` instead of the platform pipe.
    pub fn with_transport<U: Transport>(self, transport: U) -> ClhClientBuilder<U> {
        ClhClientBuilder {
            config: self.config,
            options: self.options,
            transport,
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an empty identity field or for the
    /// first option that fails validation.
    #[track_caller]
    pub fn build(self) -> Result<ClhClient<T>, ClientError> {
        self.config.validate()?;

        let mut settings = ClientSettings::default();
        for option in self.options {
            option.apply(&mut settings)?;
        }

        Ok(ClhClient::from_parts(self.config, settings, self.transport))
    }
}
