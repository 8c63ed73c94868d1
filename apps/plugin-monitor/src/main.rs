use plugin_monitor::error::MonitorError;
use plugin_monitor::logger::{initialize as LoggerInitialize, level_from_env};
use plugin_monitor::monitor;
use plugin_monitor::settings::MonitorSettings;

use clh_plugin_sdk::ClhClientBuilder;

use models::ErrorLocation;

use std::env::current_dir;
use std::io::stdout;
use std::panic::Location;
use std::sync::Arc;

use log::{info, warn};

#[tokio::main]
async fn main() -> Result<(), MonitorError> {
    let work_dir = current_dir().map_err(|e| MonitorError::Monitor {
        message: format!("Failed to resolve working directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&work_dir, level_from_env())?;

    info!("Plugin monitor starting");

    let settings = MonitorSettings::load(&work_dir)?;
    info!(
        "Plugin {} ({}) v{}",
        settings.plugin.name, settings.plugin.uuid, settings.plugin.version
    );

    let client = Arc::new(
        ClhClientBuilder::new(settings.plugin.clone())
            .with_heartbeat_interval(settings.heartbeat_interval())
            .build()?,
    );
    client.connect().await?;

    // Ctrl-C closes the client, which unblocks the receive loop
    let signal_client = Arc::clone(&client);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            return;
        }
        info!("Interrupt received, closing");
        if let Err(e) = signal_client.close().await {
            warn!("Close after interrupt failed: {e}");
        }
    });

    let printed = monitor::run(&client, stdout()).await?;
    client.close().await?;

    info!("Plugin monitor stopped after {printed} events");
    Ok(())
}
