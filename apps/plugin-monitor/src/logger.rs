//! Logging for the plugin monitor.
//!
//! Console lines go to stderr so stdout stays a clean JSON event stream. The same
//! lines, without colors and with the source position, go to a log file.

use crate::error::MonitorError;

use models::ErrorLocation;

use std::env;
use std::fmt::{Arguments, Display};
use std::io::stderr;
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use fern::{Dispatch, FormatCallback};
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

/// Set once the first `initialize` call has started.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "plugin-monitor.log";

/// Environment variable holding the level name (`error` through `trace`, or `off`).
pub const LOG_LEVEL_ENV: &str = "PLUGIN_MONITOR_LOG";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Resolve the level from a raw setting, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.map(str::trim)
        .and_then(|name| LevelFilter::from_str(name).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Level requested through [`LOG_LEVEL_ENV`].
pub fn level_from_env() -> LevelFilter {
    parse_level(env::var(LOG_LEVEL_ENV).ok().as_deref())
}

/// Install the console and file loggers.
///
/// Safe to call more than once: later calls log a warning and return `Ok`
/// without changing the level.
///
/// # Errors
///
/// Returns [`MonitorError::Monitor`] if the log file cannot be created or
/// another global logger is already installed.
pub fn initialize(log_dir: &Path, level: LevelFilter) -> Result<(), MonitorError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("Logger already initialized, keeping its level");
        return Ok(());
    }

    let mut result = Ok(());
    INIT_LOGGER_ONCE.call_once(|| {
        result = install(log_dir, level);
        if result.is_ok() {
            info!("Logging at {level} to {}", log_dir.join(LOG_FILE_NAME).display());
        }
    });

    result
}

fn write_line(out: FormatCallback<'_>, level: impl Display, message: &Arguments, origin: Arguments) {
    out.finish(format_args!(
        "[{} - {}] {} [{}]",
        format_rfc3339(SystemTime::now()),
        level,
        message,
        origin
    ))
}

#[track_caller]
fn install(log_dir: &Path, level: LevelFilter) -> Result<(), MonitorError> {
    let colors = ColoredLevelConfig::new()
        .error(Red)
        .warn(Yellow)
        .info(Green)
        .debug(Blue)
        .trace(Magenta);

    let console = Dispatch::new()
        .format(move |out, message, record| {
            let level = colors.color(record.level());
            write_line(out, level, message, format_args!("{}", record.target()))
        })
        .chain(stderr());

    let log_file =
        fern::log_file(log_dir.join(LOG_FILE_NAME)).map_err(|e| MonitorError::Monitor {
            message: format!("Failed to create log file: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    let file = Dispatch::new()
        .format(|out, message, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            write_line(out, record.level(), message, format_args!("{file}:{line}"))
        })
        .chain(log_file);

    Dispatch::new()
        .level(level)
        .chain(console)
        .chain(file)
        .apply()
        .map_err(|e| MonitorError::Monitor {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
