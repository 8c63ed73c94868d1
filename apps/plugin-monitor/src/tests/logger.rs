// Unit tests for logger module initialization logic
// Only this test installs the global logger; a second installer would fail

use crate::logger::{DEFAULT_LOG_LEVEL, LOG_FILE_NAME, initialize, parse_level};

use log::{LevelFilter, info};
use tempfile::tempdir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Logger initialization might be reached from more than one
/// startup path. If the second call panics or errors, the monitor dies before it
/// connects.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok_and_writes_log_file() {
    // GIVEN: A scratch directory
    let temp_dir = tempdir().expect("Failed to create temp dir");

    // WHEN: Calling initialize twice and logging a line
    let result1 = initialize(temp_dir.path(), LevelFilter::Debug);
    let result2 = initialize(temp_dir.path(), LevelFilter::Trace);
    info!("logger test line");

    // THEN: Both succeed and the log file exists in the directory
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

#[test]
fn given_level_names_when_parsed_then_case_and_padding_are_ignored() {
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("off")), LevelFilter::Off);
}

#[test]
fn given_missing_or_unknown_level_when_parsed_then_falls_back_to_default() {
    assert_eq!(parse_level(None), DEFAULT_LOG_LEVEL);
    assert_eq!(parse_level(Some("loud")), DEFAULT_LOG_LEVEL);
    assert_eq!(DEFAULT_LOG_LEVEL, LevelFilter::Info);
}
