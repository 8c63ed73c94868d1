use crate::{ModelError, PluginConfig};

/// **VALUE**: Verifies that validation errors point at the caller, not at `validate()`.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries an `ErrorLocation`. If
/// `#[track_caller]` stops propagating, every report points inside the models crate
/// and loses its debugging value.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `#[track_caller]` is dropped from `validate()`
/// - The location is captured inside a helper instead of at the call site
#[test]
fn given_invalid_config_when_validated_then_location_is_call_site() {
    // GIVEN: A config with no name
    let config = PluginConfig::new("p1", "", "1.0.0", "test");

    // WHEN
    let line = line!() + 1;
    let result = config.validate();

    // THEN
    match result {
        Err(ModelError::Validation { location, .. }) => {
            assert!(location.file.ends_with("model_error.rs"), "{}", location.file);
            assert_eq!(location.line, line);
            assert!(location.column > 0);
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_model_error_when_formatted_then_shows_kind_message_and_bracketed_location() {
    let error = PluginConfig::new("", "Plugin", "1.0.0", "test")
        .validate()
        .expect_err("empty uuid should fail");

    let formatted = error.to_string();

    assert!(formatted.starts_with("Validation Error: Plugin uuid cannot be empty ["));
    assert!(formatted.ends_with(']'));
    assert_eq!(formatted.matches(':').count(), 3, "{formatted}");
}
