use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    /// A plugin identity field failed validation.
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// A structurally valid wire message could not be mapped onto the domain model.
    #[error("Conversion Error: {message} {location}")]
    Conversion {
        message: String,
        location: ErrorLocation,
    },
}
