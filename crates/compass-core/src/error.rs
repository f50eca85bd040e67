//! Error types for the extraction pipeline.
//!
//! Causes are kept distinct for logging, but every failure after the
//! configuration and input checks reaches the user through the same
//! generic message (see [`CompassError::user_message`]).

use thiserror::Error;

/// Warning shown when the action is triggered without any text.
pub const EMPTY_INPUT_MESSAGE: &str = "Please paste some text to get started.";

/// Errors that can occur while producing a project summary.
#[derive(Error, Debug)]
pub enum CompassError {
    /// Provider credential missing or unusable.
    #[error("{0}")]
    Configuration(String),

    /// The action was triggered with no text.
    #[error("no project text provided")]
    EmptyInput,

    /// Transport-level failure talking to the provider.
    #[error("request to model provider failed: {0}")]
    Request(String),

    /// Provider answered with a non-success status.
    #[error("model provider error {status}: {message}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Message reported by the provider.
        message: String,
    },

    /// Provider answered but produced no candidate text.
    #[error("model provider returned no content ({0})")]
    EmptyResponse(String),

    /// Provider output could not be read as JSON.
    #[error("failed to parse provider response: {0}")]
    ResponseParse(String),

    /// Provider output was JSON but not a valid project summary.
    #[error("response does not match the project summary schema: {0}")]
    SchemaMismatch(String),

    /// A milestone date could not be parsed as `YYYY-MM-DD`.
    #[error("invalid {field} '{value}': expected a YYYY-MM-DD date")]
    InvalidDate {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
}

impl CompassError {
    /// Returns the message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            CompassError::Configuration(msg) => msg.clone(),
            CompassError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            other => format!("An unexpected error occurred: {}", other),
        }
    }
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, CompassError>;
