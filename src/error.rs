//! Ghost Protocol Error Types
//!
//! Two layers: `GhostError` ends a session, `ServiceError` never does.
//! Adapters convert every fault into a `ServiceError` value which is then
//! rendered as a single spoken sentence.

use thiserror::Error;

/// Fatal errors that may escape the session loop
#[derive(Error, Debug)]
pub enum GhostError {
    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Input stream closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for Ghost Protocol operations
pub type GhostResult<T> = Result<T, GhostError>;

/// Failure reported by an external service adapter.
///
/// `Display` is the human-readable diagnostic spoken to the user, so no
/// variant ever formats a raw error object.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Required API key absent from configuration
    #[error("{service} API key not found in configuration.")]
    ConfigMissing { service: &'static str },

    /// Provider answered with a non-2xx status
    #[error("Error {status}: Unable to {action}.")]
    ServiceUnavailable { status: u16, action: &'static str },

    /// Request never produced a response (connect failure, timeout)
    #[error("Unable to {action} because the service could not be reached.")]
    Network { action: &'static str },

    /// Body did not have the expected shape
    #[error("Error {status}: Unable to {action}, the response was not understood.")]
    Malformed { status: u16, action: &'static str },

    /// Lookup found nothing for the topic
    #[error("No content found for {0}.")]
    NoMatch(String),

    /// Generic provider failure with a fixed user-facing sentence
    #[error("{0}")]
    Unavailable(&'static str),

    /// Capture returned nothing interpretable
    #[error("Command not recognized!")]
    RecognitionFailure,
}

/// Discriminated outcome returned by every adapter
pub type ServiceResult<T> = Result<T, ServiceError>;
