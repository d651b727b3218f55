//! Error types for audio-outputs.

/// Errors that can prevent device enumeration from completing.
///
/// Enumeration over an empty or device-less host is not an error; it
/// yields an empty list.
#[derive(Debug, thiserror::Error)]
pub enum AudioOutputsError {
    /// An error from the underlying audio library (CPAL).
    #[error("audio backend error: {0}")]
    BackendError(String),

    /// The device list could not be encoded as JSON.
    #[error("failed to encode device list: {0}")]
    Serialization(#[from] serde_json::Error),
}
