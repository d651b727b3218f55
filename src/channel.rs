//! Named-method dispatch over a backend.
//!
//! [`DeviceChannel`] is the request/response surface of the crate: an
//! embedder hands it a method name and gets back either a JSON payload or
//! a not-implemented reply. Only one method exists today.

use crate::backend::OutputBackend;
use crate::enumerate::devices_from_descriptors;
use crate::error::AudioOutputsError;

/// The request method that enumerates output devices.
pub const METHOD_ENUMERATE_OUTPUTS: &str = "enumerateOutputDevices";

/// Reply to a method call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodReply {
    /// The method succeeded; the payload is a JSON-encoded value.
    ///
    /// For [`METHOD_ENUMERATE_OUTPUTS`] this is an array of
    /// `{"id": .., "name": ".."}` objects in platform enumeration order.
    Payload(String),

    /// The method name is not recognized by this channel.
    NotImplemented,
}

/// Answers named method calls against an [`OutputBackend`].
///
/// # Example
///
/// ```
/// use audio_outputs::{DeviceChannel, DeviceKind, MethodReply, MockBackend};
///
/// let mut mock = MockBackend::new();
/// mock.push_sink("Speakers", DeviceKind::Speaker);
///
/// let channel = DeviceChannel::new(mock);
/// let reply = channel.handle("enumerateOutputDevices").unwrap();
/// assert_eq!(
///     reply,
///     MethodReply::Payload(r#"[{"id":0,"name":"Speakers (speaker)"}]"#.to_string())
/// );
/// ```
#[derive(Debug)]
pub struct DeviceChannel<B: OutputBackend> {
    backend: B,
}

impl<B: OutputBackend> DeviceChannel<B> {
    /// Creates a channel over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Handles a method call by name.
    ///
    /// Unknown method names yield [`MethodReply::NotImplemented`], never an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the device list cannot be
    /// encoded.
    pub fn handle(&self, method: &str) -> Result<MethodReply, AudioOutputsError> {
        match method {
            METHOD_ENUMERATE_OUTPUTS => {
                let devices = devices_from_descriptors(self.backend.output_descriptors()?);
                tracing::debug!(count = devices.len(), "enumerated output devices");
                Ok(MethodReply::Payload(serde_json::to_string(&devices)?))
            }
            other => {
                tracing::warn!(method = other, "unhandled method call");
                Ok(MethodReply::NotImplemented)
            }
        }
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
