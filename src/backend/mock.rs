//! Mock descriptor source for testing without hardware.

use crate::device::OutputDescriptor;
use crate::error::AudioOutputsError;
use crate::kind::DeviceKind;

use super::OutputBackend;

/// A descriptor source that reports a fixed, in-memory device list.
///
/// This allows exercising the full enumeration and dispatch path without
/// actual audio hardware, making it suitable for CI environments.
///
/// # Example
///
/// ```
/// use audio_outputs::{devices_from_descriptors, DeviceKind, MockBackend, OutputBackend};
///
/// let mut mock = MockBackend::new();
/// mock.push_sink("Built-in Speakers", DeviceKind::Speaker);
/// mock.push_sink("AirPods Pro", DeviceKind::Bluetooth);
///
/// let devices = devices_from_descriptors(mock.output_descriptors().unwrap());
/// assert_eq!(devices[1].name, "AirPods Pro (bluetooth)");
/// ```
#[derive(Debug, Default)]
pub struct MockBackend {
    descriptors: Vec<OutputDescriptor>,
    next_id: u32,
}

impl MockBackend {
    /// Creates an empty mock backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a playback sink of the given kind, returning its assigned id.
    pub fn push_sink(&mut self, product_name: &str, kind: DeviceKind) -> u32 {
        self.push(product_name, kind.code(), true)
    }

    /// Adds a device with a raw type code and sink flag, returning its id.
    ///
    /// Use this to feed codes outside the known table or non-sink entries.
    pub fn push(&mut self, product_name: &str, kind_code: u32, is_sink: bool) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.descriptors.push(OutputDescriptor {
            id,
            product_name: product_name.to_string(),
            kind_code,
            is_sink,
        });
        id
    }

    /// Returns the number of descriptors the mock will report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` if the mock reports no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl OutputBackend for MockBackend {
    fn output_descriptors(&self) -> Result<Vec<OutputDescriptor>, AudioOutputsError> {
        Ok(self.descriptors.clone())
    }
}

/// A descriptor source that always fails, for error-path tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingBackend;

#[cfg(test)]
impl OutputBackend for FailingBackend {
    fn output_descriptors(&self) -> Result<Vec<OutputDescriptor>, AudioOutputsError> {
        Err(AudioOutputsError::BackendError(
            "mock backend failure".to_string(),
        ))
    }
}
