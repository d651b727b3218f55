//! CPAL-backed descriptor source.

use cpal::traits::{DeviceTrait, HostTrait};
use cpal::Host;

use crate::device::OutputDescriptor;
use crate::error::AudioOutputsError;
use crate::kind::DeviceKind;

use super::OutputBackend;

/// Descriptor source backed by the system audio host.
///
/// Devices are reported in the host's enumeration order with ordinal ids.
/// CPAL exposes no device-type metadata, so the kind is inferred from the
/// device name via [`DeviceKind::infer_from_name`].
pub struct HostBackend {
    host: Host,
}

impl HostBackend {
    /// Creates a backend over the platform's default audio host.
    #[must_use]
    pub fn default_host() -> Self {
        Self {
            host: cpal::default_host(),
        }
    }
}

impl OutputBackend for HostBackend {
    fn output_descriptors(&self) -> Result<Vec<OutputDescriptor>, AudioOutputsError> {
        let devices = self
            .host
            .output_devices()
            .map_err(|e| AudioOutputsError::BackendError(e.to_string()))?;

        let mut descriptors = Vec::new();
        for (index, device) in devices.enumerate() {
            let product_name = device.name().unwrap_or_else(|_| "unknown".to_string());

            // The host already scopes the list to output devices; the sink
            // flag additionally requires a usable playback configuration.
            let is_sink = device.default_output_config().is_ok();

            let kind = DeviceKind::infer_from_name(&product_name);
            tracing::debug!(index, %product_name, %kind, is_sink, "found output device");

            descriptors.push(OutputDescriptor {
                id: index as u32,
                product_name,
                kind_code: kind.code(),
                is_sink,
            });
        }

        Ok(descriptors)
    }
}

impl std::fmt::Debug for HostBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostBackend")
            .field("host", &self.host.id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_enumeration_doesnt_panic() {
        // May return an empty list or a backend error in CI, but must not panic
        let _ = HostBackend::default_host().output_descriptors();
    }
}
