//! The enumeration pipeline: filter descriptors, format labels.

use crate::backend::{HostBackend, OutputBackend};
use crate::device::{OutputDescriptor, OutputDevice};
use crate::error::AudioOutputsError;
use crate::kind::DeviceKind;

/// Turns raw platform descriptors into enumerated output devices.
///
/// Keeps only entries that are playback sinks and are not telephony
/// endpoints, formats each label as `"<product name> (<type label>)"`, and
/// preserves the input order.
pub fn devices_from_descriptors(
    descriptors: impl IntoIterator<Item = OutputDescriptor>,
) -> Vec<OutputDevice> {
    descriptors
        .into_iter()
        .filter(|d| d.is_sink)
        .filter(|d| d.kind() != DeviceKind::Telephony)
        .map(|d| OutputDevice::from_descriptor(&d))
        .collect()
}

/// Enumerates the available audio output devices on the default host.
///
/// Equivalent to running [`devices_from_descriptors`] over a
/// [`HostBackend`]. Returns an empty list if the host reports no output
/// devices.
///
/// # Errors
///
/// Returns [`AudioOutputsError::BackendError`] if the platform device list
/// cannot be obtained.
pub fn enumerate_output_devices() -> Result<Vec<OutputDevice>, AudioOutputsError> {
    let descriptors = HostBackend::default_host().output_descriptors()?;
    Ok(devices_from_descriptors(descriptors))
}
