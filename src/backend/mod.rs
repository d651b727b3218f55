//! Descriptor sources: the platform boundary of the crate.
//!
//! An [`OutputBackend`] produces raw [`OutputDescriptor`]s for the
//! enumeration pipeline. [`HostBackend`] queries the default audio host;
//! [`MockBackend`] feeds descriptors from memory so filtering and label
//! behavior can be tested without audio hardware.

mod host;
pub(crate) mod mock;

pub use host::HostBackend;
pub use mock::MockBackend;

use crate::device::OutputDescriptor;
use crate::error::AudioOutputsError;

/// A source of raw output device descriptors.
///
/// Implementations report the platform's device list as-is, in platform
/// enumeration order, including non-sink and telephony entries; filtering
/// is the pipeline's job.
pub trait OutputBackend {
    /// Returns the platform's output device descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`AudioOutputsError::BackendError`] if the platform device
    /// list cannot be obtained.
    fn output_descriptors(&self) -> Result<Vec<OutputDescriptor>, AudioOutputsError>;
}
