//! Device records: the raw platform descriptor and the enumerated result.

use serde::{Deserialize, Serialize};

use crate::kind::DeviceKind;

/// A raw platform device record, as reported by an
/// [`OutputBackend`](crate::OutputBackend).
///
/// Descriptors are the pre-filter view of the platform's device list: they
/// still include non-sink entries and telephony endpoints. The enumeration
/// pipeline turns them into [`OutputDevice`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescriptor {
    /// Platform device id.
    pub id: u32,
    /// Product name as reported by the platform.
    pub product_name: String,
    /// Raw device-type code. Resolved via [`DeviceKind::from_code`].
    pub kind_code: u32,
    /// Whether the device can receive and play audio.
    pub is_sink: bool,
}

impl OutputDescriptor {
    /// Creates a descriptor for a playback sink of the given kind.
    pub fn sink(id: u32, product_name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            id,
            product_name: product_name.into(),
            kind_code: kind.code(),
            is_sink: true,
        }
    }

    /// Returns the resolved device kind.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        DeviceKind::from_code(self.kind_code)
    }
}

/// An enumerated audio output device.
///
/// The `name` field is the display label, formatted as
/// `"<product name> (<type label>)"`, e.g. `"AirPods Pro (bluetooth)"`.
/// Serializes to the `{"id": .., "name": ".."}` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDevice {
    /// Platform device id.
    pub id: u32,
    /// Human-readable device label.
    pub name: String,
}

impl OutputDevice {
    /// Builds the result record for a descriptor.
    pub(crate) fn from_descriptor(descriptor: &OutputDescriptor) -> Self {
        Self {
            id: descriptor.id,
            name: format!("{} ({})", descriptor.product_name, descriptor.kind().label()),
        }
    }
}

impl std::fmt::Display for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_formatting() {
        let descriptor = OutputDescriptor::sink(3, "AirPods Pro", DeviceKind::Bluetooth);
        let device = OutputDevice::from_descriptor(&descriptor);
        assert_eq!(device.id, 3);
        assert_eq!(device.name, "AirPods Pro (bluetooth)");
    }

    #[test]
    fn test_unknown_kind_label() {
        let descriptor = OutputDescriptor {
            id: 7,
            product_name: "Mystery Box".to_string(),
            kind_code: 4242,
            is_sink: true,
        };
        let device = OutputDevice::from_descriptor(&descriptor);
        assert_eq!(device.name, "Mystery Box (unknown)");
    }

    #[test]
    fn test_descriptor_kind_resolution() {
        let descriptor = OutputDescriptor::sink(0, "Speakers", DeviceKind::Speaker);
        assert_eq!(descriptor.kind(), DeviceKind::Speaker);
        assert_eq!(descriptor.kind_code, 2);
    }

    #[test]
    fn test_serde_wire_shape() {
        let device = OutputDevice {
            id: 5,
            name: "Living Room TV (hdmi)".to_string(),
        };
        let json = serde_json::to_string(&device).unwrap();
        assert_eq!(json, r#"{"id":5,"name":"Living Room TV (hdmi)"}"#);

        let back: OutputDevice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }
}
