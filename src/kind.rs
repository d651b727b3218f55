//! Output device types and their label table.

/// Kind of audio output device, as reported by platform device records.
///
/// Platform device descriptors carry a numeric device-type code; this enum
/// is the fixed mapping from those codes to readable labels. Codes follow
/// the Android `AudioDeviceInfo.TYPE_*` values, the common currency for
/// output device types in cross-platform device payloads. Codes outside
/// the table resolve to [`DeviceKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeviceKind {
    /// Phone earpiece speaker.
    Earpiece,
    /// Built-in loudspeaker.
    Speaker,
    /// Wired headset (headphones with microphone).
    WiredHeadset,
    /// Wired headphones without a microphone.
    WiredHeadphones,
    /// Analog line-level connection.
    LineAnalog,
    /// Digital line connection (e.g. S/PDIF).
    LineDigital,
    /// Bluetooth A2DP playback device.
    Bluetooth,
    /// HDMI output.
    Hdmi,
    /// HDMI Audio Return Channel.
    HdmiArc,
    /// USB audio device.
    UsbDevice,
    /// USB accessory in host mode.
    UsbAccessory,
    /// Audio dock.
    Dock,
    /// FM transmitter.
    Fm,
    /// FM tuner.
    FmTuner,
    /// TV tuner.
    TvTuner,
    /// Telephony network endpoint. Excluded from enumeration results.
    Telephony,
    /// Auxiliary line-level connector.
    AuxLine,
    /// Audio-over-IP endpoint.
    Ip,
    /// Bus endpoint (e.g. automotive).
    Bus,
    /// Unrecognized device-type code.
    Unknown,
}

impl DeviceKind {
    /// Resolves a raw platform device-type code.
    ///
    /// Unrecognized codes resolve to [`DeviceKind::Unknown`]; the device is
    /// still enumerated, only its type label falls back.
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Earpiece,
            2 => Self::Speaker,
            3 => Self::WiredHeadset,
            4 => Self::WiredHeadphones,
            5 => Self::LineAnalog,
            6 => Self::LineDigital,
            8 => Self::Bluetooth,
            9 => Self::Hdmi,
            10 => Self::HdmiArc,
            11 => Self::UsbDevice,
            12 => Self::UsbAccessory,
            13 => Self::Dock,
            14 => Self::Fm,
            16 => Self::FmTuner,
            17 => Self::TvTuner,
            18 => Self::Telephony,
            19 => Self::AuxLine,
            20 => Self::Ip,
            21 => Self::Bus,
            _ => Self::Unknown,
        }
    }

    /// Returns the numeric device-type code for this kind.
    #[must_use]
    pub fn code(&self) -> u32 {
        match self {
            Self::Earpiece => 1,
            Self::Speaker => 2,
            Self::WiredHeadset => 3,
            Self::WiredHeadphones => 4,
            Self::LineAnalog => 5,
            Self::LineDigital => 6,
            Self::Bluetooth => 8,
            Self::Hdmi => 9,
            Self::HdmiArc => 10,
            Self::UsbDevice => 11,
            Self::UsbAccessory => 12,
            Self::Dock => 13,
            Self::Fm => 14,
            Self::FmTuner => 16,
            Self::TvTuner => 17,
            Self::Telephony => 18,
            Self::AuxLine => 19,
            Self::Ip => 20,
            Self::Bus => 21,
            Self::Unknown => 0,
        }
    }

    /// Returns the fixed readable label for this kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Earpiece => "earpiece",
            Self::Speaker => "speaker",
            Self::WiredHeadset => "wired_headset",
            Self::WiredHeadphones => "wired_headphones",
            Self::LineAnalog => "line_analog",
            Self::LineDigital => "line_digital",
            Self::Bluetooth => "bluetooth",
            Self::Hdmi => "hdmi",
            Self::HdmiArc => "hdmi_arc",
            Self::UsbDevice => "usb_device",
            Self::UsbAccessory => "usb_accessory",
            Self::Dock => "dock",
            Self::Fm => "fm",
            Self::FmTuner => "fm_tuner",
            Self::TvTuner => "tv_tuner",
            Self::Telephony => "telephony",
            Self::AuxLine => "auxiliary",
            Self::Ip => "ip",
            Self::Bus => "bus",
            Self::Unknown => "unknown",
        }
    }

    /// Infers a kind from a device name.
    ///
    /// Used by [`HostBackend`](crate::HostBackend): CPAL exposes no
    /// device-type metadata, so the host backend classifies devices by
    /// common name patterns. Falls back to [`DeviceKind::Unknown`].
    #[must_use]
    pub fn infer_from_name(name: &str) -> Self {
        let name = name.to_lowercase();

        if name.contains("bluetooth") || name.contains("a2dp") || name.contains("airpods") {
            Self::Bluetooth
        } else if name.contains("hdmi") {
            Self::Hdmi
        } else if name.contains("usb") {
            Self::UsbDevice
        } else if name.contains("headset") {
            Self::WiredHeadset
        } else if name.contains("headphone") {
            Self::WiredHeadphones
        } else if name.contains("dock") {
            Self::Dock
        } else if name.contains("speaker") || name.contains("built-in") {
            Self::Speaker
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for kind in [
            DeviceKind::Earpiece,
            DeviceKind::Speaker,
            DeviceKind::WiredHeadset,
            DeviceKind::WiredHeadphones,
            DeviceKind::LineAnalog,
            DeviceKind::LineDigital,
            DeviceKind::Bluetooth,
            DeviceKind::Hdmi,
            DeviceKind::HdmiArc,
            DeviceKind::UsbDevice,
            DeviceKind::UsbAccessory,
            DeviceKind::Dock,
            DeviceKind::Fm,
            DeviceKind::FmTuner,
            DeviceKind::TvTuner,
            DeviceKind::Telephony,
            DeviceKind::AuxLine,
            DeviceKind::Ip,
            DeviceKind::Bus,
        ] {
            assert_eq!(DeviceKind::from_code(kind.code()), kind);
        }
    }

    #[test]
    fn test_unrecognized_code_falls_back() {
        assert_eq!(DeviceKind::from_code(0), DeviceKind::Unknown);
        assert_eq!(DeviceKind::from_code(7), DeviceKind::Unknown);
        assert_eq!(DeviceKind::from_code(999), DeviceKind::Unknown);
        assert_eq!(DeviceKind::from_code(999).label(), "unknown");
    }

    #[test]
    fn test_labels() {
        assert_eq!(DeviceKind::Speaker.label(), "speaker");
        assert_eq!(DeviceKind::Bluetooth.label(), "bluetooth");
        assert_eq!(DeviceKind::AuxLine.label(), "auxiliary");
        assert_eq!(DeviceKind::HdmiArc.label(), "hdmi_arc");
        assert_eq!(format!("{}", DeviceKind::WiredHeadphones), "wired_headphones");
    }

    #[test]
    fn test_infer_from_name() {
        assert_eq!(
            DeviceKind::infer_from_name("MacBook Pro Speakers"),
            DeviceKind::Speaker
        );
        assert_eq!(
            DeviceKind::infer_from_name("AirPods Pro"),
            DeviceKind::Bluetooth
        );
        assert_eq!(DeviceKind::infer_from_name("HDMI Output"), DeviceKind::Hdmi);
        assert_eq!(
            DeviceKind::infer_from_name("USB Audio CODEC"),
            DeviceKind::UsbDevice
        );
        assert_eq!(
            DeviceKind::infer_from_name("Plantronics Headset"),
            DeviceKind::WiredHeadset
        );
        assert_eq!(
            DeviceKind::infer_from_name("Sony Headphones"),
            DeviceKind::WiredHeadphones
        );
        assert_eq!(
            DeviceKind::infer_from_name("Mystery Box 3000"),
            DeviceKind::Unknown
        );
    }
}
