//! # audio-outputs
//!
//! Enumerate the operating system's audio output devices.
//!
//! `audio-outputs` answers one question: which playback sinks does this
//! machine have right now? Each device is reported with a numeric id and a
//! human-readable label of the form `"<product name> (<type label>)"`, in
//! the order the platform enumerates them. Telephony endpoints and
//! non-sink entries are excluded.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use audio_outputs::enumerate_output_devices;
//!
//! for device in enumerate_output_devices()? {
//!     println!("{}: {}", device.id, device.name);
//! }
//! ```
//!
//! For embedders that speak a named-method request/response protocol,
//! [`DeviceChannel`] serves the `enumerateOutputDevices` method with the
//! device list encoded as JSON:
//!
//! ```rust,ignore
//! use audio_outputs::{DeviceChannel, HostBackend, MethodReply};
//!
//! let channel = DeviceChannel::new(HostBackend::default_host());
//! match channel.handle("enumerateOutputDevices")? {
//!     MethodReply::Payload(json) => println!("{json}"),
//!     MethodReply::NotImplemented => unreachable!(),
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate keeps the platform boundary behind a trait:
//!
//! - **Backend** ([`OutputBackend`]): yields raw [`OutputDescriptor`]s.
//!   [`HostBackend`] queries the default audio host via CPAL;
//!   [`MockBackend`] feeds descriptors from memory for tests and CI.
//! - **Pipeline** ([`devices_from_descriptors`]): a pure filter/map over
//!   descriptors, so the filtering rules and the label table are testable
//!   without audio hardware.
//! - **Channel** ([`DeviceChannel`]): method-name dispatch plus JSON
//!   encoding of the result.

// unsafe_code lint is configured in Cargo.toml as "deny"
#![warn(missing_docs)]

pub mod backend;
mod channel;
mod device;
mod enumerate;
mod error;
mod kind;

pub use backend::{HostBackend, MockBackend, OutputBackend};
pub use channel::{DeviceChannel, MethodReply, METHOD_ENUMERATE_OUTPUTS};
pub use device::{OutputDescriptor, OutputDevice};
pub use enumerate::{devices_from_descriptors, enumerate_output_devices};
pub use error::AudioOutputsError;
pub use kind::DeviceKind;
