//! Simulated audio endpoints.

use serde::Serialize;

use super::{DRIVER_VERSION, DeviceRecord};
use crate::envelope::InfoLine;

/// Whether an endpoint captures or plays audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Capture device.
    Input,
    /// Playback device.
    Output,
}

impl Direction {
    /// Lower-case name as serialised.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

/// Activity state of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointState {
    /// Passing audio.
    Active,
    /// Muted.
    Muted,
}

impl EndpointState {
    /// Lower-case name as serialised.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Muted => "muted",
        }
    }
}

/// One audio endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioDevice {
    /// Display name.
    pub name: &'static str,
    /// Capture or playback.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// Activity state.
    pub status: EndpointState,
    /// Volume in percent.
    pub volume: u8,
}

impl DeviceRecord for AudioDevice {
    const COLUMNS: &'static [&'static str] = &["name", "type", "status", "volume"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.to_owned(),
            self.direction.as_str().to_owned(),
            self.status.as_str().to_owned(),
            self.volume.to_string(),
        ]
    }
}

/// Audio subsystem summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioInfo {
    /// Driver build.
    pub driver_version: &'static str,
    /// Mixer sample rate.
    pub sample_rate: &'static str,
    /// Mixer sample depth.
    pub bit_depth: &'static str,
    /// Number of endpoints in [`AUDIO_DEVICES`].
    pub total_devices: usize,
    /// Default capture endpoint.
    pub active_input: &'static str,
    /// Default playback endpoint.
    pub active_output: &'static str,
}

impl AudioInfo {
    pub(crate) fn lines(&self) -> Vec<InfoLine> {
        vec![
            InfoLine::scalar("driver_version", self.driver_version),
            InfoLine::scalar("sample_rate", self.sample_rate),
            InfoLine::scalar("bit_depth", self.bit_depth),
            InfoLine::scalar("total_devices", self.total_devices),
            InfoLine::scalar("active_input", self.active_input),
            InfoLine::scalar("active_output", self.active_output),
        ]
    }
}

/// Endpoints returned by `list`.
pub const AUDIO_DEVICES: &[AudioDevice] = &[
    AudioDevice {
        name: "High Definition Audio Device",
        direction: Direction::Input,
        status: EndpointState::Active,
        volume: 75,
    },
    AudioDevice {
        name: "USB Audio Device",
        direction: Direction::Output,
        status: EndpointState::Active,
        volume: 80,
    },
    AudioDevice {
        name: "Microphone Array",
        direction: Direction::Input,
        status: EndpointState::Muted,
        volume: 0,
    },
];

/// Summary returned by `info`.
pub const AUDIO_INFO: AudioInfo = AudioInfo {
    driver_version: DRIVER_VERSION,
    sample_rate: "48000 Hz",
    bit_depth: "24-bit",
    total_devices: AUDIO_DEVICES.len(),
    active_input: "Microphone Array",
    active_output: "USB Audio Device",
};
