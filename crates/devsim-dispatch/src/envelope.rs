//! Result envelope emitted once per invocation.
//!
//! The JSON shape is `{"status": ..., <payload key>: ...}` where the payload
//! key is `message`, `devices`, or `info`. [`Payload`] models that as a tagged
//! union flattened beside the status, so handlers cannot emit a mixed shape.

use std::io::Write;

use serde::Serialize;

use crate::fixtures::DeviceRecord;
use crate::fixtures::audio::{AudioDevice, AudioInfo};
use crate::fixtures::bluetooth::BluetoothDevice;
use crate::fixtures::usb::{UsbDevice, UsbInfo};

/// Whether the invocation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// A handler ran and produced a payload.
    Success,
    /// The invocation was rejected before any handler ran.
    Error,
}

/// Handler output carried next to the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Free-form confirmation or error text.
    Message(String),
    /// A static device listing.
    Devices(DeviceList),
    /// A static system summary.
    Info(SystemInfo),
}

/// Device listing for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DeviceList {
    /// Audio endpoints.
    Audio(&'static [AudioDevice]),
    /// Paired Bluetooth peripherals.
    Bluetooth(&'static [BluetoothDevice]),
    /// Attached USB devices.
    Usb(&'static [UsbDevice]),
}

/// System summary for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SystemInfo {
    /// Audio driver and routing summary.
    Audio(&'static AudioInfo),
    /// USB controller summary.
    Usb(&'static UsbInfo),
}

/// Column headings and cell text for a device listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTable {
    /// Field names in record order.
    pub columns: &'static [&'static str],
    /// One row of cells per device.
    pub rows: Vec<Vec<String>>,
}

/// A single `key: value` entry of a system summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    /// Field name as it appears in the JSON payload.
    pub key: &'static str,
    /// Rendered value.
    pub value: InfoValue,
}

/// Value of an [`InfoLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    /// A scalar rendered as text.
    Scalar(String),
    /// A nested list rendered one item per line.
    Items(Vec<String>),
}

impl InfoLine {
    pub(crate) fn scalar(key: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            value: InfoValue::Scalar(value.to_string()),
        }
    }

    pub(crate) const fn items(key: &'static str, items: Vec<String>) -> Self {
        Self {
            key,
            value: InfoValue::Items(items),
        }
    }
}

impl DeviceList {
    /// Number of records in the listing.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Audio(devices) => devices.len(),
            Self::Bluetooth(devices) => devices.len(),
            Self::Usb(devices) => devices.len(),
        }
    }

    /// Returns true when the listing has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tabulates the listing for human output.
    #[must_use]
    pub fn table(&self) -> DeviceTable {
        match self {
            Self::Audio(devices) => tabulate(devices),
            Self::Bluetooth(devices) => tabulate(devices),
            Self::Usb(devices) => tabulate(devices),
        }
    }
}

fn tabulate<R: DeviceRecord>(records: &[R]) -> DeviceTable {
    DeviceTable {
        columns: R::COLUMNS,
        rows: records.iter().map(DeviceRecord::cells).collect(),
    }
}

impl SystemInfo {
    /// Summary entries in payload order.
    #[must_use]
    pub fn lines(&self) -> Vec<InfoLine> {
        match self {
            Self::Audio(info) => info.lines(),
            Self::Usb(info) => info.lines(),
        }
    }
}

/// The single structured response of an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    status: Status,
    #[serde(flatten)]
    payload: Payload,
}

impl Envelope {
    /// Wraps a handler payload in a success envelope.
    #[must_use]
    pub const fn success(payload: Payload) -> Self {
        Self {
            status: Status::Success,
            payload,
        }
    }

    /// Builds an error envelope carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            payload: Payload::Message(message.into()),
        }
    }

    /// Status of the envelope.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Payload of the envelope.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Serialises the envelope as one line of compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error when serialisation fails.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }

    /// Writes the envelope as one line of compact JSON and flushes `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialisation or the write fails.
    pub fn write_json_line<W>(&self, writer: &mut W) -> Result<(), serde_json::Error>
    where
        W: Write,
    {
        serde_json::to_writer(&mut *writer, self)?;
        writer.write_all(b"\n").map_err(serde_json::Error::io)?;
        writer.flush().map_err(serde_json::Error::io)
    }
}
