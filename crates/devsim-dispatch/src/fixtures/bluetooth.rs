//! Simulated Bluetooth peripherals.

use serde::Serialize;

use super::{DeviceRecord, yes_no};

/// Peripheral class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeripheralKind {
    /// Audio headset.
    Headphones,
    /// Pointing device.
    Mouse,
    /// Keyboard.
    Keyboard,
}

impl PeripheralKind {
    /// Lower-case name as serialised.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Headphones => "headphones",
            Self::Mouse => "mouse",
            Self::Keyboard => "keyboard",
        }
    }
}

/// One paired peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BluetoothDevice {
    /// Display name.
    pub name: &'static str,
    /// MAC address.
    pub address: &'static str,
    /// Whether a link is currently up.
    pub connected: bool,
    /// Peripheral class.
    #[serde(rename = "type")]
    pub kind: PeripheralKind,
}

impl DeviceRecord for BluetoothDevice {
    const COLUMNS: &'static [&'static str] = &["name", "address", "connected", "type"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.to_owned(),
            self.address.to_owned(),
            yes_no(self.connected).to_owned(),
            self.kind.as_str().to_owned(),
        ]
    }
}

/// Peripherals returned by `list`.
pub const BLUETOOTH_DEVICES: &[BluetoothDevice] = &[
    BluetoothDevice {
        name: "Wireless Headphones",
        address: "AA:BB:CC:DD:EE:FF",
        connected: true,
        kind: PeripheralKind::Headphones,
    },
    BluetoothDevice {
        name: "Bluetooth Mouse",
        address: "11:22:33:44:55:66",
        connected: false,
        kind: PeripheralKind::Mouse,
    },
    BluetoothDevice {
        name: "Wireless Keyboard",
        address: "77:88:99:AA:BB:CC",
        connected: true,
        kind: PeripheralKind::Keyboard,
    },
];
