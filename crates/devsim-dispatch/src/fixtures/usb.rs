//! Simulated USB bus.

use serde::Serialize;

use super::{DRIVER_VERSION, DeviceRecord, yes_no};
use crate::envelope::InfoLine;

/// USB device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    /// Mass storage.
    Storage,
    /// Human interface device.
    Hid,
    /// Video capture.
    Camera,
}

impl DeviceClass {
    /// Lower-case name as serialised.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::Hid => "hid",
            Self::Camera => "camera",
        }
    }
}

/// One attached USB device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsbDevice {
    /// Display name.
    pub name: &'static str,
    /// Vendor identifier, four hex digits.
    pub vid: &'static str,
    /// Product identifier, four hex digits.
    pub pid: &'static str,
    /// Device class.
    #[serde(rename = "type")]
    pub class: DeviceClass,
    /// Whether the device is attached.
    pub connected: bool,
    /// Bus-port path.
    pub port: &'static str,
}

impl DeviceRecord for UsbDevice {
    const COLUMNS: &'static [&'static str] = &["name", "vid", "pid", "type", "connected", "port"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.to_owned(),
            self.vid.to_owned(),
            self.pid.to_owned(),
            self.class.as_str().to_owned(),
            yes_no(self.connected).to_owned(),
            self.port.to_owned(),
        ]
    }
}

/// Host controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsbController {
    /// Display name.
    pub name: &'static str,
    /// Host controller interface, for example `xHCI`.
    #[serde(rename = "type")]
    pub interface: &'static str,
    /// Root hub port count.
    pub ports: u8,
}

/// USB subsystem summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsbInfo {
    /// Host controllers.
    pub controllers: &'static [UsbController],
    /// Number of devices in [`USB_DEVICES`].
    pub total_devices: usize,
    /// Controller owning the attached devices.
    pub active_controller: &'static str,
    /// Driver build.
    pub driver_version: &'static str,
}

impl UsbInfo {
    pub(crate) fn lines(&self) -> Vec<InfoLine> {
        let controllers = self
            .controllers
            .iter()
            .map(|controller| {
                format!(
                    "{} ({}, {} ports)",
                    controller.name, controller.interface, controller.ports
                )
            })
            .collect();
        vec![
            InfoLine::items("controllers", controllers),
            InfoLine::scalar("total_devices", self.total_devices),
            InfoLine::scalar("active_controller", self.active_controller),
            InfoLine::scalar("driver_version", self.driver_version),
        ]
    }
}

/// Devices returned by `list`.
pub const USB_DEVICES: &[UsbDevice] = &[
    UsbDevice {
        name: "USB Flash Drive",
        vid: "0781",
        pid: "5567",
        class: DeviceClass::Storage,
        connected: true,
        port: "1-2",
    },
    UsbDevice {
        name: "USB Mouse",
        vid: "046d",
        pid: "c52b",
        class: DeviceClass::Hid,
        connected: true,
        port: "1-4",
    },
    UsbDevice {
        name: "USB Keyboard",
        vid: "046d",
        pid: "c52b",
        class: DeviceClass::Hid,
        connected: true,
        port: "1-6",
    },
    UsbDevice {
        name: "USB Webcam",
        vid: "046d",
        pid: "082d",
        class: DeviceClass::Camera,
        connected: true,
        port: "1-3",
    },
];

/// Controllers reported by `info`.
pub const USB_CONTROLLERS: &[UsbController] = &[
    UsbController {
        name: "Intel USB 3.0 Controller",
        interface: "xHCI",
        ports: 6,
    },
    UsbController {
        name: "Intel USB 2.0 Controller",
        interface: "EHCI",
        ports: 4,
    },
];

/// Summary returned by `info`.
pub const USB_INFO: UsbInfo = UsbInfo {
    controllers: USB_CONTROLLERS,
    total_devices: USB_DEVICES.len(),
    active_controller: "Intel USB 3.0 Controller",
    driver_version: DRIVER_VERSION,
};
