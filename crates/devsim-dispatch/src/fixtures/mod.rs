//! Static records standing in for real device enumeration.
//!
//! The tools are simulators: every listing and summary returned by a handler
//! comes verbatim from the constants in these modules. Field order in each
//! struct is the key order of the emitted JSON.

use serde::Serialize;

pub mod audio;
pub mod bluetooth;
pub mod usb;

/// Driver version reported by every simulated subsystem.
pub const DRIVER_VERSION: &str = "10.0.19041.1";

/// A device record that can be listed in a table.
pub trait DeviceRecord: Serialize {
    /// Column headings, matching the JSON keys in order.
    const COLUMNS: &'static [&'static str];

    /// Cell text for each column.
    fn cells(&self) -> Vec<String>;
}

pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
