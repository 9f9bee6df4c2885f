//! Verb tables and handlers for each simulated subsystem.
//!
//! Each domain is a marker type implementing [`crate::Domain`]: a table that
//! binds verbs to a typed command enum, and a pure handler that turns a
//! command into a payload.

pub mod audio;
pub mod bluetooth;
pub mod usb;

pub use audio::{Audio, AudioCommand};
pub use bluetooth::{Bluetooth, BluetoothCommand, RadioState};
pub use usb::{Usb, UsbCommand};
