//! Bluetooth manager verbs.

use crate::dispatcher::{Domain, DomainKind};
use crate::envelope::{DeviceList, Payload};
use crate::fixtures::bluetooth::BLUETOOTH_DEVICES;
use crate::table::{CommandEntry, CommandTable};

/// Bluetooth manager domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bluetooth;

/// Requested radio state for `toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioState {
    /// The token was `on` in any letter case.
    Enabled,
    /// Any other token.
    Disabled,
}

impl RadioState {
    /// Interprets a `toggle` token. Only `on` enables the radio.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token.to_lowercase() == "on" {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

/// A bound Bluetooth command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BluetoothCommand {
    /// `list`
    List,
    /// `connect <address>`
    Connect {
        /// Peer address, echoed verbatim.
        address: String,
    },
    /// `disconnect <address>`
    Disconnect {
        /// Peer address, echoed verbatim.
        address: String,
    },
    /// `toggle <state>`
    Toggle(RadioState),
}

impl Domain for Bluetooth {
    type Command = BluetoothCommand;

    const KIND: DomainKind = DomainKind::Bluetooth;

    fn table() -> CommandTable<BluetoothCommand> {
        CommandTable::new(vec![
            CommandEntry::new("list", 0, |_| Ok(BluetoothCommand::List)),
            CommandEntry::new("connect", 1, |args| {
                Ok(BluetoothCommand::Connect {
                    address: args.text(0).to_owned(),
                })
            }),
            CommandEntry::new("disconnect", 1, |args| {
                Ok(BluetoothCommand::Disconnect {
                    address: args.text(0).to_owned(),
                })
            }),
            CommandEntry::new("toggle", 1, |args| {
                Ok(BluetoothCommand::Toggle(RadioState::from_token(args.text(0))))
            }),
        ])
    }

    fn execute(command: BluetoothCommand) -> Payload {
        match command {
            BluetoothCommand::List => Payload::Devices(DeviceList::Bluetooth(BLUETOOTH_DEVICES)),
            BluetoothCommand::Connect { address } => {
                Payload::Message(format!("Connected to device {address}"))
            }
            BluetoothCommand::Disconnect { address } => {
                Payload::Message(format!("Disconnected from device {address}"))
            }
            BluetoothCommand::Toggle(state) => {
                Payload::Message(format!("Bluetooth {}", state.as_str()))
            }
        }
    }
}
