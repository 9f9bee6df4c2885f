//! USB manager verbs.

use crate::dispatcher::{Domain, DomainKind};
use crate::envelope::{DeviceList, Payload, SystemInfo};
use crate::fixtures::usb::{USB_DEVICES, USB_INFO};
use crate::table::{CommandEntry, CommandTable};

/// USB manager domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Usb;

/// A bound USB command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsbCommand {
    /// `list`
    List,
    /// `disable <vid> <pid>`
    Disable {
        /// Vendor identifier, echoed verbatim.
        vid: String,
        /// Product identifier, echoed verbatim.
        pid: String,
    },
    /// `enable <vid> <pid>`
    Enable {
        /// Vendor identifier, echoed verbatim.
        vid: String,
        /// Product identifier, echoed verbatim.
        pid: String,
    },
    /// `eject <port>`
    Eject {
        /// Bus-port path, echoed verbatim.
        port: String,
    },
    /// `info`
    Info,
}

impl Domain for Usb {
    type Command = UsbCommand;

    const KIND: DomainKind = DomainKind::Usb;

    fn table() -> CommandTable<UsbCommand> {
        CommandTable::new(vec![
            CommandEntry::new("list", 0, |_| Ok(UsbCommand::List)),
            CommandEntry::new("disable", 2, |args| {
                Ok(UsbCommand::Disable {
                    vid: args.text(0).to_owned(),
                    pid: args.text(1).to_owned(),
                })
            }),
            CommandEntry::new("enable", 2, |args| {
                Ok(UsbCommand::Enable {
                    vid: args.text(0).to_owned(),
                    pid: args.text(1).to_owned(),
                })
            }),
            CommandEntry::new("eject", 1, |args| {
                Ok(UsbCommand::Eject {
                    port: args.text(0).to_owned(),
                })
            }),
            CommandEntry::new("info", 0, |_| Ok(UsbCommand::Info)),
        ])
    }

    fn execute(command: UsbCommand) -> Payload {
        match command {
            UsbCommand::List => Payload::Devices(DeviceList::Usb(USB_DEVICES)),
            UsbCommand::Disable { vid, pid } => {
                Payload::Message(format!("USB device with VID:{vid} PID:{pid} disabled"))
            }
            UsbCommand::Enable { vid, pid } => {
                Payload::Message(format!("USB device with VID:{vid} PID:{pid} enabled"))
            }
            UsbCommand::Eject { port } => {
                Payload::Message(format!("USB storage at port {port} safely ejected"))
            }
            UsbCommand::Info => Payload::Info(SystemInfo::Usb(&USB_INFO)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DispatchError, Invocation};
    use rstest::rstest;

    fn bind(tokens: &[&str]) -> Result<UsbCommand, DispatchError> {
        Usb::table().resolve(&Invocation::from_tokens(tokens.iter().copied()))
    }

    #[test]
    fn binds_vid_and_pid_in_order() {
        assert_eq!(
            bind(&["DISABLE", "046d", "c52b"]),
            Ok(UsbCommand::Disable {
                vid: String::from("046d"),
                pid: String::from("c52b"),
            })
        );
    }

    #[rstest]
    #[case(&["enable", "046d"], "enable")]
    #[case(&["disable"], "disable")]
    #[case(&["eject"], "eject")]
    fn missing_identifiers_read_as_unknown(#[case] tokens: &[&str], #[case] verb: &str) {
        assert_eq!(
            bind(tokens),
            Err(DispatchError::UnknownCommand {
                verb: verb.to_owned()
            })
        );
    }

    #[rstest]
    #[case(UsbCommand::Enable { vid: String::from("0781"), pid: String::from("5567") }, "USB device with VID:0781 PID:5567 enabled")]
    #[case(UsbCommand::Disable { vid: String::from("046d"), pid: String::from("c52b") }, "USB device with VID:046d PID:c52b disabled")]
    #[case(UsbCommand::Eject { port: String::from("1-2") }, "USB storage at port 1-2 safely ejected")]
    fn messages_interpolate_arguments(#[case] command: UsbCommand, #[case] expected: &str) {
        assert_eq!(Usb::execute(command), Payload::Message(expected.to_owned()));
    }

    #[test]
    fn info_counts_listed_devices() {
        assert_eq!(USB_INFO.total_devices, USB_DEVICES.len());
        assert_eq!(USB_INFO.controllers.len(), 2);
    }
}
