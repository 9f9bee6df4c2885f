//! Audio manager verbs.

use crate::arguments::Integer;
use crate::dispatcher::{Domain, DomainKind};
use crate::envelope::{DeviceList, Payload, SystemInfo};
use crate::fixtures::audio::{AUDIO_DEVICES, AUDIO_INFO};
use crate::table::{CommandEntry, CommandTable};

/// Audio manager domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct Audio;

/// A bound audio command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCommand {
    /// `list`
    List,
    /// `set_volume <device> <level>`
    SetVolume {
        /// Endpoint name, echoed verbatim.
        device: String,
        /// Requested level in percent, echoed in canonical form.
        level: Integer,
    },
    /// `toggle_mute <device>`
    ToggleMute {
        /// Endpoint name, echoed verbatim.
        device: String,
    },
    /// `info`
    Info,
}

impl Domain for Audio {
    type Command = AudioCommand;

    const KIND: DomainKind = DomainKind::Audio;

    fn table() -> CommandTable<AudioCommand> {
        CommandTable::new(vec![
            CommandEntry::new("list", 0, |_| Ok(AudioCommand::List)),
            CommandEntry::new("set_volume", 2, |args| {
                let level = args.integer(1, "volume level")?;
                Ok(AudioCommand::SetVolume {
                    device: args.text(0).to_owned(),
                    level,
                })
            }),
            CommandEntry::new("toggle_mute", 1, |args| {
                Ok(AudioCommand::ToggleMute {
                    device: args.text(0).to_owned(),
                })
            }),
            CommandEntry::new("info", 0, |_| Ok(AudioCommand::Info)),
        ])
    }

    fn execute(command: AudioCommand) -> Payload {
        match command {
            AudioCommand::List => Payload::Devices(DeviceList::Audio(AUDIO_DEVICES)),
            AudioCommand::SetVolume { device, level } => {
                Payload::Message(format!("Volume for {device} set to {level}%"))
            }
            AudioCommand::ToggleMute { device } => {
                Payload::Message(format!("Mute toggled for {device}"))
            }
            AudioCommand::Info => Payload::Info(SystemInfo::Audio(&AUDIO_INFO)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DispatchError, Invocation};
    use rstest::rstest;

    fn level(text: &str) -> Integer {
        Integer::parse(text).expect("valid level")
    }

    fn bind(tokens: &[&str]) -> Result<AudioCommand, DispatchError> {
        Audio::table().resolve(&Invocation::from_tokens(tokens.iter().copied()))
    }

    #[test]
    fn binds_set_volume_with_integer_level() {
        assert_eq!(
            bind(&["set_volume", "USB Audio Device", "050"]),
            Ok(AudioCommand::SetVolume {
                device: String::from("USB Audio Device"),
                level: level("50"),
            })
        );
    }

    #[test]
    fn rejects_non_numeric_level() {
        assert_eq!(
            bind(&["set_volume", "USB Audio Device", "abc"]),
            Err(DispatchError::InvalidArgument {
                parameter: "volume level",
                value: String::from("abc"),
            })
        );
    }

    #[test]
    fn accepts_levels_beyond_machine_width() {
        assert_eq!(
            bind(&["set_volume", "Speakers", "99999999999999999999"]),
            Ok(AudioCommand::SetVolume {
                device: String::from("Speakers"),
                level: level("99999999999999999999"),
            })
        );
    }

    #[rstest]
    #[case(&["set_volume", "USB Audio Device"])]
    #[case(&["toggle_mute"])]
    fn short_invocations_are_unknown(#[case] tokens: &[&str]) {
        assert!(matches!(
            bind(tokens),
            Err(DispatchError::UnknownCommand { .. })
        ));
    }

    #[rstest]
    #[case(AudioCommand::SetVolume { device: String::from("Speakers"), level: level("-5") }, "Volume for Speakers set to -5%")]
    #[case(AudioCommand::ToggleMute { device: String::from("Microphone Array") }, "Mute toggled for Microphone Array")]
    fn messages_interpolate_arguments(#[case] command: AudioCommand, #[case] expected: &str) {
        assert_eq!(Audio::execute(command), Payload::Message(expected.to_owned()));
    }

    #[test]
    fn info_counts_listed_devices() {
        assert_eq!(AUDIO_INFO.total_devices, AUDIO_DEVICES.len());
    }
}
