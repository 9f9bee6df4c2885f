//! Configuration loading helpers for the device-manager tools.
//!
//! Only leading configuration flags are handed to `ortho-config`. Scanning
//! stops at the first other token, which becomes the verb; it and everything
//! after it reach the dispatcher untouched, even when they look like flags.

use std::ffi::{OsStr, OsString};

use devsim_config::{CONFIG_CLI_FLAGS, Config};
use ortho_config::OrthoConfig;

use crate::AppError;

pub(crate) trait ConfigLoader {
    /// Loads configuration for the CLI from the filtered flag arguments.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

/// Number of following arguments a configuration flag consumes, or `None`
/// when `argument` is not a configuration flag.
fn config_flag_arity(argument: &OsStr) -> Option<usize> {
    let text = argument.to_str()?;
    if !text.starts_with("--") {
        return None;
    }
    let (flag, inline_value) = text
        .split_once('=')
        .map_or((text, false), |(flag, _)| (flag, true));
    CONFIG_CLI_FLAGS
        .contains(&flag)
        .then_some(usize::from(!inline_value))
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_start: usize,
}

/// Separates the program name and leading configuration flags from the
/// command tokens.
pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let mut command_start = args.len().min(1);
    while let Some(values) = args.get(command_start).and_then(|arg| config_flag_arity(arg)) {
        command_start = args.len().min(command_start + 1 + values);
    }

    ConfigArgumentSplit {
        config_arguments: args.iter().take(command_start).cloned().collect(),
        command_start,
    }
}

/// Returns the dispatcher tokens (verb first) that follow the configuration
/// flags.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so such a token is echoed
/// with replacement characters rather than rejected.
pub(crate) fn command_tokens(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<String> {
    args.iter()
        .skip(split.command_start)
        .map(|argument| argument.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::ffi::OsStr;

    fn os_args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[rstest]
    #[case("--exit-policy=strict", Some(0))]
    #[case("--log-filter", Some(1))]
    #[case("--config-path", Some(1))]
    #[case("list", None)]
    #[case("--unknown", None)]
    #[case("--unknown=value", None)]
    #[case("-l", None)]
    fn classifies_configuration_flags(#[case] argument: &str, #[case] expected: Option<usize>) {
        assert_eq!(config_flag_arity(OsStr::new(argument)), expected);
    }

    #[test]
    fn splits_leading_flags_from_command() {
        let args = os_args(&[
            "usb_manager",
            "--output-format",
            "human",
            "--exit-policy=strict",
            "disable",
            "046d",
            "c52b",
        ]);
        let split = split_config_arguments(&args);
        assert_eq!(
            split.config_arguments,
            os_args(&[
                "usb_manager",
                "--output-format",
                "human",
                "--exit-policy=strict"
            ])
        );
        assert_eq!(command_tokens(&args, &split), ["disable", "046d", "c52b"]);
    }

    #[test]
    fn flags_after_the_verb_are_command_arguments() {
        let args = os_args(&["audio_manager", "toggle_mute", "--log-filter", "debug"]);
        let split = split_config_arguments(&args);
        assert_eq!(split.config_arguments, os_args(&["audio_manager"]));
        assert_eq!(
            command_tokens(&args, &split),
            ["toggle_mute", "--log-filter", "debug"]
        );
    }

    #[test]
    fn unknown_leading_flag_becomes_the_verb() {
        let args = os_args(&["bluetooth_manager", "--bogus"]);
        let split = split_config_arguments(&args);
        assert_eq!(command_tokens(&args, &split), ["--bogus"]);
    }

    #[test]
    fn dangling_flag_leaves_no_command() {
        let args = os_args(&["usb_manager", "--exit-policy"]);
        let split = split_config_arguments(&args);
        assert_eq!(split.config_arguments, args);
        assert!(command_tokens(&args, &split).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_command_bytes_are_replaced() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("usb_manager"),
            OsString::from("eject"),
            OsString::from_vec(vec![b'f', 0xff]),
        ];
        let split = split_config_arguments(&args);
        assert_eq!(command_tokens(&args, &split), ["eject", "f\u{FFFD}"]);
    }

    #[test]
    fn empty_arguments_produce_empty_split() {
        let split = split_config_arguments(&[]);
        assert!(split.config_arguments.is_empty());
        assert_eq!(split.command_start, 0);
    }
}
