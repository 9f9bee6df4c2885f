//! Shared configuration for the simulated device-manager tools.
//!
//! All three binaries resolve the same [`Config`] through `ortho_config`, so a
//! setting such as the exit policy can be supplied once in `devsim.toml`, in a
//! `DEVSIM_*` environment variable, or as a leading command-line flag.
//! Precedence follows the usual layering: built-in defaults, then the
//! configuration file, then the environment, then the command line.

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

mod defaults;
mod formats;
mod policy;

pub use defaults::{
    DEFAULT_LOG_FILTER, default_exit_policy, default_log_filter, default_log_filter_string,
    default_log_format, default_output_format,
};
pub use formats::{LogFormat, LogFormatParseError, OutputFormat, OutputFormatParseError};
pub use policy::{ExitPolicy, ExitPolicyParseError};

/// Flags understood by the configuration loader.
///
/// These must stay in sync with the fields of [`Config`] plus the
/// discovery flag generated by `ortho_config`.
pub const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--output-format",
    "--exit-policy",
];

/// Resolved configuration shared by the audio, Bluetooth, and USB tools.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(
    prefix = "DEVSIM",
    discovery(
        app_name = "devsim",
        env_var = "DEVSIM_CONFIG_PATH",
        config_file_name = "devsim.toml",
        dotfile_name = ".devsim.toml",
        project_file_name = ".devsim.toml"
    )
)]
pub struct Config {
    /// `tracing` filter directive applied to the stderr log stream.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Encoding used for log events.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Encoding used for the result envelope on stdout.
    #[ortho_config(default = default_output_format())]
    pub output_format: OutputFormat,
    /// Mapping from envelope outcome to process exit code.
    #[ortho_config(default = default_exit_policy())]
    pub exit_policy: ExitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            output_format: default_output_format(),
            exit_policy: default_exit_policy(),
        }
    }
}

impl Config {
    /// Filter expression for the log subscriber.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Selected log encoding.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Selected envelope encoding.
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Selected exit policy.
    #[must_use]
    pub const fn exit_policy(&self) -> ExitPolicy {
        self.exit_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.exit_policy(), ExitPolicy::Legacy);
    }

    #[test]
    fn config_flags_use_double_dash_prefix() {
        assert!(CONFIG_CLI_FLAGS.iter().all(|flag| flag.starts_with("--")));
    }
}
