//! Logging bootstrap for the device-manager tools.
//!
//! Stdout carries the result envelope, so every log event goes to stderr.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, time::UtcTime};

use devsim_config::{Config, LogFormat};

static SUBSCRIBER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors encountered while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub(crate) enum TelemetryError {
    #[error("invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] SetGlobalDefaultError),
}

/// Subscriber settings resolved from [`Config`].
struct LogSettings {
    filter: EnvFilter,
    format: LogFormat,
    ansi: bool,
}

impl LogSettings {
    fn from_config(config: &Config) -> Result<Self, TelemetryError> {
        let directive = config.log_filter();
        let filter = EnvFilter::try_new(directive).map_err(|error| TelemetryError::Filter {
            directive: directive.to_owned(),
            message: error.to_string(),
        })?;
        Ok(Self {
            filter,
            format: config.log_format(),
            ansi: io::stderr().is_terminal(),
        })
    }

    fn into_subscriber(self) -> Box<dyn Subscriber + Send + Sync> {
        let builder = fmt::Subscriber::builder()
            .with_env_filter(self.filter)
            .with_target(true)
            .with_writer(io::stderr)
            .with_ansi(self.ansi)
            .with_timer(UtcTime::rfc_3339());

        match self.format {
            LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
            LogFormat::Compact => Box::new(builder.compact().finish()),
        }
    }
}

/// Installs the process-wide subscriber on first use.
///
/// Later calls return immediately, even with a different configuration.
pub(crate) fn initialise(config: &Config) -> Result<(), TelemetryError> {
    SUBSCRIBER_INSTALLED
        .get_or_try_init(|| {
            let subscriber = LogSettings::from_config(config)?.into_subscriber();
            tracing::subscriber::set_global_default(subscriber)?;
            Ok::<(), TelemetryError>(())
        })
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        let config = Config {
            log_filter: String::from("devsim=loudest"),
            ..Config::default()
        };
        let error = LogSettings::from_config(&config)
            .err()
            .expect("filter must be rejected");
        assert!(
            matches!(error, TelemetryError::Filter { ref directive, .. } if directive == "devsim=loudest")
        );
    }

    #[test]
    fn carries_configured_format() {
        let config = Config {
            log_format: LogFormat::Json,
            ..Config::default()
        };
        let settings = LogSettings::from_config(&config).expect("default filter parses");
        assert_eq!(settings.format, LogFormat::Json);
    }
}
