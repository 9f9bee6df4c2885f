//! Error taxonomy for rejected invocations.

use devsim_config::ExitPolicy;
use thiserror::Error;

/// Reasons an invocation is rejected before any handler runs.
///
/// The `Display` text is the exact `message` carried by the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No verb was supplied.
    #[error("No command provided")]
    MissingCommand,
    /// The verb is not in the table, or too few arguments followed it.
    #[error("Unknown command: {verb}")]
    UnknownCommand {
        /// The case-folded verb as typed.
        verb: String,
    },
    /// A positional argument failed type conversion.
    #[error("Invalid {parameter}")]
    InvalidArgument {
        /// Human name of the parameter, for example `volume level`.
        parameter: &'static str,
        /// The raw text that failed to convert.
        value: String,
    },
}

impl DispatchError {
    /// Returns the exit status this rejection produces under `policy`.
    #[must_use]
    pub const fn exit_status(&self, policy: ExitPolicy) -> u8 {
        match (self, policy) {
            (Self::MissingCommand, _) | (_, ExitPolicy::Strict) => 1,
            (Self::UnknownCommand { .. } | Self::InvalidArgument { .. }, ExitPolicy::Legacy) => 0,
        }
    }
}
