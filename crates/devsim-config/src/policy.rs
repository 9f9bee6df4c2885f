//! Exit code policy for error envelopes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Decides which error envelopes terminate the process with a failure code.
///
/// A missing verb always exits with status 1. The policies differ only in how
/// they treat unknown verbs and arguments that fail conversion.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExitPolicy {
    /// Unknown verbs and invalid arguments still exit with status 0.
    #[default]
    Legacy,
    /// Every error envelope exits with status 1.
    Strict,
}

/// Errors encountered while parsing an [`ExitPolicy`] from text.
pub type ExitPolicyParseError = strum::ParseError;
