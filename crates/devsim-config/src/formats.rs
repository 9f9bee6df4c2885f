//! Encodings for the two output streams.
//!
//! Stdout carries the result envelope in an [`OutputFormat`]; stderr carries
//! log events in a [`LogFormat`]. Both parse from snake_case names in any
//! letter case, as they arrive from flags, `DEVSIM_*` variables, and TOML.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Encoding used when writing the result envelope to stdout.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    /// A single line of compact JSON.
    #[default]
    Json,
    /// Tables and `key: value` lines intended for a terminal.
    Human,
}

/// Encoding used for log events on stderr.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    Json,
    /// Terse single-line text.
    #[default]
    Compact,
}

/// Errors encountered while parsing an [`OutputFormat`] from text.
pub type OutputFormatParseError = strum::ParseError;

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;
