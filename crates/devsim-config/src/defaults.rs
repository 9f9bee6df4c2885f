use crate::formats::{LogFormat, OutputFormat};
use crate::policy::ExitPolicy;

/// Default log filter expression used by the binaries.
///
/// Kept at `warn` so an ordinary invocation writes nothing to stderr.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Default log filter expression used by the binaries.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Default logging format for the binaries.
pub fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Default envelope encoding: one line of JSON.
pub fn default_output_format() -> OutputFormat {
    OutputFormat::Json
}

/// Default exit policy: only a missing verb exits non-zero.
pub fn default_exit_policy() -> ExitPolicy {
    ExitPolicy::Legacy
}
