//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Failures outside the dispatch contract. Reported on stderr with exit 1.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("failed to write result envelope: {0}")]
    WriteEnvelope(serde_json::Error),
    #[error("failed to emit rendered output: {0}")]
    EmitRendered(io::Error),
}
