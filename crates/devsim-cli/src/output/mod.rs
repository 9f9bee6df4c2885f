//! Writing the result envelope to stdout.
//!
//! JSON output is the envelope as one compact line. Human output renders the
//! same payload as a table or `key: value` lines for terminal use.

mod render;

use std::io::Write;

use devsim_config::OutputFormat;
use devsim_dispatch::Envelope;

pub use render::render_human;

use crate::AppError;

/// Writes `envelope` to `writer` in `format` and flushes it.
pub(crate) fn write_envelope<W>(
    envelope: &Envelope,
    format: OutputFormat,
    writer: &mut W,
) -> Result<(), AppError>
where
    W: Write,
{
    match format {
        OutputFormat::Json => envelope
            .write_json_line(writer)
            .map_err(AppError::WriteEnvelope),
        OutputFormat::Human => {
            let rendered = render_human(envelope);
            writer
                .write_all(rendered.as_bytes())
                .map_err(AppError::EmitRendered)?;
            writer.flush().map_err(AppError::EmitRendered)
        }
    }
}
