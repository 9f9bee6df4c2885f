//! Simulated audio device manager.
//!
//! Delegates to [`devsim_cli::run`], which resolves configuration, dispatches
//! the verb, and prints one result envelope.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

use devsim_cli::DomainKind;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    devsim_cli::run(
        DomainKind::Audio,
        std::env::args_os(),
        &mut stdout,
        &mut stderr,
    )
}
