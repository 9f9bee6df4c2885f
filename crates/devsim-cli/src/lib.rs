//! Command-line runtime shared by the simulated device managers.
//!
//! Each binary names its [`DomainKind`] and hands the raw process arguments to
//! [`run`]. Leading configuration flags are resolved through `ortho-config`;
//! the remaining tokens form the invocation passed to the dispatcher. Exactly
//! one envelope is written to stdout and the exit code follows the configured
//! exit policy. The runtime can be driven from tests with substitute
//! configuration loaders and in-memory streams.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use tracing::debug;

mod config;
mod errors;
mod output;
mod telemetry;

use config::{command_tokens, split_config_arguments};
pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub use devsim_dispatch::DomainKind;
use devsim_dispatch::{Invocation, dispatch};
pub(crate) use errors::AppError;
pub use output::render_human;

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

struct CliRunner<'a, W: Write, E: Write, L: ConfigLoader> {
    io: IoStreams<'a, W, E>,
    loader: &'a L,
    domain: DomainKind,
}

impl<'a, W, E, L> CliRunner<'a, W, E, L>
where
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    const fn new(io: IoStreams<'a, W, E>, loader: &'a L, domain: DomainKind) -> Self {
        Self { io, loader, domain }
    }

    fn run<I>(&mut self, args: I) -> ExitCode
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let split = split_config_arguments(&args);
        let tokens = command_tokens(&args, &split);

        let result = self.loader.load(&split.config_arguments).and_then(|config| {
            telemetry::initialise(&config)?;
            debug!(
                domain = %self.domain,
                output_format = %config.output_format(),
                exit_policy = %config.exit_policy(),
                "configuration resolved"
            );

            let invocation = Invocation::from_tokens(tokens);
            let outcome = dispatch(self.domain, &invocation);
            output::write_envelope(outcome.envelope(), config.output_format(), self.io.stdout)?;
            Ok(ExitCode::from(outcome.exit_status(config.exit_policy())))
        });

        match result {
            Ok(exit_code) => exit_code,
            Err(error) => {
                let _ = writeln!(self.io.stderr, "{error}");
                ExitCode::FAILURE
            }
        }
    }
}

/// Runs one device-manager invocation using the provided arguments and IO
/// handles.
///
/// `args` includes the program name, as returned by [`std::env::args_os`].
#[must_use]
pub fn run<I, W, E>(domain: DomainKind, args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(domain, args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    domain: DomainKind,
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let io = IoStreams::new(stdout, stderr);
    CliRunner::new(io, loader, domain).run(args)
}
