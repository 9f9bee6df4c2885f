//! Invocation dispatch and outcome evaluation.

use std::fmt;
use std::marker::PhantomData;

use devsim_config::ExitPolicy;
use tracing::debug;

use crate::domains::{Audio, Bluetooth, Usb};
use crate::envelope::{Envelope, Payload};
use crate::error::DispatchError;
use crate::invocation::Invocation;
use crate::table::CommandTable;

/// The three simulated subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// `audio_manager`
    Audio,
    /// `bluetooth_manager`
    Bluetooth,
    /// `usb_manager`
    Usb,
}

impl DomainKind {
    /// Every domain, in declaration order.
    pub const ALL: [Self; 3] = [Self::Audio, Self::Bluetooth, Self::Usb];

    /// Lower-case domain name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Bluetooth => "bluetooth",
            Self::Usb => "usb",
        }
    }

    /// Name of the binary serving this domain.
    #[must_use]
    pub const fn binary_name(self) -> &'static str {
        match self {
            Self::Audio => "audio_manager",
            Self::Bluetooth => "bluetooth_manager",
            Self::Usb => "usb_manager",
        }
    }

    /// Verbs understood by this domain, in table order.
    #[must_use]
    pub fn verbs(self) -> Vec<&'static str> {
        match self {
            Self::Audio => Dispatcher::<Audio>::new().table().verbs().collect(),
            Self::Bluetooth => Dispatcher::<Bluetooth>::new().table().verbs().collect(),
            Self::Usb => Dispatcher::<Usb>::new().table().verbs().collect(),
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verb table paired with the pure handler for its commands.
pub trait Domain {
    /// Typed command produced by the table's binders.
    type Command: fmt::Debug;

    /// Which subsystem this is.
    const KIND: DomainKind;

    /// Builds the verb table.
    fn table() -> CommandTable<Self::Command>;

    /// Runs a bound command. Must not perform I/O.
    fn execute(command: Self::Command) -> Payload;
}

/// Result of dispatching one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    envelope: Envelope,
    rejection: Option<DispatchError>,
}

impl Outcome {
    fn completed(payload: Payload) -> Self {
        Self {
            envelope: Envelope::success(payload),
            rejection: None,
        }
    }

    fn rejected(error: DispatchError) -> Self {
        Self {
            envelope: Envelope::error(error.to_string()),
            rejection: Some(error),
        }
    }

    /// The envelope to print.
    #[must_use]
    pub const fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Why the invocation was rejected, if it was.
    #[must_use]
    pub const fn rejection(&self) -> Option<&DispatchError> {
        self.rejection.as_ref()
    }

    /// Process exit status under `policy`.
    #[must_use]
    pub fn exit_status(&self, policy: ExitPolicy) -> u8 {
        self.rejection
            .as_ref()
            .map_or(0, |error| error.exit_status(policy))
    }

    /// Splits the outcome into its envelope and exit status.
    #[must_use]
    pub fn into_parts(self, policy: ExitPolicy) -> (Envelope, u8) {
        let status = self.exit_status(policy);
        (self.envelope, status)
    }
}

/// Dispatcher for one domain. Holds the table built at startup.
pub struct Dispatcher<D: Domain> {
    table: CommandTable<D::Command>,
    _domain: PhantomData<D>,
}

impl<D: Domain> Default for Dispatcher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Domain> Dispatcher<D> {
    /// Builds the domain's table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: D::table(),
            _domain: PhantomData,
        }
    }

    /// The verb table in use.
    #[must_use]
    pub const fn table(&self) -> &CommandTable<D::Command> {
        &self.table
    }

    /// Resolves, validates, and executes `invocation`.
    #[must_use]
    pub fn dispatch(&self, invocation: &Invocation) -> Outcome {
        match self.table.resolve(invocation) {
            Ok(command) => {
                debug!(domain = %D::KIND, ?command, "executing command");
                Outcome::completed(D::execute(command))
            }
            Err(error) => {
                debug!(domain = %D::KIND, %error, "invocation rejected");
                Outcome::rejected(error)
            }
        }
    }
}

/// Dispatches `invocation` against the table for `kind`.
#[must_use]
pub fn dispatch(kind: DomainKind, invocation: &Invocation) -> Outcome {
    match kind {
        DomainKind::Audio => Dispatcher::<Audio>::new().dispatch(invocation),
        DomainKind::Bluetooth => Dispatcher::<Bluetooth>::new().dispatch(invocation),
        DomainKind::Usb => Dispatcher::<Usb>::new().dispatch(invocation),
    }
}

/// Runs one invocation from raw tokens (verb first) to envelope and exit
/// status.
pub fn run<I, T>(kind: DomainKind, tokens: I, policy: ExitPolicy) -> (Envelope, u8)
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let invocation = Invocation::from_tokens(tokens);
    dispatch(kind, &invocation).into_parts(policy)
}
