//! Command dispatch for the simulated device-manager tools.
//!
//! Every tool is the same dispatcher wired to a different, fixed
//! [`CommandTable`]. An [`Invocation`] (verb plus positional arguments) is
//! resolved against the table, bound into a typed command, and executed by a
//! pure handler that yields a [`Payload`]. The result is always exactly one
//! [`Envelope`] and one [`Outcome`] that the caller maps to an exit code with
//! an [`ExitPolicy`].
//!
//! Nothing here touches hardware. Device lists and system information come
//! from the static records in [`fixtures`].

mod arguments;
mod dispatcher;
pub mod domains;
mod envelope;
mod error;
pub mod fixtures;
mod invocation;
mod table;

pub use arguments::{Integer, Positional};
pub use devsim_config::ExitPolicy;
pub use dispatcher::{Dispatcher, Domain, DomainKind, Outcome, dispatch, run};
pub use envelope::{
    DeviceList, DeviceTable, Envelope, InfoLine, InfoValue, Payload, Status, SystemInfo,
};
pub use error::DispatchError;
pub use invocation::Invocation;
pub use table::{Binder, CommandEntry, CommandTable};
