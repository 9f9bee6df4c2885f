//! Verb tables binding invocations to typed commands.

use tracing::debug;

use crate::arguments::Positional;
use crate::error::DispatchError;
use crate::invocation::Invocation;

/// Converts validated positional arguments into a typed command.
pub type Binder<C> = fn(Positional<'_>) -> Result<C, DispatchError>;

/// One verb, its minimum arity, and the binder that builds its command.
#[derive(Debug)]
pub struct CommandEntry<C> {
    verb: &'static str,
    min_args: usize,
    bind: Binder<C>,
}

impl<C> CommandEntry<C> {
    /// Declares a verb. `verb` must already be lower case.
    #[must_use]
    pub const fn new(verb: &'static str, min_args: usize, bind: Binder<C>) -> Self {
        Self {
            verb,
            min_args,
            bind,
        }
    }

    /// The lower-case verb.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        self.verb
    }
}

/// Immutable mapping from verb to command entry for one domain.
#[derive(Debug)]
pub struct CommandTable<C> {
    entries: Vec<CommandEntry<C>>,
}

impl<C> CommandTable<C> {
    /// Builds a table from its entries.
    #[must_use]
    pub const fn new(entries: Vec<CommandEntry<C>>) -> Self {
        Self { entries }
    }

    /// Verbs in declaration order.
    pub fn verbs(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(CommandEntry::verb)
    }

    /// Looks up an entry by its already-folded verb.
    #[must_use]
    pub fn entry(&self, folded_verb: &str) -> Option<&CommandEntry<C>> {
        self.entries.iter().find(|entry| entry.verb == folded_verb)
    }

    /// Resolves an invocation into a command.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::MissingCommand`] when no verb was supplied.
    /// - [`DispatchError::UnknownCommand`] when the verb is not in the table
    ///   or fewer than its minimum arguments followed it.
    /// - Whatever the entry's binder reports while converting arguments.
    pub fn resolve(&self, invocation: &Invocation) -> Result<C, DispatchError> {
        let verb = invocation
            .folded_verb()
            .ok_or(DispatchError::MissingCommand)?;
        let positional = invocation.positional();
        let Some(entry) = self
            .entry(&verb)
            .filter(|entry| positional.len() >= entry.min_args)
        else {
            return Err(DispatchError::UnknownCommand { verb });
        };
        debug!(verb = entry.verb, arguments = positional.len(), "binding command");
        (entry.bind)(positional)
    }
}
