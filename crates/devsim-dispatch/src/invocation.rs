//! The verb and positional arguments of one process run.

use crate::arguments::Positional;

/// Verb plus ordered positional arguments, exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    verb: Option<String>,
    arguments: Vec<String>,
}

impl Invocation {
    /// Builds an invocation from the tokens that follow the program name.
    ///
    /// The first token is the verb; the rest are positional arguments. An
    /// empty first token still counts as a verb.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let verb = tokens.next();
        Self {
            verb,
            arguments: tokens.collect(),
        }
    }

    /// The verb folded to lower case for table lookup and error messages.
    #[must_use]
    pub fn folded_verb(&self) -> Option<String> {
        self.verb.as_deref().map(str::to_lowercase)
    }

    /// Positional arguments that followed the verb.
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Borrowed view used by command binders.
    #[must_use]
    pub fn positional(&self) -> Positional<'_> {
        Positional::new(&self.arguments)
    }
}
