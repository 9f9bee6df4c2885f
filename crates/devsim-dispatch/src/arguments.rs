//! Positional argument access and conversion.

use std::fmt;

use crate::error::DispatchError;

/// Positional arguments that followed the verb.
///
/// The table only hands a `Positional` to a binder after checking the verb's
/// minimum arity, so indices below that minimum are always present.
#[derive(Debug, Clone, Copy)]
pub struct Positional<'a> {
    values: &'a [String],
}

impl<'a> Positional<'a> {
    /// Wraps the arguments that followed the verb.
    #[must_use]
    pub const fn new(values: &'a [String]) -> Self {
        Self { values }
    }

    /// Number of supplied arguments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no arguments were supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the argument at `index` verbatim, or an empty string when absent.
    #[must_use]
    pub fn text(&self, index: usize) -> &'a str {
        self.values.get(index).map_or("", String::as_str)
    }

    /// Validates the argument at `index` as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidArgument`] naming `parameter` when the
    /// text is not an integer.
    pub fn integer(&self, index: usize, parameter: &'static str) -> Result<Integer, DispatchError> {
        let raw = self.text(index);
        Integer::parse(raw).ok_or_else(|| DispatchError::InvalidArgument {
            parameter,
            value: raw.to_owned(),
        })
    }
}

/// A decimal integer of any magnitude, held in canonical form.
///
/// The canonical text has no `+` sign, no leading zeros and no `_`
/// separators, and zero is never negative, so `" +050 "` and `50` compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer(String);

impl Integer {
    /// Parses a decimal integer the way a user would type it on a shell.
    ///
    /// Surrounding whitespace and a leading sign are accepted, as are single
    /// underscores between digit groups (`1_000`). Only ASCII digits count.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let (negative, body) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, trimmed.get(1..)?),
            Some(b'+') => (false, trimmed.get(1..)?),
            _ => (false, trimmed),
        };

        let mut digits = String::with_capacity(body.len());
        for group in body.split('_') {
            if group.is_empty() || !group.bytes().all(|byte| byte.is_ascii_digit()) {
                return None;
            }
            digits.push_str(group);
        }

        let magnitude = digits.trim_start_matches('0');
        let canonical = match (magnitude.is_empty(), negative) {
            (true, _) => String::from("0"),
            (false, true) => format!("-{magnitude}"),
            (false, false) => magnitude.to_owned(),
        };
        Some(Self(canonical))
    }

    /// Canonical decimal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
