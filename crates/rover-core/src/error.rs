//! Error types for command validation.

use crate::command::KNOWN_COMMANDS;
use std::fmt;

/// A command string contained a token outside the known alphabet.
///
/// Only the first offending token is reported; validation stops there.
/// The `Display` form is the diagnostic returned to callers:
///
/// ```text
/// Unknown command: a
/// Allowed commands are: [f, b, l, r]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCommand {
    /// The unrecognized token.
    pub token: char,
    /// Character index of the token within the command string.
    pub index: usize,
}

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command: {}\nAllowed commands are: [", self.token)?;
        for (i, c) in KNOWN_COMMANDS.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c.symbol())?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for UnknownCommand {}
