//! Error types for fleet operations.

use std::fmt;

/// Errors from registering or addressing rovers in a [`Fleet`](crate::Fleet).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FleetError {
    /// No rover is registered under this name.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// A rover is already registered under this name.
    DuplicateName {
        /// The contested name.
        name: String,
    },
    /// Rover names must contain at least one non-whitespace character.
    EmptyName,
    /// A previous command string panicked while holding the rover's lock.
    Poisoned {
        /// The affected rover.
        name: String,
    },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { name } => write!(f, "rover '{name}' not found"),
            Self::DuplicateName { name } => write!(f, "rover '{name}' already registered"),
            Self::EmptyName => write!(f, "rover name must not be empty"),
            Self::Poisoned { name } => write!(f, "rover '{name}' lock poisoned"),
        }
    }
}

impl std::error::Error for FleetError {}
