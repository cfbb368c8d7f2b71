//! The rover command alphabet and command-string validation.
//!
//! A command string is an uninterpreted sequence of single-character
//! tokens. Every token must belong to [`KNOWN_COMMANDS`]; validation is
//! all-or-nothing and happens before any command is applied.

use crate::error::UnknownCommand;
use std::fmt;

/// A single rover command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one cell in the facing direction (`f`).
    Forward,
    /// Move one cell against the facing direction (`b`).
    Backward,
    /// Rotate counter-clockwise (`l`).
    TurnLeft,
    /// Rotate clockwise (`r`).
    TurnRight,
}

/// The full command alphabet, in the order it is listed in diagnostics.
pub const KNOWN_COMMANDS: [Command; 4] = [
    Command::Forward,
    Command::Backward,
    Command::TurnLeft,
    Command::TurnRight,
];

impl Command {
    /// Parse a single command token.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'f' => Some(Self::Forward),
            'b' => Some(Self::Backward),
            'l' => Some(Self::TurnLeft),
            'r' => Some(Self::TurnRight),
            _ => None,
        }
    }

    /// The token for this command.
    pub fn symbol(self) -> char {
        match self {
            Self::Forward => 'f',
            Self::Backward => 'b',
            Self::TurnLeft => 'l',
            Self::TurnRight => 'r',
        }
    }

    /// Whether this command changes position (and so is subject to the
    /// obstacle check). Turns never are.
    pub fn is_movement(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// Sign applied to the facing direction's offset: `+1` forward,
    /// `-1` backward, `0` for turns.
    pub(crate) fn displacement_sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
            Self::TurnLeft | Self::TurnRight => 0,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Check every token of `commands` against the alphabet.
///
/// Stops at the first unknown token. The empty string is valid.
pub fn validate_command_string(commands: &str) -> Result<(), UnknownCommand> {
    match commands
        .chars()
        .enumerate()
        .find(|&(_, c)| Command::from_symbol(c).is_none())
    {
        Some((index, token)) => Err(UnknownCommand { token, index }),
        None => Ok(()),
    }
}

/// Validate and decode `commands` into a command list.
pub fn parse_command_string(commands: &str) -> Result<Vec<Command>, UnknownCommand> {
    commands
        .chars()
        .enumerate()
        .map(|(index, token)| Command::from_symbol(token).ok_or(UnknownCommand { token, index }))
        .collect()
}
