//! Results of executing a command string.
//!
//! Neither an unknown command nor an obstacle is an error: both are
//! ordinary outcomes of the state machine and are reported as values.

use crate::command::Command;
use crate::error::UnknownCommand;
use crate::grid::Position;
use crate::orientation::Orientation;

/// Result message for a fully executed command string.
pub const MSG_COMPLETED: &str = "All commands successfully executed.";

/// Result message for a command string rejected during validation.
pub const MSG_REJECTED: &str = "Error: invalid command.";

/// Result message for a command string stopped by an obstacle.
pub const MSG_ABORTED: &str = "ABORTING. Reason: Found obstacle.";

/// Suffix appended to validation diagnostics.
const REJECTED_SUFFIX: &str = "\nExiting execution (no command has been executed).";

/// Immutable snapshot of a rover's observable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoverState {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Facing direction.
    pub orientation: Orientation,
    /// Grid width.
    pub grid_width: u32,
    /// Grid height.
    pub grid_height: u32,
}

impl RoverState {
    /// The rover's cell.
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Diagnostics for a command string stopped by an obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObstacleReport {
    /// The cell the rover would have entered.
    pub obstacle: Position,
    /// Rover state at the moment of the attempt (before the move).
    pub state: RoverState,
    /// The movement command that was about to run.
    pub command: Command,
    /// Number of commands applied before the abort.
    pub executed: usize,
}

impl ObstacleReport {
    /// Multi-line description of the abort.
    pub fn details(&self) -> String {
        let s = &self.state;
        format!(
            "Obstacle position:{}\n\
             Current state:\n\
             \tx: {}\n\
             \ty: {}\n\
             \torientation: {}\n\
             \tTrying to execute command: {}\n\
             \tGrid dimensions:\n\
             \tx dimension: {}\ty dimension: {}",
            self.obstacle,
            s.x,
            s.y,
            s.orientation,
            self.command,
            s.grid_width,
            s.grid_height,
        )
    }
}

/// How a call to [`Rover::execute_command_string`](crate::Rover::execute_command_string) ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Every command ran.
    Completed {
        /// Number of commands applied.
        executed: usize,
    },
    /// Validation failed; nothing ran.
    Rejected(UnknownCommand),
    /// A movement attempt hit an obstacle. Commands before it stay
    /// applied; it and everything after it never ran.
    Aborted(ObstacleReport),
}

impl ExecutionOutcome {
    /// One-line summary.
    pub fn result_message(&self) -> &'static str {
        match self {
            Self::Completed { .. } => MSG_COMPLETED,
            Self::Rejected(_) => MSG_REJECTED,
            Self::Aborted(_) => MSG_ABORTED,
        }
    }

    /// Supporting detail; empty for a completed run.
    pub fn details(&self) -> String {
        match self {
            Self::Completed { .. } => String::new(),
            Self::Rejected(err) => format!("{err}{REJECTED_SUFFIX}"),
            Self::Aborted(report) => report.details(),
        }
    }

    /// `true` only for [`Completed`](Self::Completed).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Number of commands that were applied.
    pub fn executed(&self) -> usize {
        match self {
            Self::Completed { executed } => *executed,
            Self::Rejected(_) => 0,
            Self::Aborted(report) => report.executed,
        }
    }

    /// The obstacle report, if the run was aborted.
    pub fn obstacle(&self) -> Option<&ObstacleReport> {
        match self {
            Self::Aborted(report) => Some(report),
            _ => None,
        }
    }
}
