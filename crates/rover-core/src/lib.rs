//! Rover simulation on a wrap-around grid.
//!
//! This crate is the engine behind every rover: it owns position,
//! orientation, grid bounds and obstacle probability, validates and
//! executes command strings, and reports how each run ended.
//!
//! # Overview
//!
//! - [`Rover`] / [`RoverBuilder`]: the state machine and its permissive
//!   constructor (invalid inputs are corrected, see [`Correction`]).
//! - [`Command`], [`Orientation`]: the command alphabet (`f`, `b`, `l`,
//!   `r`) and the `N -> E -> S -> W` cycle.
//! - [`Grid`]: torus bounds and wrap arithmetic.
//! - [`ObstacleSensor`]: one Bernoulli trial per movement attempt;
//!   [`BernoulliSensor`] is the seeded default.
//! - [`ExecutionOutcome`]: completed, rejected, or aborted at an obstacle.
//!
//! The engine has no internal locking. A caller that shares a rover
//! between threads must serialize calls to
//! [`Rover::execute_command_string`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod outcome;
pub mod rover;
pub mod sensor;

pub use command::{parse_command_string, validate_command_string, Command, KNOWN_COMMANDS};
pub use diagnostics::{ConstructionDiagnostics, Correction};
pub use error::UnknownCommand;
pub use grid::{Grid, Position, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
pub use orientation::Orientation;
pub use outcome::{
    ExecutionOutcome, ObstacleReport, RoverState, MSG_ABORTED, MSG_COMPLETED, MSG_REJECTED,
};
pub use rover::{Rover, RoverBuilder};
pub use sensor::{BernoulliSensor, ObstacleSensor};
