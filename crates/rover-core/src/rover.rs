//! The rover state machine.
//!
//! A [`Rover`] holds its position, orientation, grid and obstacle
//! probability, and is mutated only by
//! [`execute_command_string`](Rover::execute_command_string). A call either
//! rejects the whole string up front, runs it to completion, or stops at
//! the first movement attempt that detects an obstacle.
//!
//! Construction goes through [`RoverBuilder`], which never fails: invalid
//! inputs are corrected and recorded in [`ConstructionDiagnostics`].

use crate::command::{parse_command_string, validate_command_string, Command};
use crate::diagnostics::{ConstructionDiagnostics, Correction};
use crate::error::UnknownCommand;
use crate::grid::{Grid, Position, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use crate::orientation::Orientation;
use crate::outcome::{ExecutionOutcome, ObstacleReport, RoverState};
use crate::sensor::{BernoulliSensor, ObstacleSensor};
use tracing::{debug, info};

/// A rover on a toroidal grid.
///
/// # Examples
///
/// ```
/// use rover_core::{Orientation, Rover};
///
/// let mut rover = Rover::builder().position(0, 99).build();
/// let outcome = rover.execute_command_string("f");
/// assert!(outcome.is_success());
/// assert_eq!((rover.x(), rover.y()), (0, 0));
/// assert_eq!(rover.orientation(), Orientation::North);
/// ```
#[derive(Debug)]
pub struct Rover {
    position: Position,
    orientation: Orientation,
    grid: Grid,
    obstacle_probability: f64,
    sensor: Box<dyn ObstacleSensor>,
    diagnostics: ConstructionDiagnostics,
}

/// Builder for [`Rover`].
///
/// All inputs are optional. Defaults: position `(0, 0)`, orientation `N`,
/// obstacle probability `0.0`, grid `100 x 100`, and a
/// [`BernoulliSensor`] seeded from entropy.
///
/// Inputs are taken raw (signed integers, orientation as a string) so
/// that out-of-range values reach [`build`](Self::build), which corrects
/// them instead of rejecting them.
#[derive(Debug)]
pub struct RoverBuilder {
    x: i64,
    y: i64,
    orientation: String,
    obstacle_probability: f64,
    grid_width: i64,
    grid_height: i64,
    seed: Option<u64>,
    sensor: Option<Box<dyn ObstacleSensor>>,
}

impl Default for RoverBuilder {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            orientation: Orientation::North.symbol().to_string(),
            obstacle_probability: 0.0,
            grid_width: i64::from(DEFAULT_GRID_WIDTH),
            grid_height: i64::from(DEFAULT_GRID_HEIGHT),
            seed: None,
            sensor: None,
        }
    }
}

impl RoverBuilder {
    /// Set the starting cell.
    pub fn position(mut self, x: i64, y: i64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the starting orientation from a compass symbol (`"N"`, `"E"`,
    /// `"S"`, `"W"`). Anything else is corrected to `N` at build time.
    pub fn orientation(mut self, symbol: impl Into<String>) -> Self {
        self.orientation = symbol.into();
        self
    }

    /// Set the starting orientation from a typed value.
    pub fn facing(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation.symbol().to_string();
        self
    }

    /// Set the per-move obstacle probability.
    pub fn obstacle_probability(mut self, probability: f64) -> Self {
        self.obstacle_probability = probability;
        self
    }

    /// Set the grid dimensions.
    pub fn grid(mut self, width: i64, height: i64) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    /// Seed the default [`BernoulliSensor`]. Ignored if a custom sensor
    /// is supplied with [`sensor`](Self::sensor).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom obstacle sensor.
    pub fn sensor(mut self, sensor: impl ObstacleSensor + 'static) -> Self {
        self.sensor = Some(Box::new(sensor));
        self
    }

    /// Build the rover, correcting any invalid input.
    pub fn build(self) -> Rover {
        let mut diagnostics = ConstructionDiagnostics::default();

        let width = resolve_dimension(self.grid_width).unwrap_or_else(|| {
            diagnostics.record(Correction::GridWidth {
                requested: self.grid_width,
                applied: DEFAULT_GRID_WIDTH,
            });
            DEFAULT_GRID_WIDTH
        });
        let height = resolve_dimension(self.grid_height).unwrap_or_else(|| {
            diagnostics.record(Correction::GridHeight {
                requested: self.grid_height,
                applied: DEFAULT_GRID_HEIGHT,
            });
            DEFAULT_GRID_HEIGHT
        });
        // Both dimensions are in (0, MAX_DIM] here.
        let grid = Grid::new(width, height).unwrap_or_default();

        let x = if (0..i64::from(grid.width())).contains(&self.x) {
            self.x as u32
        } else {
            diagnostics.record(Correction::X {
                requested: self.x,
                width: grid.width(),
            });
            0
        };
        let y = if (0..i64::from(grid.height())).contains(&self.y) {
            self.y as u32
        } else {
            diagnostics.record(Correction::Y {
                requested: self.y,
                height: grid.height(),
            });
            0
        };

        let orientation = Orientation::parse(&self.orientation).unwrap_or_else(|| {
            diagnostics.record(Correction::Orientation {
                requested: self.orientation.clone(),
            });
            Orientation::North
        });

        let p = self.obstacle_probability;
        let obstacle_probability = if p.is_nan() {
            diagnostics.record(Correction::ObstacleProbability {
                requested: p,
                applied: 0.0,
            });
            0.0
        } else if !(0.0..=1.0).contains(&p) {
            let applied = p.clamp(0.0, 1.0);
            diagnostics.record(Correction::ObstacleProbability {
                requested: p,
                applied,
            });
            applied
        } else {
            p
        };

        let sensor: Box<dyn ObstacleSensor> = match (self.sensor, self.seed) {
            (Some(sensor), _) => sensor,
            (None, Some(seed)) => Box::new(BernoulliSensor::new(seed)),
            (None, None) => Box::new(BernoulliSensor::from_entropy()),
        };

        Rover {
            position: Position::new(x, y),
            orientation,
            grid,
            obstacle_probability,
            sensor,
            diagnostics,
        }
    }
}

/// Accept a requested dimension if it is positive and fits a [`Grid`].
fn resolve_dimension(requested: i64) -> Option<u32> {
    u32::try_from(requested)
        .ok()
        .filter(|&d| d > 0 && d <= Grid::MAX_DIM)
}

impl Default for Rover {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Rover {
    /// Start building a rover.
    pub fn builder() -> RoverBuilder {
        RoverBuilder::default()
    }

    /// Column.
    pub fn x(&self) -> u32 {
        self.position.x
    }

    /// Row.
    pub fn y(&self) -> u32 {
        self.position.y
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Facing direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Grid the rover moves on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Grid width.
    pub fn grid_width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height.
    pub fn grid_height(&self) -> u32 {
        self.grid.height()
    }

    /// Probability that a movement attempt detects an obstacle.
    pub fn obstacle_probability(&self) -> f64 {
        self.obstacle_probability
    }

    /// Corrections applied when this rover was built.
    pub fn diagnostics(&self) -> &ConstructionDiagnostics {
        &self.diagnostics
    }

    /// Snapshot of the observable state.
    pub fn state(&self) -> RoverState {
        RoverState {
            x: self.position.x,
            y: self.position.y,
            orientation: self.orientation,
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
        }
    }

    /// Check a command string without executing it.
    pub fn validate_command_string(&self, commands: &str) -> Result<(), UnknownCommand> {
        validate_command_string(commands)
    }

    /// Execute `commands` left to right.
    ///
    /// - An unknown token rejects the whole string before anything runs.
    /// - Each `f`/`b` first asks the obstacle sensor; on detection the run
    ///   stops with the rover still on its pre-move cell. Earlier commands
    ///   stay applied, later ones are never attempted.
    /// - `l`/`r` always apply.
    pub fn execute_command_string(&mut self, commands: &str) -> ExecutionOutcome {
        let commands = match parse_command_string(commands) {
            Ok(commands) => commands,
            Err(err) => {
                debug!(token = %err.token, index = err.index, "rejected command string");
                return ExecutionOutcome::Rejected(err);
            }
        };

        for (executed, &command) in commands.iter().enumerate() {
            if command.is_movement() && self.sensor.detect(self.obstacle_probability) {
                let report = ObstacleReport {
                    obstacle: self.obstacle_position(command),
                    state: self.state(),
                    command,
                    executed,
                };
                info!(
                    obstacle = %report.obstacle,
                    x = self.position.x,
                    y = self.position.y,
                    orientation = %self.orientation,
                    %command,
                    executed,
                    "obstacle detected, aborting command string"
                );
                return ExecutionOutcome::Aborted(report);
            }
            self.apply(command);
        }

        ExecutionOutcome::Completed {
            executed: commands.len(),
        }
    }

    /// The cell a movement command would enter from the current state.
    ///
    /// Uses the same wrap arithmetic as the move itself and never mutates.
    /// For turns this is the current cell.
    pub fn obstacle_position(&self, command: Command) -> Position {
        self.destination(command)
    }

    fn destination(&self, command: Command) -> Position {
        let sign = command.displacement_sign();
        let (dx, dy) = self.orientation.forward_offset();
        self.grid.offset(self.position, dx * sign, dy * sign)
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Forward | Command::Backward => {
                self.position = self.destination(command);
            }
            Command::TurnLeft => self.orientation = self.orientation.turn_left(),
            Command::TurnRight => self.orientation = self.orientation.turn_right(),
        }
        debug!(
            %command,
            x = self.position.x,
            y = self.position.y,
            orientation = %self.orientation,
            "applied command"
        );
    }
}
