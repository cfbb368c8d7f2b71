//! The rover registry.
//!
//! A [`Fleet`] maps names to rovers. It is an ordinary value: the owner
//! (typically the transport layer) creates it and hands it to whoever
//! needs it, there is no process-wide registry.
//!
//! # Locking
//!
//! The name map sits behind an `RwLock`, taken briefly for lookups and
//! registration. Each rover has its own `Mutex`, held for the whole of one
//! command string, so at most one execution is in flight per rover while
//! different rovers run in parallel.

use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use indexmap::IndexMap;
use rover_core::{ExecutionOutcome, Rover, RoverBuilder, RoverState};
use tracing::{debug, info};

use crate::error::FleetError;

/// Shared handle to one registered rover.
#[derive(Clone, Debug)]
pub struct RoverHandle {
    name: Arc<str>,
    rover: Arc<Mutex<Rover>>,
}

impl RoverHandle {
    /// The name the rover is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lock the rover for exclusive access.
    pub fn lock(&self) -> Result<MutexGuard<'_, Rover>, FleetError> {
        self.rover.lock().map_err(|_| FleetError::Poisoned {
            name: self.name.to_string(),
        })
    }

    /// Snapshot of the rover's state.
    pub fn state(&self) -> Result<RoverState, FleetError> {
        Ok(self.lock()?.state())
    }

    /// Run a command string while holding the rover's lock.
    pub fn execute(&self, commands: &str) -> Result<CommandReport, FleetError> {
        let mut rover = self.lock()?;
        let outcome = rover.execute_command_string(commands);
        let state = rover.state();
        drop(rover);
        debug!(
            rover = %self.name,
            result = outcome.result_message(),
            executed = outcome.executed(),
            "command string finished"
        );
        Ok(CommandReport { outcome, state })
    }
}

/// What a command string did to a registered rover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandReport {
    /// How the run ended.
    pub outcome: ExecutionOutcome,
    /// Rover state after the run.
    pub state: RoverState,
}

/// A named registry of rovers.
#[derive(Debug, Default)]
pub struct Fleet {
    rovers: RwLock<IndexMap<String, RoverHandle>>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rover and register it under `name`.
    ///
    /// # Errors
    ///
    /// - [`FleetError::EmptyName`] if `name` is blank.
    /// - [`FleetError::DuplicateName`] if `name` is taken.
    pub fn create(
        &self,
        name: impl Into<String>,
        builder: RoverBuilder,
    ) -> Result<RoverHandle, FleetError> {
        self.insert(name, builder.build())
    }

    /// Register an already-built rover under `name`.
    pub fn insert(
        &self,
        name: impl Into<String>,
        rover: Rover,
    ) -> Result<RoverHandle, FleetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FleetError::EmptyName);
        }
        let mut rovers = self.write();
        if rovers.contains_key(&name) {
            return Err(FleetError::DuplicateName { name });
        }
        let state = rover.state();
        let handle = RoverHandle {
            name: Arc::from(name.as_str()),
            rover: Arc::new(Mutex::new(rover)),
        };
        rovers.insert(name, handle.clone());
        info!(
            rover = handle.name(),
            x = state.x,
            y = state.y,
            orientation = %state.orientation,
            grid_width = state.grid_width,
            grid_height = state.grid_height,
            "registered rover"
        );
        Ok(handle)
    }

    /// Look up a rover by name.
    pub fn find(&self, name: &str) -> Option<RoverHandle> {
        self.read().get(name).cloned()
    }

    /// Look up a rover and run a command string on it.
    ///
    /// # Errors
    ///
    /// [`FleetError::NotFound`] if no rover has this name. Domain
    /// outcomes (unknown command, obstacle) are in the returned report.
    pub fn execute(&self, name: &str, commands: &str) -> Result<CommandReport, FleetError> {
        let handle = self.find(name).ok_or_else(|| FleetError::NotFound {
            name: name.to_string(),
        })?;
        handle.execute(commands)
    }

    /// Remove a rover. Outstanding handles keep working.
    pub fn remove(&self, name: &str) -> Option<RoverHandle> {
        let removed = self.write().shift_remove(name);
        if removed.is_some() {
            info!(rover = name, "removed rover");
        }
        removed
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Name and state of every rover, in registration order.
    pub fn snapshot(&self) -> Result<Vec<(String, RoverState)>, FleetError> {
        let handles: Vec<RoverHandle> = self.read().values().cloned().collect();
        handles
            .iter()
            .map(|h| Ok((h.name().to_string(), h.state()?)))
            .collect()
    }

    /// Number of registered rovers.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// `true` if no rover is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // The map is only mutated by whole-entry insert/remove, so a panic
    // elsewhere cannot leave it half-updated; recover from poisoning.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, IndexMap<String, RoverHandle>> {
        self.rovers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, IndexMap<String, RoverHandle>> {
        self.rovers.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rover_core::Orientation;

    #[test]
    fn create_and_find() {
        let fleet = Fleet::new();
        fleet.create("r1", Rover::builder()).unwrap();
        let h = fleet.find("r1").unwrap();
        assert_eq!(h.name(), "r1");
        assert_eq!(h.state().unwrap().orientation, Orientation::North);
        assert!(fleet.find("r2").is_none());
    }

    #[test]
    fn duplicate_name_rejected() {
        let fleet = Fleet::new();
        fleet.create("r1", Rover::builder()).unwrap();
        let err = fleet.create("r1", Rover::builder()).unwrap_err();
        assert_eq!(err, FleetError::DuplicateName { name: "r1".into() });
        assert_eq!(fleet.len(), 1);
    }

    #[test]
    fn blank_name_rejected() {
        let fleet = Fleet::new();
        assert_eq!(
            fleet.create("  ", Rover::builder()).unwrap_err(),
            FleetError::EmptyName
        );
        assert!(fleet.is_empty());
    }

    #[test]
    fn names_keep_registration_order() {
        let fleet = Fleet::new();
        for name in ["zeta", "alpha", "mid"] {
            fleet.create(name, Rover::builder()).unwrap();
        }
        assert_eq!(fleet.names(), vec!["zeta", "alpha", "mid"]);
        fleet.remove("alpha");
        assert_eq!(fleet.names(), vec!["zeta", "mid"]);
    }

    #[test]
    fn execute_unknown_rover() {
        let fleet = Fleet::new();
        assert_eq!(
            fleet.execute("ghost", "f").unwrap_err(),
            FleetError::NotFound {
                name: "ghost".into()
            }
        );
    }

    #[test]
    fn execute_returns_post_run_state() {
        let fleet = Fleet::new();
        fleet.create("r1", Rover::builder().seed(0)).unwrap();
        let report = fleet.execute("r1", "ffr").unwrap();
        assert!(report.outcome.is_success());
        assert_eq!(report.state.y, 2);
        assert_eq!(report.state.orientation, Orientation::East);
    }

    #[test]
    fn removed_handle_still_usable() {
        let fleet = Fleet::new();
        let h = fleet.create("r1", Rover::builder().seed(0)).unwrap();
        fleet.remove("r1");
        assert!(h.execute("f").unwrap().outcome.is_success());
        assert!(fleet.find("r1").is_none());
    }

    #[test]
    fn snapshot_lists_every_rover() {
        let fleet = Fleet::new();
        fleet.create("a", Rover::builder().position(3, 4)).unwrap();
        fleet.create("b", Rover::builder().orientation("W")).unwrap();
        let snap = fleet.snapshot().unwrap();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].0, "a");
        assert_eq!((snap[0].1.x, snap[0].1.y), (3, 4));
        assert_eq!(snap[1].1.orientation, Orientation::West);
    }
}
