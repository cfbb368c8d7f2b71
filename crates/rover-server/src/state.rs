//! Shared application state for the HTTP handlers.

use std::sync::Arc;

use rover_fleet::Fleet;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The rovers this server manages.
    pub fleet: Arc<Fleet>,
    /// Base seed for rovers created over HTTP without an explicit seed.
    pub base_seed: Option<u64>,
}

impl AppState {
    pub fn new(fleet: Arc<Fleet>, base_seed: Option<u64>) -> Self {
        Self { fleet, base_seed }
    }

    /// Seed for the next rover registered without one: the base seed
    /// offset by the current fleet size.
    pub fn next_seed(&self) -> Option<u64> {
        self.base_seed.map(|s| s.wrapping_add(self.fleet.len() as u64))
    }
}
