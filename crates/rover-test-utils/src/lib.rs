//! Test utilities and deterministic sensors for rover development.
//!
//! [`ScriptedSensor`] replays a fixed obstacle sequence so tests can
//! place an obstacle on an exact movement attempt. [`CountingSensor`]
//! never detects anything but records how many trials were drawn.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rover_core::{ObstacleSensor, Orientation, Rover};

/// Sensor that answers from a script, one entry per movement attempt.
///
/// Once the script is exhausted every further attempt is clear.
/// The probability passed by the rover is ignored.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    script: VecDeque<bool>,
    attempts: Arc<AtomicUsize>,
}

impl ScriptedSensor {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Clear for `clear` attempts, then blocked once.
    pub fn blocked_after(clear: usize) -> Self {
        Self::new(std::iter::repeat_n(false, clear).chain(std::iter::once(true)))
    }

    /// Shared counter of attempts made so far. Stays valid after the
    /// sensor has been moved into a rover.
    pub fn attempts(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.attempts)
    }
}

impl ObstacleSensor for ScriptedSensor {
    fn detect(&mut self, _probability: f64) -> bool {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.script.pop_front().unwrap_or(false)
    }
}

/// Sensor that is always clear and counts how often it was asked.
#[derive(Debug, Clone, Default)]
pub struct CountingSensor {
    calls: Arc<AtomicUsize>,
}

impl CountingSensor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared call counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ObstacleSensor for CountingSensor {
    fn detect(&mut self, _probability: f64) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        false
    }
}

/// A rover at `(x, y)` facing `orientation` on the default grid, with no
/// obstacles.
pub fn rover_at(x: i64, y: i64, orientation: Orientation) -> Rover {
    Rover::builder()
        .position(x, y)
        .facing(orientation)
        .sensor(CountingSensor::new())
        .build()
}

/// A rover at the origin facing north that hits an obstacle on every
/// movement attempt.
pub fn always_blocked() -> Rover {
    Rover::builder()
        .obstacle_probability(1.0)
        .seed(0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_sensor_replays_then_clears() {
        let mut s = ScriptedSensor::new([true, false, true]);
        let seen: Vec<bool> = (0..5).map(|_| s.detect(0.5)).collect();
        assert_eq!(seen, vec![true, false, true, false, false]);
        assert_eq!(s.attempts().load(Ordering::SeqCst), 5);
    }

    #[test]
    fn blocked_after_places_single_obstacle() {
        let mut s = ScriptedSensor::blocked_after(2);
        let seen: Vec<bool> = (0..4).map(|_| s.detect(0.0)).collect();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn counting_sensor_counts_through_rover() {
        let sensor = CountingSensor::new();
        let calls = sensor.calls();
        let mut r = Rover::builder().sensor(sensor).build();
        r.execute_command_string("fflrb");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
