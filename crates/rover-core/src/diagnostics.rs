//! Construction-time corrections.
//!
//! Building a [`Rover`](crate::Rover) never fails. Each invalid input is
//! replaced by a safe default and recorded here as a [`Correction`], so
//! callers can inspect what was changed without parsing log output.

use crate::orientation::Orientation;
use std::fmt;

/// One input that was replaced during construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Correction {
    /// Grid width was non-positive or too large.
    GridWidth {
        /// The value supplied by the caller.
        requested: i64,
        /// The value used instead.
        applied: u32,
    },
    /// Grid height was non-positive or too large.
    GridHeight {
        /// The value supplied by the caller.
        requested: i64,
        /// The value used instead.
        applied: u32,
    },
    /// Starting `x` was outside `[0, width)` of the effective grid.
    X {
        /// The value supplied by the caller.
        requested: i64,
        /// Effective grid width the value was checked against.
        width: u32,
    },
    /// Starting `y` was outside `[0, height)` of the effective grid.
    Y {
        /// The value supplied by the caller.
        requested: i64,
        /// Effective grid height the value was checked against.
        height: u32,
    },
    /// Orientation symbol was not one of `N`, `E`, `S`, `W`.
    Orientation {
        /// The symbol supplied by the caller.
        requested: String,
    },
    /// Obstacle probability was NaN or outside `[0, 1]`.
    ObstacleProbability {
        /// The value supplied by the caller.
        requested: f64,
        /// The value used instead.
        applied: f64,
    },
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridWidth { requested, applied } => {
                write!(f, "grid width {requested} is invalid, using {applied}")
            }
            Self::GridHeight { requested, applied } => {
                write!(f, "grid height {requested} is invalid, using {applied}")
            }
            Self::X { requested, width } => {
                write!(f, "x = {requested} out of grid range [0, {width}), using x = 0")
            }
            Self::Y { requested, height } => {
                write!(f, "y = {requested} out of grid range [0, {height}), using y = 0")
            }
            Self::Orientation { requested } => write!(
                f,
                "unrecognized orientation {requested:?}, allowed orientations are [N, S, E, W], using N"
            ),
            Self::ObstacleProbability { requested, applied } => {
                write!(
                    f,
                    "obstacle probability {requested} outside [0, 1], using {applied}"
                )
            }
        }
    }
}

/// Ordered record of every [`Correction`] applied while building a rover.
///
/// Corrections appear in the order inputs are checked: grid width, grid
/// height, `x`, `y`, orientation, obstacle probability.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstructionDiagnostics {
    corrections: Vec<Correction>,
}

impl ConstructionDiagnostics {
    pub(crate) fn record(&mut self, correction: Correction) {
        tracing::warn!(%correction, "corrected rover construction input");
        self.corrections.push(correction);
    }

    /// `true` if every input was accepted as given.
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Number of corrections applied.
    pub fn len(&self) -> usize {
        self.corrections.len()
    }

    /// Same as [`is_clean`](Self::is_clean).
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// The corrections, in the order they were applied.
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    /// Human-readable warnings, one per correction.
    pub fn warnings(&self) -> Vec<String> {
        self.corrections.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_diagnostics_are_clean() {
        let d = ConstructionDiagnostics::default();
        assert!(d.is_clean());
        assert_eq!(d.len(), 0);
        assert!(d.warnings().is_empty());
    }

    #[test]
    fn record_preserves_order() {
        let mut d = ConstructionDiagnostics::default();
        d.record(Correction::GridWidth {
            requested: -1,
            applied: 100,
        });
        d.record(Correction::Orientation {
            requested: "A".into(),
        });
        assert_eq!(d.len(), 2);
        assert!(matches!(d.corrections()[0], Correction::GridWidth { .. }));
        assert!(matches!(d.corrections()[1], Correction::Orientation { .. }));
    }

    #[test]
    fn warnings_render_each_correction() {
        let mut d = ConstructionDiagnostics::default();
        d.record(Correction::X {
            requested: 333,
            width: 100,
        });
        assert_eq!(
            d.warnings(),
            vec!["x = 333 out of grid range [0, 100), using x = 0".to_string()]
        );
    }
}
