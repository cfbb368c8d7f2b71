//! Compass orientation and its cyclic turn order.

use std::fmt;

/// The direction a rover is facing.
///
/// Orientations form the cycle `N -> E -> S -> W -> N`. Turning right
/// advances one step along the cycle, turning left steps back.
///
/// The grid's `y` axis grows northwards and `x` grows eastwards, so
/// [`forward_offset`](Orientation::forward_offset) of `North` is `(0, +1)`.
///
/// # Examples
///
/// ```
/// use rover_core::Orientation;
///
/// assert_eq!(Orientation::North.turn_left(), Orientation::West);
/// assert_eq!(Orientation::West.turn_right(), Orientation::North);
/// assert_eq!(Orientation::from_symbol('E'), Some(Orientation::East));
/// assert_eq!(Orientation::from_symbol('A'), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Facing north (`y + 1` when moving forward).
    #[default]
    North = 0,
    /// Facing east (`x + 1` when moving forward).
    East = 1,
    /// Facing south (`y - 1` when moving forward).
    South = 2,
    /// Facing west (`x - 1` when moving forward).
    West = 3,
}

impl Orientation {
    /// All orientations in cyclic (clockwise) order, starting at north.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Parse a single-letter compass symbol (`N`, `E`, `S`, `W`).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Parse a compass symbol given as a string. Only exact one-letter
    /// symbols are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }

    /// The single-letter symbol for this orientation.
    pub fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Predecessor in the cycle (`N` wraps to `W`).
    pub fn turn_left(self) -> Self {
        Self::ALL[(self as usize + 3) % 4]
    }

    /// Successor in the cycle (`W` wraps to `N`).
    pub fn turn_right(self) -> Self {
        Self::ALL[(self as usize + 1) % 4]
    }

    /// The `(dx, dy)` unit displacement of a forward move.
    pub fn forward_offset(self) -> (i64, i64) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
