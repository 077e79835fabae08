//! Compass sides of a square tile

use std::fmt;

/// One of the four sides of a square tile
///
/// The enumeration is closed, so callers cannot name a side outside the
/// north/east/south/west domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top row, read left to right
    North,
    /// Right column, read top to bottom
    East,
    /// Bottom row, read left to right
    South,
    /// Left column, read top to bottom
    West,
}

impl Side {
    /// Number of sides on a tile
    pub const COUNT: usize = 4;

    /// All sides in clockwise order starting at north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Position of this side in clockwise order starting at north
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// The side facing away from this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        write!(f, "{name}")
    }
}
