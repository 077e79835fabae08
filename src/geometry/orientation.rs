//! Orientation state and the edge identity permutation table
//!
//! A square tile has eight orientations: four clockwise quarter turns crossed
//! with an optional mirror. Rather than regenerating grid content to answer
//! edge queries, the permutation of edge identity under the dihedral group is
//! tabulated once as a constant and looked up per query.

use crate::geometry::side::Side;

/// Symbolic identity of one of the eight edge readings of a square grid
///
/// The four canonical readings are the top and bottom rows left to right and
/// the left and right columns top to bottom; the other four are their
/// reversals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// Top row of the canonical grid
    Top,
    /// Right column of the canonical grid
    Right,
    /// Bottom row of the canonical grid
    Bottom,
    /// Left column of the canonical grid
    Left,
    /// Top row, reversed
    TopRev,
    /// Right column, reversed
    RightRev,
    /// Bottom row, reversed
    BottomRev,
    /// Left column, reversed
    LeftRev,
}

impl EdgeLabel {
    /// Number of distinct edge readings
    pub const COUNT: usize = 8;

    /// Position of this label in canonical-then-reversed order
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
            Self::TopRev => 4,
            Self::RightRev => 5,
            Self::BottomRev => 6,
            Self::LeftRev => 7,
        }
    }

    /// The label for the same edge read in the opposite direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Top => Self::TopRev,
            Self::Right => Self::RightRev,
            Self::Bottom => Self::BottomRev,
            Self::Left => Self::LeftRev,
            Self::TopRev => Self::Top,
            Self::RightRev => Self::Right,
            Self::BottomRev => Self::Bottom,
            Self::LeftRev => Self::Left,
        }
    }
}

/// How edge identity permutes under quarter turns and mirroring
///
/// Rows are indexed by quarter-turn count. Columns 0-3 hold the labels on the
/// north, east, south, and west sides; columns 4-7 hold the same sides after
/// a mirror. Derived by tracking the canonical edges through one clockwise
/// quarter turn (north takes the reversed west edge, east takes the north
/// edge, south takes the reversed east edge, west takes the south edge) and
/// through one mirror (north and south reverse in place, east and west swap).
const EDGE_STATES: [[EdgeLabel; 8]; 4] = [
    [
        EdgeLabel::Top,
        EdgeLabel::Right,
        EdgeLabel::Bottom,
        EdgeLabel::Left,
        EdgeLabel::TopRev,
        EdgeLabel::Left,
        EdgeLabel::BottomRev,
        EdgeLabel::Right,
    ],
    [
        EdgeLabel::LeftRev,
        EdgeLabel::Top,
        EdgeLabel::RightRev,
        EdgeLabel::Bottom,
        EdgeLabel::Left,
        EdgeLabel::Bottom,
        EdgeLabel::Right,
        EdgeLabel::Top,
    ],
    [
        EdgeLabel::BottomRev,
        EdgeLabel::LeftRev,
        EdgeLabel::TopRev,
        EdgeLabel::RightRev,
        EdgeLabel::Bottom,
        EdgeLabel::RightRev,
        EdgeLabel::Top,
        EdgeLabel::LeftRev,
    ],
    [
        EdgeLabel::Right,
        EdgeLabel::BottomRev,
        EdgeLabel::Left,
        EdgeLabel::TopRev,
        EdgeLabel::RightRev,
        EdgeLabel::TopRev,
        EdgeLabel::LeftRev,
        EdgeLabel::BottomRev,
    ],
];

/// Orientation of a square tile: quarter-turn count plus mirror flag
///
/// The state is the sole representation of reorientation; grid content is
/// never mutated in place. All eight states map to distinct cache slots via
/// [`Orientation::slot`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    rotations: u8,
    flipped: bool,
}

impl Orientation {
    /// Number of distinct orientations
    pub const COUNT: usize = 8;

    /// The identity orientation: no turns, no mirror
    pub const CANONICAL: Self = Self {
        rotations: 0,
        flipped: false,
    };

    /// All orientations in arrangement-search order
    ///
    /// Four quarter turns, a mirror, then four more quarter turns: every
    /// combination is visited exactly once, so a search over this sequence is
    /// bounded by eight probes.
    pub const SEARCH_ORDER: [Self; 8] = [
        Self {
            rotations: 0,
            flipped: false,
        },
        Self {
            rotations: 1,
            flipped: false,
        },
        Self {
            rotations: 2,
            flipped: false,
        },
        Self {
            rotations: 3,
            flipped: false,
        },
        Self {
            rotations: 3,
            flipped: true,
        },
        Self {
            rotations: 0,
            flipped: true,
        },
        Self {
            rotations: 1,
            flipped: true,
        },
        Self {
            rotations: 2,
            flipped: true,
        },
    ];

    /// Build an orientation from a quarter-turn count and mirror flag
    ///
    /// The turn count wraps modulo four.
    pub const fn new(rotations: u8, flipped: bool) -> Self {
        Self {
            rotations: rotations % 4,
            flipped,
        }
    }

    /// Number of clockwise quarter turns applied, in `[0, 3]`
    pub const fn rotations(self) -> u8 {
        self.rotations
    }

    /// Whether a mirror is applied after rotation
    pub const fn is_flipped(self) -> bool {
        self.flipped
    }

    /// This orientation advanced by one clockwise quarter turn
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            rotations: (self.rotations + 1) % 4,
            flipped: self.flipped,
        }
    }

    /// This orientation with the mirror flag toggled
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            rotations: self.rotations,
            flipped: !self.flipped,
        }
    }

    /// Cache slot for this orientation, unique within `[0, 8)`
    pub const fn slot(self) -> usize {
        self.rotations as usize * 2 + self.flipped as usize
    }

    /// Which edge reading sits on `side` under this orientation
    ///
    /// A pure table lookup; never touches grid content.
    pub fn edge_label(self, side: Side) -> EdgeLabel {
        let offset = if self.flipped {
            side.index() + Side::COUNT
        } else {
            side.index()
        };

        EDGE_STATES
            .get(usize::from(self.rotations))
            .and_then(|row| row.get(offset))
            .copied()
            .unwrap_or(EdgeLabel::Top)
    }
}
