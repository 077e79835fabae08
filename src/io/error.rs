//! Error types for tile parsing and arrangement
//!
//! Side identifiers are a closed enum ([`crate::geometry::Side`]), so the
//! invalid-side class of caller errors cannot occur at this boundary and has
//! no variant here.

use crate::geometry::Side;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile operations
#[derive(Debug)]
pub enum TileError {
    /// File system operation on a puzzle input or report failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Puzzle text doesn't match the expected tile block format
    MalformedInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Tile grid is not square
    NonSquareTile {
        /// Identifier of the offending tile
        id: u64,
        /// Number of rows in the grid
        rows: usize,
        /// Number of columns in the grid
        cols: usize,
    },

    /// Tile dimension exceeds the configured safety limit
    TileTooLarge {
        /// Identifier of the offending tile
        id: u64,
        /// Side length of the tile
        dimension: usize,
    },

    /// Arrangement requested for an edge absent from the tile
    ///
    /// An expected, recoverable outcome during placement search: callers try
    /// candidate tiles against a border and most will not match.
    EdgeNotFound {
        /// Identifier of the tile being arranged
        tile_id: u64,
        /// The edge string that was requested
        edge: String,
    },

    /// Orientation search exhausted despite the edge being present
    ///
    /// Indicates an inconsistency between the edge permutation table and the
    /// extracted edge readings, not a normal runtime condition.
    OrientationExhausted {
        /// Identifier of the tile being arranged
        tile_id: u64,
        /// Side the edge was requested on
        side: Side,
        /// The edge string that was requested
        edge: String,
    },
}

impl TileError {
    /// Whether this is the recoverable no-match outcome of an arrangement
    pub const fn is_edge_not_found(&self) -> bool {
        matches!(self, Self::EdgeNotFound { .. })
    }
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MalformedInput { reason } => {
                write!(f, "Malformed puzzle input: {reason}")
            }
            Self::NonSquareTile { id, rows, cols } => {
                write!(f, "Tile {id} is not square ({rows}x{cols})")
            }
            Self::TileTooLarge { id, dimension } => {
                write!(f, "Tile {id} dimension {dimension} exceeds the safety limit")
            }
            Self::EdgeNotFound { tile_id, edge } => {
                write!(f, "Tile {tile_id} has no edge '{edge}' in any orientation")
            }
            Self::OrientationExhausted {
                tile_id,
                side,
                edge,
            } => {
                write!(
                    f,
                    "Tile {tile_id}: no orientation places edge '{edge}' on the {side} side despite the edge being present"
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile operation results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a malformed input error
pub fn malformed_input(reason: &impl ToString) -> TileError {
    TileError::MalformedInput {
        reason: reason.to_string(),
    }
}

/// Create a file system error with path and operation context
pub fn file_system(
    path: &std::path::Path,
    operation: &'static str,
    source: std::io::Error,
) -> TileError {
    TileError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
