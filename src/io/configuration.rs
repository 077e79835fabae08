//! Parser limits and report output settings

// Safety limit to prevent excessive memory allocation
/// Maximum allowed tile side length
pub const MAX_TILE_DIMENSION: usize = 10_000;

/// Extension of puzzle input files
pub const INPUT_EXTENSION: &str = "txt";

// Output settings
/// Suffix added to report filenames
pub const REPORT_SUFFIX: &str = "_edges";

// Progress bar display settings
/// Minimum file count before a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;

// A tile on the corner of the assembled image borders exactly two others
/// Neighbor-candidate count that marks a corner candidate
pub const CORNER_NEIGHBOR_COUNT: usize = 2;
