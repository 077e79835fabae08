//! Orientation-keyed materialization cache
//!
//! The orientation key space is exactly eight values, so cached grids live in
//! a fixed array of optional slots indexed by [`Orientation::slot`] rather
//! than a hash map. Entries are never evicted.

use crate::geometry::Orientation;
use ndarray::Array2;

/// Memoization cache for materialized grid orientations
///
/// Stores previously computed orientations of a tile's grid so repeated
/// queries during placement search stay cheap.
#[derive(Clone, Debug, Default)]
pub struct OrientationCache {
    slots: [Option<Array2<u8>>; Orientation::COUNT],

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Clone, Debug, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl OrientationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a grid for an orientation without touching the statistics
    ///
    /// Used to seed the canonical materialization at tile construction.
    pub fn prime(&mut self, orientation: Orientation, grid: Array2<u8>) {
        if let Some(entry) = self.slots.get_mut(orientation.slot()) {
            *entry = Some(grid);
        }
    }

    /// Whether a grid is cached for `orientation`
    pub fn contains(&self, orientation: Orientation) -> bool {
        self.slots
            .get(orientation.slot())
            .is_some_and(Option::is_some)
    }

    /// The cached grid for `orientation`, if one has been materialized
    pub fn get(&self, orientation: Orientation) -> Option<&Array2<u8>> {
        self.slots.get(orientation.slot()).and_then(Option::as_ref)
    }

    /// Retrieve the cached grid or compute and store a new one
    ///
    /// Runs the provided closure only when the orientation's slot is cold.
    pub fn get_or_materialize<F>(&mut self, orientation: Orientation, compute: F) -> Option<&Array2<u8>>
    where
        F: FnOnce() -> Array2<u8>,
    {
        let slot = orientation.slot();

        if self.slots.get(slot).is_some_and(Option::is_some) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            if let Some(entry) = self.slots.get_mut(slot) {
                *entry = Some(compute());
            }
        }

        self.slots.get(slot).and_then(Option::as_ref)
    }
}
