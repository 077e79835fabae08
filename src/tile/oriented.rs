//! The oriented tile core type
//!
//! An [`OrientedTile`] owns an immutable canonical grid plus a small mutable
//! orientation state. Reorientation never rewrites grid content; edge queries
//! go through the permutation table, and full grid content is materialized
//! lazily per orientation and memoized.

use crate::geometry::{Orientation, Side};
use crate::io::error::{Result, TileError};
use crate::tile::cache::{CacheStats, OrientationCache};
use crate::tile::edges::EdgeSet;
use ndarray::{Array2, s};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A square puzzle tile with reorientable edges
///
/// The canonical grid supplied at construction never mutates; rotation and
/// flipping are tracked as an [`Orientation`] and applied on demand. Callers
/// are expected to supply well-formed square content (the parser in
/// [`crate::io::parser`] validates raw input before construction).
#[derive(Clone, Debug)]
pub struct OrientedTile {
    id: u64,
    base: Array2<u8>,
    orientation: Orientation,
    edges: EdgeSet,
    cache: OrientationCache,
    char_counts: Option<HashMap<u8, usize>>,
}

impl OrientedTile {
    /// Create a tile from its canonical grid
    ///
    /// Extracts the edge readings and seeds the materialization cache with
    /// the canonical orientation.
    pub fn new(id: u64, base: Array2<u8>) -> Self {
        let edges = EdgeSet::from_grid(&base);
        let mut cache = OrientationCache::new();
        cache.prime(Orientation::CANONICAL, base.clone());

        Self {
            id,
            base,
            orientation: Orientation::CANONICAL,
            edges,
            cache,
            char_counts: None,
        }
    }

    /// Identifier assigned at construction
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Current orientation state
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Side length of the square grid
    pub fn dimension(&self) -> usize {
        self.base.nrows()
    }

    /// The edge string currently on `side`
    ///
    /// A pure query through the edge permutation table; never mutates
    /// orientation state or grid content.
    pub fn edge_at(&self, side: Side) -> &str {
        self.edges.of(self.orientation.edge_label(side))
    }

    /// All eight edge readings: the four canonical borders and their reversals
    ///
    /// Used for matching tests only; membership is symmetric because both
    /// reading directions of every edge are present.
    pub const fn all_edges(&self) -> &HashSet<String> {
        self.edges.members()
    }

    /// Whether `edge` appears on this tile in any orientation
    pub fn has_edge(&self, edge: &str) -> bool {
        self.edges.contains(edge)
    }

    /// Edge readings common to this tile and `other`
    pub fn shared_edges(&self, other: &Self) -> HashSet<String> {
        self.edges.shared(&other.edges)
    }

    /// Whether this tile and a distinct `other` share at least one edge
    ///
    /// Tiles are distinguished by identifier, so a tile never neighbors
    /// itself.
    pub fn shares_edge_with(&self, other: &Self) -> bool {
        self.id != other.id && !self.shared_edges(other).is_empty()
    }

    /// Advance the orientation by one clockwise quarter turn
    pub const fn rotate(&mut self) {
        self.orientation = self.orientation.rotated();
    }

    /// Toggle the mirror flag
    pub const fn flip(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Reorient the tile so that `edge_at(side)` equals `edge`
    ///
    /// Probes the eight orientations in [`Orientation::SEARCH_ORDER`],
    /// stopping at the first match. On success the tile is left in the
    /// matching orientation.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::EdgeNotFound`] without observable orientation
    /// mutation when `edge` is absent from [`OrientedTile::all_edges`]; this
    /// is the expected outcome for non-matching candidates during placement
    /// search. Returns [`TileError::OrientationExhausted`] if no orientation
    /// matches despite the edge being present, which indicates an internal
    /// inconsistency between the permutation table and the edge readings.
    pub fn arrange(&mut self, side: Side, edge: &str) -> Result<()> {
        if !self.has_edge(edge) {
            return Err(TileError::EdgeNotFound {
                tile_id: self.id,
                edge: edge.to_owned(),
            });
        }

        for orientation in Orientation::SEARCH_ORDER {
            self.orientation = orientation;
            if self.edge_at(side) == edge {
                return Ok(());
            }
        }

        Err(TileError::OrientationExhausted {
            tile_id: self.id,
            side,
            edge: edge.to_owned(),
        })
    }

    /// Grid content under the current orientation
    ///
    /// Returns the cached grid when the orientation has been materialized
    /// before; otherwise applies the quarter turns and mirror to the
    /// canonical grid and memoizes the result. The borders of the returned
    /// grid always agree with [`OrientedTile::edge_at`] for the same
    /// orientation.
    pub fn materialize(&mut self) -> &Array2<u8> {
        let base = &self.base;
        let orientation = self.orientation;

        self.cache
            .get_or_materialize(orientation, || materialized(base, orientation))
            .unwrap_or(base)
    }

    /// Materialized rows as strings
    pub fn to_rows(&mut self) -> Vec<String> {
        self.materialize()
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&cell| char::from(cell)).collect())
            .collect()
    }

    /// Materialized content with the outer border ring removed
    ///
    /// For an N-by-N tile this is the central (N-2)-by-(N-2) region; grids
    /// smaller than 2-by-2 yield an empty result. A pure derived view: reads
    /// the cache when the current orientation is already materialized but
    /// never populates it.
    pub fn inner_content(&self) -> Array2<u8> {
        match self.cache.get(self.orientation) {
            Some(cached) => strip_border(cached),
            None => strip_border(&materialized(&self.base, self.orientation)),
        }
    }

    /// Occurrences of `ch` in the canonical grid
    ///
    /// Rotation and flipping permute cells without changing them, so the
    /// count holds for every orientation. The full character histogram is
    /// computed on first use and memoized.
    pub fn count_char(&mut self, ch: char) -> usize {
        let base = &self.base;
        let counts = self.char_counts.get_or_insert_with(|| {
            let mut histogram = HashMap::new();
            for &cell in base {
                *histogram.entry(cell).or_insert(0) += 1;
            }
            histogram
        });

        u8::try_from(u32::from(ch))
            .ok()
            .map_or(0, |byte| counts.get(&byte).copied().unwrap_or(0))
    }

    /// Cache performance counters for the materialization cache
    pub const fn cache_stats(&self) -> &CacheStats {
        &self.cache.stats
    }
}

impl fmt::Display for OrientedTile {
    /// Renders the materialized grid, one row per line, reading but never
    /// populating the cache
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let computed;
        let grid = match self.cache.get(self.orientation) {
            Some(cached) => cached,
            None => {
                computed = materialized(&self.base, self.orientation);
                &computed
            }
        };

        let mut first = true;
        for row in grid.rows() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            for &cell in row {
                write!(f, "{}", char::from(cell))?;
            }
        }
        Ok(())
    }
}

/// Remove the outer ring of cells from a grid
fn strip_border(grid: &Array2<u8>) -> Array2<u8> {
    let (rows, cols) = grid.dim();

    if rows < 2 || cols < 2 {
        return Array2::from_elem((0, 0), 0);
    }

    grid.slice(s![1..rows - 1, 1..cols - 1]).to_owned()
}

/// Apply an orientation to a canonical grid
///
/// A clockwise quarter turn transposes the grid and reverses each resulting
/// row; the mirror reverses each row of the rotated grid.
fn materialized(base: &Array2<u8>, orientation: Orientation) -> Array2<u8> {
    let mut grid = base.clone();

    for _ in 0..orientation.rotations() {
        grid = grid.t().slice(s![.., ..;-1]).to_owned();
    }

    if orientation.is_flipped() {
        grid = grid.slice(s![.., ..;-1]).to_owned();
    }

    grid
}
