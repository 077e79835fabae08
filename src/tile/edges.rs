//! Edge extraction and membership sets
//!
//! Extracts the four border strings of a canonical grid together with their
//! reversals, keyed by [`EdgeLabel`]. The membership set answers matching
//! queries symmetrically: because both reading directions of every edge are
//! present, callers never need to reverse before comparing.

use crate::geometry::EdgeLabel;
use ndarray::Array2;
use std::collections::HashSet;

/// The eight edge readings of a canonical grid
///
/// Built once per tile at construction. The readings are addressed by
/// [`EdgeLabel`] for orientation queries and collected into a set for
/// membership tests.
#[derive(Clone, Debug)]
pub struct EdgeSet {
    by_label: [String; EdgeLabel::COUNT],
    members: HashSet<String>,
}

impl EdgeSet {
    /// Extract the edge readings of `grid`
    pub fn from_grid(grid: &Array2<u8>) -> Self {
        let (rows, cols) = grid.dim();

        let mut top = String::with_capacity(cols);
        let mut bottom = String::with_capacity(cols);
        let mut left = String::with_capacity(rows);
        let mut right = String::with_capacity(rows);

        for ((r, c), &cell) in grid.indexed_iter() {
            let ch = char::from(cell);
            if r == 0 {
                top.push(ch);
            }
            if r + 1 == rows {
                bottom.push(ch);
            }
            if c == 0 {
                left.push(ch);
            }
            if c + 1 == cols {
                right.push(ch);
            }
        }

        let by_label = [
            top.clone(),
            right.clone(),
            bottom.clone(),
            left.clone(),
            reversed(&top),
            reversed(&right),
            reversed(&bottom),
            reversed(&left),
        ];
        let members = by_label.iter().cloned().collect();

        Self { by_label, members }
    }

    /// The edge string for a symbolic reading
    pub fn of(&self, label: EdgeLabel) -> &str {
        self.by_label.get(label.index()).map_or("", String::as_str)
    }

    /// Whether `edge` matches any reading of this tile
    pub fn contains(&self, edge: &str) -> bool {
        self.members.contains(edge)
    }

    /// All readings as a set
    pub const fn members(&self) -> &HashSet<String> {
        &self.members
    }

    /// Readings present in both this set and `other`
    pub fn shared(&self, other: &Self) -> HashSet<String> {
        self.members.intersection(&other.members).cloned().collect()
    }
}

fn reversed(edge: &str) -> String {
    edge.chars().rev().collect()
}
