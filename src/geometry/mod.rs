//! Square tile geometry
//!
//! This module contains the orientation model for square tiles:
//! - Compass sides and their indexing
//! - Orientation state (quarter turns plus mirror flag)
//! - The closed-form permutation of edge identity under reorientation

/// Orientation state and the edge identity permutation table
pub mod orientation;
/// Compass sides of a square tile
pub mod side;

pub use orientation::{EdgeLabel, Orientation};
pub use side::Side;
