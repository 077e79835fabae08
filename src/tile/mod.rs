//! Oriented tile state and materialization
//!
//! This module contains the tile core:
//! - Edge extraction and membership sets
//! - The orientation-keyed materialization cache
//! - The oriented tile type itself

/// Orientation-keyed materialization cache
pub mod cache;
/// Edge extraction and membership sets
pub mod edges;
/// The oriented tile core type
pub mod oriented;

pub use oriented::OrientedTile;
