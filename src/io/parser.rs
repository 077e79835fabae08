//! Puzzle tile text parsing
//!
//! Parses the `Tile <id>:` block format: a header line followed by the grid
//! rows, blocks separated by blank lines. All input validation lives here;
//! the tile core assumes well-formed square content.

use crate::io::configuration::MAX_TILE_DIMENSION;
use crate::io::error::{Result, TileError, file_system, malformed_input};
use crate::tile::OrientedTile;
use ndarray::Array2;
use std::fs;
use std::path::Path;

/// Parse every tile block in `input`
///
/// Blocks are separated by one or more blank lines; surrounding whitespace
/// and CRLF line endings are tolerated.
///
/// # Errors
///
/// Returns the first validation failure encountered across the blocks.
pub fn parse_tiles(input: &str) -> Result<Vec<OrientedTile>> {
    let normalized = input.replace("\r\n", "\n");

    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(parse_tile)
        .collect()
}

/// Parse a single `Tile <id>:` block
///
/// # Errors
///
/// Returns [`TileError::MalformedInput`] for a bad header, a non-numeric
/// identifier, missing rows, non-ASCII content, or rows of differing
/// lengths; [`TileError::NonSquareTile`] when the row count and row length
/// disagree; [`TileError::TileTooLarge`] past the dimension safety limit.
pub fn parse_tile(block: &str) -> Result<OrientedTile> {
    let mut lines = block.lines();
    let header = lines
        .next()
        .ok_or_else(|| malformed_input(&"empty tile block"))?;
    let id = parse_header(header)?;

    let rows: Vec<&str> = lines.map(str::trim_end).collect();
    if rows.is_empty() {
        return Err(malformed_input(&format!("tile {id} has no rows")));
    }

    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());

    for row in &rows {
        if !row.is_ascii() {
            return Err(malformed_input(&format!(
                "tile {id} contains non-ASCII characters"
            )));
        }
        if row.len() != width {
            return Err(malformed_input(&format!(
                "tile {id} has rows of differing lengths"
            )));
        }
    }

    if height != width {
        return Err(TileError::NonSquareTile {
            id,
            rows: height,
            cols: width,
        });
    }
    if height > MAX_TILE_DIMENSION {
        return Err(TileError::TileTooLarge {
            id,
            dimension: height,
        });
    }

    let cells: Vec<u8> = rows.iter().flat_map(|row| row.bytes()).collect();
    let grid = Array2::from_shape_vec((height, width), cells)
        .map_err(|err| malformed_input(&format!("tile {id}: {err}")))?;

    Ok(OrientedTile::new(id, grid))
}

/// Load and parse every tile in the file at `path`
///
/// # Errors
///
/// Returns [`TileError::FileSystem`] when the file cannot be read, or any
/// parse failure from [`parse_tiles`].
pub fn load_tiles(path: &Path) -> Result<Vec<OrientedTile>> {
    let input = fs::read_to_string(path).map_err(|source| file_system(path, "read", source))?;
    parse_tiles(&input)
}

fn parse_header(header: &str) -> Result<u64> {
    let id_text = header
        .strip_prefix("Tile ")
        .and_then(|rest| rest.strip_suffix(':'))
        .ok_or_else(|| malformed_input(&format!("invalid tile header '{header}'")))?;

    id_text
        .trim()
        .parse()
        .map_err(|err| malformed_input(&format!("invalid tile id '{id_text}': {err}")))
}
