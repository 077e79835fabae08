//! Validates puzzle text parsing, validation failures, and report generation

use jigtile::TileError;
use jigtile::geometry::Side;
use jigtile::io::cli::{Cli, FileProcessor, edge_report};
use jigtile::io::parser::{load_tiles, parse_tile, parse_tiles};
use std::fs;
use std::path::PathBuf;

const SAMPLE_TILE: &str = "\
Tile 2311:
..##.#..#.
##..#.....
#...##..#.
####.#...#
##.##.###.
##...#.###
.#.#.#..##
..#....#..
###...#.#.
..###..###";

#[test]
fn test_parse_single_tile() {
    let tile = parse_tile(SAMPLE_TILE).unwrap();

    assert_eq!(tile.id(), 2311);
    assert_eq!(tile.dimension(), 10);
    assert_eq!(tile.edge_at(Side::North), "..##.#..#.");
    assert_eq!(tile.edge_at(Side::South), "..###..###");
    assert_eq!(tile.edge_at(Side::West), ".#####..#.");
    assert_eq!(tile.edge_at(Side::East), "...#.##..#");
}

#[test]
fn test_parse_multiple_blocks() {
    let input = "Tile 1:\nab\ncd\n\nTile 2:\nef\ngh\n\n\nTile 3:\nij\nkl\n";
    let tiles = parse_tiles(input).unwrap();

    let ids: Vec<u64> = tiles.iter().map(jigtile::OrientedTile::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_parse_tolerates_crlf_line_endings() {
    let input = "Tile 1:\r\nab\r\ncd\r\n\r\nTile 2:\r\nef\r\ngh\r\n";
    let tiles = parse_tiles(input).unwrap();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles.first().unwrap().edge_at(Side::North), "ab");
}

#[test]
fn test_parse_rejects_bad_headers() {
    assert!(matches!(
        parse_tile("2311:\nab\ncd"),
        Err(TileError::MalformedInput { .. })
    ));
    assert!(matches!(
        parse_tile("Tile 2311\nab\ncd"),
        Err(TileError::MalformedInput { .. })
    ));
    assert!(matches!(
        parse_tile("Tile abc:\nab\ncd"),
        Err(TileError::MalformedInput { .. })
    ));
}

#[test]
fn test_parse_rejects_missing_rows() {
    let err = parse_tile("Tile 5:").unwrap_err();
    assert!(err.to_string().contains("no rows"));
}

#[test]
fn test_parse_rejects_ragged_rows() {
    let err = parse_tile("Tile 5:\nabc\nde\nfgh").unwrap_err();
    assert!(matches!(err, TileError::MalformedInput { .. }));
    assert!(err.to_string().contains("differing lengths"));
}

#[test]
fn test_parse_rejects_non_square_grids() {
    let err = parse_tile("Tile 5:\nabc\ndef").unwrap_err();
    match err {
        TileError::NonSquareTile { id, rows, cols } => {
            assert_eq!(id, 5);
            assert_eq!(rows, 2);
            assert_eq!(cols, 3);
        }
        other => panic!("Expected NonSquareTile, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_non_ascii_content() {
    let err = parse_tile("Tile 5:\nλμ\nνξ").unwrap_err();
    assert!(err.to_string().contains("non-ASCII"));
}

#[test]
fn test_load_tiles_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("puzzle.txt");
    fs::write(&path, SAMPLE_TILE).unwrap();

    let tiles = load_tiles(&path).unwrap();
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles.first().unwrap().id(), 2311);
}

#[test]
fn test_load_tiles_missing_file() {
    let err = load_tiles(&PathBuf::from("/nonexistent/puzzle.txt")).unwrap_err();
    match err {
        TileError::FileSystem { operation, .. } => assert_eq!(operation, "read"),
        other => panic!("Expected FileSystem, got {other:?}"),
    }
}

// A 2x2 arrangement: every tile borders exactly two others, so all four are
// corner candidates
fn quartet_input() -> &'static str {
    "Tile 1:\nabc\ndef\nghi\n\n\
     Tile 2:\ncjk\nflm\nino\n\n\
     Tile 3:\nghi\nqrs\ntuv\n\n\
     Tile 4:\nino\nsxy\nvwz\n"
}

#[test]
fn test_edge_report_lists_neighbors_and_corners() {
    let tiles = parse_tiles(quartet_input()).unwrap();
    let report = edge_report(&tiles);

    assert!(report.contains("Tile 1:"));
    assert!(report.contains("  north: abc"));
    assert!(report.contains("  neighbors: 2 3"));
    assert!(report.contains("corner candidates: 1 2 3 4"));
}

#[test]
fn test_edge_report_marks_isolated_tiles() {
    let tiles = parse_tiles("Tile 9:\nab\ncd\n").unwrap();
    let report = edge_report(&tiles);

    assert!(report.contains("  neighbors: none"));
    assert!(report.contains("corner candidates: none"));
}

#[test]
fn test_file_processor_writes_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("puzzle.txt");
    fs::write(&input_path, quartet_input()).unwrap();

    let cli = Cli {
        target: dir.path().to_path_buf(),
        quiet: true,
        no_skip: false,
    };
    FileProcessor::new(cli).process().unwrap();

    let report_path = dir.path().join("puzzle_edges.txt");
    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("corner candidates: 1 2 3 4"));
}

#[test]
fn test_file_processor_skips_existing_reports() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("puzzle.txt");
    fs::write(&input_path, quartet_input()).unwrap();

    let report_path = dir.path().join("puzzle_edges.txt");
    fs::write(&report_path, "sentinel").unwrap();

    let cli = Cli {
        target: input_path,
        quiet: true,
        no_skip: false,
    };
    FileProcessor::new(cli).process().unwrap();

    assert_eq!(
        fs::read_to_string(&report_path).unwrap(),
        "sentinel",
        "Existing reports must be left untouched without --no-skip"
    );
}

#[test]
fn test_file_processor_rewrites_with_no_skip() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("puzzle.txt");
    fs::write(&input_path, quartet_input()).unwrap();

    let report_path = dir.path().join("puzzle_edges.txt");
    fs::write(&report_path, "sentinel").unwrap();

    let cli = Cli {
        target: input_path,
        quiet: true,
        no_skip: true,
    };
    FileProcessor::new(cli).process().unwrap();

    assert!(
        fs::read_to_string(&report_path)
            .unwrap()
            .contains("corner candidates"),
    );
}

#[test]
fn test_file_processor_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("puzzle.dat");
    fs::write(&input_path, quartet_input()).unwrap();

    let cli = Cli {
        target: input_path,
        quiet: true,
        no_skip: false,
    };
    let err = FileProcessor::new(cli).process().unwrap_err();
    assert!(matches!(err, TileError::MalformedInput { .. }));
}
