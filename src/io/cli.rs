//! Command-line interface for batch tile edge analysis
//!
//! Processes puzzle input files into edge reports: the canonical border
//! strings of every tile, the neighbor candidates discovered through shared
//! edges, and the corner candidates among them.

use crate::geometry::Side;
use crate::io::configuration::{CORNER_NEIGHBOR_COUNT, INPUT_EXTENSION, REPORT_SUFFIX};
use crate::io::error::{Result, file_system, malformed_input};
use crate::io::parser::load_tiles;
use crate::io::progress::ProgressManager;
use crate::tile::OrientedTile;
use clap::Parser;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jigtile")]
#[command(
    author,
    version,
    about = "Analyze edge matches between square puzzle tiles"
)]
/// Command-line arguments for the tile analysis tool
pub struct Cli {
    /// Input puzzle file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a report exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing report files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, parsing, or report writing
    /// fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }
            Self::process_file(file)?;
            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(malformed_input(&"Target file must be a .txt puzzle input"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(&self.cli.target)
                .map_err(|source| file_system(&self.cli.target, "read_dir", source))?
            {
                let path = entry
                    .map_err(|source| file_system(&self.cli.target, "read_dir", source))?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some(INPUT_EXTENSION)
                    && !Self::is_report(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(malformed_input(
                &"Target must be a puzzle input file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let report_path = Self::report_path(input_path);
        if report_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (report exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(input_path: &Path) -> Result<()> {
        let tiles = load_tiles(input_path)?;
        let report = edge_report(&tiles);
        let report_path = Self::report_path(input_path);

        fs::write(&report_path, report).map_err(|source| file_system(&report_path, "write", source))
    }

    // Reports share the input extension; never treat them as puzzle inputs
    fn is_report(path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with(REPORT_SUFFIX))
    }

    fn report_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let report_name = format!("{}{REPORT_SUFFIX}.txt", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(report_name)
        } else {
            PathBuf::from(report_name)
        }
    }
}

/// Render the edge and neighbor report for a parsed tile set
///
/// Lists each tile's canonical border strings and the identifiers of tiles
/// sharing at least one edge reading, then the corner candidates: tiles with
/// exactly two neighbor candidates.
pub fn edge_report(tiles: &[OrientedTile]) -> String {
    let mut report = String::new();
    let mut corner_ids = Vec::new();

    for tile in tiles {
        let mut neighbor_ids: Vec<u64> = tiles
            .iter()
            .filter(|other| tile.shares_edge_with(other))
            .map(OrientedTile::id)
            .collect();
        neighbor_ids.sort_unstable();

        if neighbor_ids.len() == CORNER_NEIGHBOR_COUNT {
            corner_ids.push(tile.id());
        }

        let _ = writeln!(report, "Tile {}:", tile.id());
        let _ = writeln!(report, "  north: {}", tile.edge_at(Side::North));
        let _ = writeln!(report, "  east:  {}", tile.edge_at(Side::East));
        let _ = writeln!(report, "  south: {}", tile.edge_at(Side::South));
        let _ = writeln!(report, "  west:  {}", tile.edge_at(Side::West));
        let _ = writeln!(report, "  neighbors: {}", join_ids(&neighbor_ids));
        let _ = writeln!(report);
    }

    corner_ids.sort_unstable();
    let _ = writeln!(report, "corner candidates: {}", join_ids(&corner_ids));

    report
}

fn join_ids(ids: &[u64]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }

    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
