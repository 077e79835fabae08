//! Batch progress display for puzzle file processing

use crate::io::configuration::MIN_FILES_FOR_PROGRESS;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display across a batch of puzzle input files
///
/// Shows a bar only when more than one file is queued.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the progress bar based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count < MIN_FILES_FOR_PROGRESS {
            return;
        }

        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(FILE_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark one file as completed
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All files processed");
        }
    }
}
