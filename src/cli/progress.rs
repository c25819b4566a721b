//! CLI-specific progress handling for wix-image-dl
//!
//! Provides the progress bar shown on stderr while candidates are processed.

use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar counting processed image candidates
pub fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} images {msg}")
            .expect("Failed to create progress style")
            .progress_chars("#>-")
    );
    pb
}

/// Progress manager for a harvest run
pub struct ProgressManager {
    pub pb: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager; the length is set once the page is scanned
    pub fn new(total: u64) -> Self {
        Self {
            pb: create_progress_bar(total),
        }
    }

    /// Print a line to stdout without tearing the bar
    pub fn println(&self, line: &str) {
        self.pb.suspend(|| println!("{line}"));
    }

    /// Remove the bar, whether or not the run got to the end
    pub fn finish(&self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }

    /// Update position and length from a progress callback
    pub fn update(&self, processed: u64, total: u64) {
        if self.pb.length().unwrap_or(0) != total {
            self.pb.set_length(total);
        }
        self.pb.set_position(processed);
        if processed >= total {
            self.pb.finish_and_clear();
        }
    }
}
