//! Run reporting for wix-image-dl

use serde::{Deserialize, Serialize};

use crate::core::downloader::DownloadOutcome;
use crate::core::filter::Verdict;
use crate::core::scanner::Candidate;

/// A successfully written image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Name of the file inside the output directory
    pub filename: String,

    /// Absolute URL the image was fetched from
    pub source_url: String,
}

/// Something worth telling the user about while a run is in progress
#[derive(Debug, Clone)]
pub enum HarvestEvent {
    /// The page fetch is about to start
    Fetching { url: String },
    /// The page was scanned
    Scanned { candidates: usize },
    /// A candidate was dropped by the filter before any request
    Filtered { candidate: Candidate, verdict: Verdict },
    /// Dry run: what would have been downloaded
    Planned { candidate: Candidate, url: String, filename: String },
    /// A download attempt finished
    Finished(DownloadOutcome),
}

/// Accumulated result of a run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// Saved images in discovery order; same-named files appear once per write
    pub records: Vec<DownloadRecord>,

    /// Images the server did not answer with 200
    pub skipped: usize,

    /// Images that failed to resolve, download or write
    pub failed: usize,
}

impl Report {
    /// Fold one download outcome into the report
    pub fn push(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Saved(record) => self.records.push(record.clone()),
            DownloadOutcome::Skipped { .. } => self.skipped += 1,
            DownloadOutcome::Failed { .. } => self.failed += 1,
        }
    }

    /// Number of images written
    pub fn downloaded(&self) -> usize {
        self.records.len()
    }

    /// Final summary as printed by the CLI
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.records.len() + 2);
        lines.push(format!("\nDownloaded {} images!", self.downloaded()));
        lines.push("\nDownloaded files:".to_string());
        lines.extend(self.records.iter().map(|r| format!("  - {}", r.filename)));
        lines
    }

    /// Records as pretty-printed JSON
    pub fn to_manifest_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}
