//! # wix-image-dl Library
//!
//! Fetches a single Wix site page, picks the content images out of its `<img>`
//! tags and saves them to a local directory.
//!
//! ## Features
//!
//! - **Lazy-load aware**: reads `src`, then `data-src`, then `data-cke-saved-src`
//! - **Content only**: keeps Wix media and common image extensions, drops icons, logos and sprites
//! - **Streaming writes**: image bodies go to disk in 8 KiB chunks
//! - **Contained failures**: one broken image never stops the run
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Scrape the default page into resources/images
//!     let report = wix_image_dl::harvest(wix_image_dl::HarvestConfig::default()).await?;
//!     println!("Downloaded {} images", report.downloaded());
//!     Ok(())
//! }
//! ```
//!
//! ## Observing Progress
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wix_image_dl::{HarvestConfig, HarvestEvent, HarvestOptions, DownloadOutcome};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = HarvestOptions {
//!         on_event: Some(Arc::new(|event: &HarvestEvent| {
//!             if let HarvestEvent::Finished(DownloadOutcome::Saved(record)) = event {
//!                 println!("Downloaded: {}", record.filename);
//!             }
//!         })),
//!         ..Default::default()
//!     };
//!     wix_image_dl::harvest_with_options(HarvestConfig::default(), options).await?;
//!     Ok(())
//! }
//! ```

use log::{debug, info};

pub use crate::core::config::HarvestConfig;
pub use crate::core::downloader::DownloadOutcome;
pub use crate::core::error::{Error, Result};
pub use crate::core::filter::Verdict;
pub use crate::core::report::{DownloadRecord, HarvestEvent, Report};
pub use crate::core::scanner::Candidate;
pub use crate::core::stream::{EventCallback, HarvestOptions, ProgressCallback};

pub mod core;

use crate::core::filter::classify_resolved;
use crate::core::{fetcher, scanner};

/// Run the whole pipeline with default options
///
/// Returns an error only when the run cannot start or the page cannot be
/// fetched. Per-image problems are counted in the returned [`Report`].
pub async fn harvest(config: HarvestConfig) -> Result<Report> {
    harvest_with_options(config, HarvestOptions::default()).await
}

/// Run the whole pipeline: fetch, scan, filter, download, report
pub async fn harvest_with_options(config: HarvestConfig, options: HarvestOptions) -> Result<Report> {
    config.validate()?;
    let base_url = config.base_url()?;

    tokio::fs::create_dir_all(&config.output_dir).await.map_err(|e| {
        Error::InvalidInput(format!(
            "cannot create output directory {}: {e}",
            config.output_dir.display()
        ))
    })?;

    let emit = |event: HarvestEvent| {
        if let Some(ref on_event) = options.on_event {
            on_event(&event);
        }
    };

    emit(HarvestEvent::Fetching { url: config.page_url.clone() });

    let client = fetcher::build_client(&config)?;
    let html = fetcher::fetch_page(&client, &config.page_url).await?;

    let candidates = scanner::scan(&html);
    info!("Found {} image candidates on {}", candidates.len(), config.page_url);
    emit(HarvestEvent::Scanned { candidates: candidates.len() });

    let downloader = crate::core::Downloader::new(client, base_url, &config.output_dir, options.chunk_size);
    let total = candidates.len() as u64;
    let mut report = Report::default();

    for (processed, candidate) in candidates.into_iter().enumerate() {
        // Reject patterns see the page origin too; nothing is requested here
        let reference = downloader.normalize(&candidate);
        match classify_resolved(&candidate.url, &reference) {
            Verdict::Accepted => {
                if options.dry_run {
                    match downloader.plan(&candidate) {
                        Ok((url, filename)) => emit(HarvestEvent::Planned {
                            candidate,
                            url: url.to_string(),
                            filename,
                        }),
                        Err(e) => emit(HarvestEvent::Finished(DownloadOutcome::Failed {
                            url: reference,
                            reason: e.to_string(),
                        })),
                    }
                } else {
                    let outcome = downloader.download(&candidate).await;
                    report.push(&outcome);
                    emit(HarvestEvent::Finished(outcome));
                }
            }
            verdict => {
                debug!("Ignoring {reference} ({verdict:?})");
                emit(HarvestEvent::Filtered { candidate, verdict });
            }
        }

        if let Some(ref progress) = options.progress {
            progress(processed as u64 + 1, total);
        }
    }

    info!(
        "Run finished: {} downloaded, {} skipped, {} failed",
        report.downloaded(),
        report.skipped,
        report.failed
    );
    Ok(report)
}
