//! # wix-image-dl CLI
//!
//! Command-line interface for the wix-image-dl library.
//! Run without arguments it scrapes the Brickyard Kennels site into `resources/images`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use wix_image_dl::core::config::{
    DEFAULT_OUTPUT_DIR, DEFAULT_PAGE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use wix_image_dl::{DownloadOutcome, HarvestConfig, HarvestEvent, HarvestOptions};

mod cli;

/// Command-line interface for wix-image-dl
#[derive(Parser, Debug)]
#[command(name = "wix-image-dl")]
#[command(about = "Download the content images of a Wix site page")]
#[command(long_about = "Fetches one page, keeps the <img> sources that look like content images
and saves them to a local directory:
  wix-image-dl                                # Brickyard Kennels into resources/images
  wix-image-dl https://example.wixsite.com/x  # Another Wix page
  wix-image-dl --dry-run                      # List what would be downloaded

Icons, logos and sprites are always skipped. Files with the same name are overwritten.")]
#[command(version = env!("WIX_IMAGE_DL_VERSION"))]
struct Cli {
    /// Page to scan for images
    #[arg(default_value = DEFAULT_PAGE_URL)]
    url: String,

    /// Directory the images are written into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Show what would be downloaded without downloading
    #[arg(long)]
    dry_run: bool,

    /// Write the downloaded files and their source URLs as JSON to this path
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> HarvestConfig {
        HarvestConfig {
            page_url: self.url.clone(),
            output_dir: self.output_dir.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);
    if cli.verbose {
        builder.filter_module("wix_image_dl", LevelFilter::Debug);
    }
    builder.init();

    // A failed run is reported on stdout; the exit status stays 0
    if let Err(e) = run(cli).await {
        println!("Error: {e:#}");
        if needs_install_hint(&e) {
            print_install_hint();
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.verbose {
        eprintln!("wix-image-dl v{} starting...", env!("WIX_IMAGE_DL_VERSION"));
    }

    let config = cli.to_config();
    debug!("Configuration: {config:?}");

    let progress = Arc::new(cli::ProgressManager::new(0));
    let options = HarvestOptions {
        progress: Some(Arc::new({
            let progress = Arc::clone(&progress);
            move |processed, total| progress.update(processed, total)
        })),
        on_event: Some(Arc::new({
            let progress = Arc::clone(&progress);
            move |event: &HarvestEvent| {
                if let Some(line) = event_line(event) {
                    progress.println(&line);
                }
            }
        })),
        dry_run: cli.dry_run,
        ..Default::default()
    };

    let result = wix_image_dl::harvest_with_options(config, options).await;
    progress.finish();
    let report = result?;

    if cli.dry_run {
        return Ok(());
    }

    for line in report.summary_lines() {
        println!("{line}");
    }

    if let Some(path) = &cli.manifest {
        let json = report.to_manifest_json().context("failed to encode manifest")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        eprintln!("Manifest written to {}", path.display());
    }

    Ok(())
}

/// The stdout line for an event, if it gets one
fn event_line(event: &HarvestEvent) -> Option<String> {
    match event {
        HarvestEvent::Fetching { url } => Some(format!("Fetching images from {url}...")),
        HarvestEvent::Planned { url, filename, .. } => {
            Some(format!("[DRY RUN] Would download: {url} -> {filename}"))
        }
        HarvestEvent::Finished(DownloadOutcome::Saved(record)) => {
            Some(format!("Downloaded: {}", record.filename))
        }
        HarvestEvent::Finished(DownloadOutcome::Failed { url, reason }) => {
            Some(format!("Error downloading {url}: {reason}"))
        }
        // Non-200 responses are dropped without a message
        HarvestEvent::Finished(DownloadOutcome::Skipped { .. }) => None,
        HarvestEvent::Scanned { .. } | HarvestEvent::Filtered { .. } => None,
    }
}

/// Page-level failures get the install hint; a failed manifest write does not
fn needs_install_hint(e: &anyhow::Error) -> bool {
    e.downcast_ref::<wix_image_dl::Error>()
        .is_some_and(wix_image_dl::Error::is_fatal)
}

fn print_install_hint() {
    println!("\nNote: you may need to install the tool with its TLS roots available:");
    println!("  cargo install --path .");
}
