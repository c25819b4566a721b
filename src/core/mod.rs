//! Core library modules for wix-image-dl
//!
//! This module contains the internal implementation details of the wix-image-dl library.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod scanner;
pub mod filter;
pub mod naming;
pub mod stream;
pub mod downloader;
pub mod report;

// Re-export main types for internal use
pub use config::HarvestConfig;
pub use downloader::{Downloader, DownloadOutcome};
pub use report::{DownloadRecord, HarvestEvent, Report};
