//! Image download for wix-image-dl
//!
//! Fetches one accepted candidate at a time and streams it into the output
//! directory. Failures never escape: each call reports a [`DownloadOutcome`].

use std::path::{Path, PathBuf};
use log::debug;
use reqwest::{Client, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use url::Url;

use crate::core::error::Result;
use crate::core::naming::{derive_filename, normalize_reference};
use crate::core::report::DownloadRecord;
use crate::core::scanner::Candidate;
use crate::core::stream::{DownloadStream, create_http_stream};

/// What happened to a single candidate
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadOutcome {
    /// The image was written to disk
    Saved(DownloadRecord),
    /// The server answered with something other than 200; nothing was written
    Skipped { url: String, status: StatusCode },
    /// Resolving, fetching or writing the image failed
    Failed { url: String, reason: String },
}

/// Sequential image downloader bound to one page and one output directory
pub struct Downloader {
    client: Client,
    base_url: Url,
    output_dir: PathBuf,
    chunk_size: usize,
}

impl Downloader {
    /// Create a downloader; `base_url` resolves root-relative references
    pub fn new(client: Client, base_url: Url, output_dir: impl Into<PathBuf>, chunk_size: usize) -> Self {
        Self {
            client,
            base_url,
            output_dir: output_dir.into(),
            chunk_size: chunk_size.max(1),
        }
    }

    /// Absolute form of a candidate as text, with the page's spelling kept
    pub fn normalize(&self, candidate: &Candidate) -> String {
        normalize_reference(&candidate.url, &self.base_url)
    }

    /// Resolve a candidate and derive its filename without touching the network
    pub fn plan(&self, candidate: &Candidate) -> Result<(Url, String)> {
        let reference = self.normalize(candidate);
        let url = Url::parse(&reference)?;
        Ok((url, derive_filename(&reference, candidate.index)))
    }

    /// Download one candidate
    pub async fn download(&self, candidate: &Candidate) -> DownloadOutcome {
        let reference = self.normalize(candidate);

        match self.download_reference(&reference, candidate.index).await {
            Ok(outcome) => outcome,
            Err(e) => DownloadOutcome::Failed {
                url: reference,
                reason: e.to_string(),
            },
        }
    }

    async fn download_reference(&self, reference: &str, index: usize) -> Result<DownloadOutcome> {
        let url = Url::parse(reference)?;

        debug!("GET {url}");
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("Skipping {reference}: server answered {status}");
            return Ok(DownloadOutcome::Skipped {
                url: reference.to_string(),
                status,
            });
        }

        let filename = derive_filename(reference, index);
        let file_path = self.output_dir.join(&filename);

        let written = self.stream_to_file(create_http_stream(response), &file_path).await?;
        debug!("Wrote {written} bytes to {}", file_path.display());

        Ok(DownloadOutcome::Saved(DownloadRecord {
            filename,
            source_url: reference.to_string(),
        }))
    }

    /// Copy the body to `file_path` in `chunk_size` pieces, replacing any existing file
    async fn stream_to_file(&self, mut stream: DownloadStream, file_path: &Path) -> Result<u64> {
        let mut file = tokio::fs::File::create(file_path).await?;
        let mut buffer = vec![0u8; self.chunk_size];
        let mut written = 0u64;

        loop {
            let bytes_read = stream.read(&mut buffer).await?;
            if bytes_read == 0 {
                break;
            }

            file.write_all(&buffer[..bytes_read]).await?;
            written += bytes_read as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}
