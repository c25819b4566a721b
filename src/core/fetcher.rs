//! Page fetching for wix-image-dl
//!
//! Builds the HTTP client shared by the whole run and fetches the page to scan.

use log::debug;
use reqwest::{Client, ClientBuilder};

use crate::core::config::HarvestConfig;
use crate::core::error::{Error, Result};

/// Build the HTTP client used for the page and every image
pub fn build_client(config: &HarvestConfig) -> Result<Client> {
    ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(|e| Error::InvalidInput(format!("failed to create HTTP client: {e}")))
}

/// Fetch the page body
///
/// Network errors, timeouts and non-2xx statuses all end up as
/// [`Error::FetchFailed`], which aborts the run.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    debug!("GET {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| fetch_failed(url, e.into()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::FetchFailed(format!("{status} for url: {url}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| fetch_failed(url, e.into()))?;

    debug!("Fetched {} bytes from {url}", body.len());
    Ok(body)
}

fn fetch_failed(url: &str, cause: Error) -> Error {
    Error::FetchFailed(format!("{url}: {cause}"))
}
