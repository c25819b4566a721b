//! Run configuration for wix-image-dl
//!
//! Holds the page to scrape, where to put the images and how requests are made.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::core::error::{Error, Result};

/// Page scraped when no URL is given
pub const DEFAULT_PAGE_URL: &str = "https://springcorgis.wixsite.com/brickyard-kennels";

/// Directory images are written into when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "resources/images";

/// Browser-like User-Agent; Wix serves a stripped page to unknown clients
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Per-request timeout in seconds, shared by the page fetch and every image fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for a harvest run
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestConfig {
    /// Page whose `<img>` tags are scanned
    pub page_url: String,

    /// Directory the images are written into
    pub output_dir: PathBuf,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Timeout applied to each request
    pub timeout: Duration,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HarvestConfig {
    /// Create a configuration for a different page, keeping every other default
    pub fn for_page(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            ..Self::default()
        }
    }

    /// Parse the page URL, which doubles as the base for root-relative image paths
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.page_url)
            .map_err(|e| Error::InvalidInput(format!("page URL '{}': {e}", self.page_url)))
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        if self.timeout.is_zero() {
            return Err(Error::InvalidInput("timeout must be greater than zero".to_string()));
        }
        if self.user_agent.trim().is_empty() {
            return Err(Error::InvalidInput("user agent must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarvestConfig::default();
        assert_eq!(config.page_url, "https://springcorgis.wixsite.com/brickyard-kennels");
        assert_eq!(config.output_dir, PathBuf::from("resources/images"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_for_page_keeps_defaults() {
        let config = HarvestConfig::for_page("http://127.0.0.1:8080/home");
        assert_eq!(config.page_url, "http://127.0.0.1:8080/home");
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let config = HarvestConfig::for_page("not a url");
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));

        let config = HarvestConfig {
            timeout: Duration::ZERO,
            ..HarvestConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));

        let config = HarvestConfig {
            user_agent: "  ".to_string(),
            ..HarvestConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
