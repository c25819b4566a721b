//! Error types for wix-image-dl
//!
//! Page-level failures are fatal for a run; every other variant is raised while
//! handling a single image and is folded into that image's outcome.

use std::fmt;

/// Main error type for wix-image-dl operations
#[derive(Debug)]
pub enum Error {
    /// The page could not be fetched (network error, timeout or non-2xx status)
    FetchFailed(String),

    /// An image reference could not be turned into an absolute URL
    InvalidUrl(String),

    /// HTTP-specific error
    HttpError(String),

    /// File I/O error
    IoError(std::io::Error),

    /// Invalid configuration or parameters
    InvalidInput(String),

    /// Network connectivity issues, including timeouts
    NetworkError(String),
}

impl Error {
    /// Whether this error ends the whole run rather than a single image
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::FetchFailed(_) | Error::InvalidInput(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FetchFailed(msg) => {
                write!(f, "Failed to fetch page: {}", msg)
            }
            Error::InvalidUrl(msg) => {
                write!(f, "Invalid URL: {}", msg)
            }
            Error::HttpError(msg) => {
                write!(f, "HTTP error: {}", msg)
            }
            Error::IoError(err) => {
                write!(f, "I/O error: {}", err)
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
            Error::NetworkError(msg) => {
                write!(f, "Network error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::NetworkError(err.to_string())
        } else {
            Error::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

/// Convenience result type for wix-image-dl operations
pub type Result<T> = std::result::Result<T, Error>;
