//! Streaming and runtime options for wix-image-dl
//!
//! Wraps reqwest response bodies as `AsyncRead` so images are copied to disk
//! in fixed-size chunks instead of being buffered whole.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::sync::Arc;
use tokio::io::{AsyncRead, ReadBuf};
use futures::TryStreamExt;

use crate::core::report::HarvestEvent;

/// Chunk size used when copying an image body to disk
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// A response body exposed as a byte stream
pub enum DownloadStream {
    /// HTTP stream using reqwest
    Http(Box<dyn AsyncRead + Send + Unpin>),
}

impl AsyncRead for DownloadStream {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        match &mut *self {
            DownloadStream::Http(stream) => Pin::new(stream).poll_read(cx, buf),
        }
    }
}

/// Progress callback receiving (processed candidates, total candidates)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Event callback invoked for every [`HarvestEvent`]
pub type EventCallback = Arc<dyn Fn(&HarvestEvent) + Send + Sync>;

/// Options for a harvest run
pub struct HarvestOptions {
    /// Optional progress callback
    pub progress: Option<ProgressCallback>,

    /// Optional event callback; the CLI prints its per-image lines from here
    pub on_event: Option<EventCallback>,

    /// Buffer size for streaming image bodies to disk
    pub chunk_size: usize,

    /// Resolve and name the accepted images without downloading them
    pub dry_run: bool,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            progress: None,
            on_event: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            dry_run: false,
        }
    }
}

/// Creates a DownloadStream from an HTTP response
pub fn create_http_stream(response: reqwest::Response) -> DownloadStream {
    let stream = Box::new(tokio_util::io::StreamReader::new(
        response.bytes_stream().map_err(std::io::Error::other)
    ));
    DownloadStream::Http(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[test]
    fn test_default_options() {
        let options = HarvestOptions::default();
        assert_eq!(options.chunk_size, 8192);
        assert!(!options.dry_run);
        assert!(options.progress.is_none());
        assert!(options.on_event.is_none());
    }

    #[tokio::test]
    async fn test_download_stream_reads_inner() {
        let inner: &'static [u8] = b"image bytes";
        let mut stream = DownloadStream::Http(Box::new(inner));

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, b"image bytes");
    }
}
