//! Resume retrieval: streams a remote PDF into per-invocation transient
//! storage.
//!
//! Each fetch gets its own temp directory and a uuid-named file, so
//! concurrent requests can never collide on a shared path. Single attempt,
//! no retry: the first failure is reported to the caller as-is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tempfile::TempDir;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid resume URL '{0}'")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to persist resume: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloaded resume bytes on disk, scoped to one scoring invocation.
///
/// Owns its backing temp directory: dropping the blob on any path,
/// including an unwind further down the pipeline, reclaims the storage,
/// and `release` can only be called once because it consumes the blob.
#[derive(Debug)]
pub struct TransientBlob {
    id: Uuid,
    path: PathBuf,
    dir: TempDir,
}

impl TransientBlob {
    pub(crate) fn create() -> Result<Self, FetchError> {
        let id = Uuid::new_v4();
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(format!("resume-{id}.pdf"));
        Ok(Self { id, path, dir })
    }

    /// Per-invocation token; shows up in stage logs for correlation.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the backing storage now instead of waiting for drop.
    pub fn release(self) {
        let TransientBlob { id, dir, .. } = self;
        match dir.close() {
            Ok(()) => debug!("released transient blob {id}"),
            Err(e) => warn!("failed to remove transient blob {id}: {e}"),
        }
    }
}

/// Abstraction over resume retrieval so the pipeline can be exercised
/// without a live network. Default: [`HttpFetcher`]; tests inject stubs.
///
/// Carried in `AppState` as `Arc<dyn DocumentFetcher>`.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<TransientBlob, FetchError>;
}

/// HTTP(S) fetcher backed by a single `reqwest` client with a bounded
/// request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

#[async_trait]
impl DocumentFetcher for HttpFetcher {
    /// Streams the response body chunk-by-chunk to disk, so the full document
    /// is never buffered in memory. Transient storage is only created after
    /// the response status checks out, so failed fetches acquire nothing.
    async fn fetch(&self, url: &str) -> Result<TransientBlob, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let blob = TransientBlob::create()?;
        let mut file = File::create(blob.path()).await?;
        let mut stream = response.bytes_stream();
        let mut bytes_written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("downloaded {bytes_written} bytes into transient blob {}", blob.id());
        Ok(blob)
    }
}
