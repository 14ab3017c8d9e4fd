//! Installer Helper
//!
//! TigerStyle: Only network failures become `false`. Anything else is a
//! real error and propagates.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::constants::INSTALLER_NAME_BYTES_MAX;
use crate::dst::{FaultInjector, FaultType};

// =============================================================================
// Downloader
// =============================================================================

/// Fetches a URL into a local file.
#[async_trait]
pub trait FileDownloader: Send + Sync {
    /// Download `url` to `destination`.
    async fn download_file(&self, url: &str, destination: &Path) -> Result<(), DownloadError>;
}

// =============================================================================
// Helper
// =============================================================================

/// Downloads customer installers.
pub struct InstallerHelper {
    downloader: Arc<dyn FileDownloader>,
    base_url: String,
    destination: PathBuf,
}

impl InstallerHelper {
    /// Create a helper.
    ///
    /// Installers are fetched from `{base_url}/{customer}/{installer}` and
    /// saved to `destination`.
    pub fn new(
        downloader: Arc<dyn FileDownloader>,
        base_url: impl Into<String>,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            downloader,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            destination: destination.into(),
        }
    }

    /// URL of an installer.
    ///
    /// # Errors
    /// Returns `DownloadError::NameTooLong` if either name exceeds
    /// `INSTALLER_NAME_BYTES_MAX`.
    pub fn installer_url(
        &self,
        customer_name: &str,
        installer_name: &str,
    ) -> Result<String, DownloadError> {
        for name in [customer_name, installer_name] {
            if name.len() > INSTALLER_NAME_BYTES_MAX {
                return Err(DownloadError::NameTooLong {
                    len: name.len(),
                    max: INSTALLER_NAME_BYTES_MAX,
                });
            }
        }

        Ok(format!("{}/{}/{}", self.base_url, customer_name, installer_name))
    }

    /// Download an installer.
    ///
    /// Returns `Ok(true)` on success and `Ok(false)` when the download failed
    /// at the network level.
    ///
    /// # Errors
    /// Propagates every non-network failure.
    pub async fn download_installer(
        &self,
        customer_name: &str,
        installer_name: &str,
    ) -> Result<bool, DownloadError> {
        let url = self.installer_url(customer_name, installer_name)?;

        match self.downloader.download_file(&url, &self.destination).await {
            Ok(()) => {
                tracing::info!(url = %url, "Downloaded installer");
                Ok(true)
            }
            Err(DownloadError::Network(reason)) => {
                tracing::warn!(url = %url, reason = %reason, "Installer download failed");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

// =============================================================================
// Simulated Downloader
// =============================================================================

#[derive(Debug)]
struct SimDownloadState {
    requests: Vec<(String, PathBuf)>,
    faults: FaultInjector,
}

/// Downloader that records requests and never touches the network.
///
/// `DownloadFail` faults surface as `DownloadError::Network`.
#[derive(Debug)]
pub struct SimFileDownloader {
    state: Mutex<SimDownloadState>,
}

impl SimFileDownloader {
    /// Downloader that always succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_faults(FaultInjector::disabled())
    }

    /// Downloader driven by a fault injector.
    #[must_use]
    pub fn with_faults(faults: FaultInjector) -> Self {
        Self {
            state: Mutex::new(SimDownloadState {
                requests: Vec::new(),
                faults,
            }),
        }
    }

    /// `(url, destination)` pairs requested so far.
    pub async fn requests(&self) -> Vec<(String, PathBuf)> {
        self.state.lock().await.requests.clone()
    }
}

impl Default for SimFileDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileDownloader for SimFileDownloader {
    async fn download_file(&self, url: &str, destination: &Path) -> Result<(), DownloadError> {
        let mut state = self.state.lock().await;
        state.requests.push((url.to_string(), destination.to_path_buf()));

        if state.faults.should_inject(FaultType::DownloadFail) {
            return Err(DownloadError::Network(format!(
                "simulated failure fetching {}",
                url
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Download errors
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("name too long: {len} bytes > {max}")]
    NameTooLong { len: usize, max: usize },
}

// =============================================================================
// Tests
// =============================================================================
