//! Video Service
//!
//! TigerStyle: File access and the video catalogue sit behind traits so
//! the parsing and filtering logic runs without touching disk.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::constants::VIDEO_FILE_BYTES_MAX;

// =============================================================================
// Types
// =============================================================================

/// A video in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Whether encoding has finished
    #[serde(default)]
    pub is_processed: bool,
}

// =============================================================================
// File Reader
// =============================================================================

/// Reads whole files as text.
#[async_trait]
pub trait FileReader: Send + Sync {
    /// Size of the file at `path` in bytes.
    async fn size(&self, path: &Path) -> io::Result<u64>;

    /// Contents of the file at `path`.
    async fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileReader;

#[async_trait]
impl FileReader for FsFileReader {
    async fn size(&self, path: &Path) -> io::Result<u64> {
        Ok(tokio::fs::metadata(path).await?.len())
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// Serves file contents from memory. Unknown paths are `NotFound`.
#[derive(Debug, Default)]
pub struct SimFileReader {
    files: RwLock<HashMap<PathBuf, String>>,
}

impl SimFileReader {
    /// A reader with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A reader serving a single file.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let mut files = HashMap::new();
        files.insert(path.into(), contents.into());
        Self {
            files: RwLock::new(files),
        }
    }

    /// Add or replace a file.
    pub async fn set_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.write().await.insert(path.into(), contents.into());
    }
}

#[async_trait]
impl FileReader for SimFileReader {
    async fn size(&self, path: &Path) -> io::Result<u64> {
        let files = self.files.read().await;
        let contents = files.get(path).ok_or_else(|| not_found(path))?;
        Ok(contents.len() as u64)
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        self.files
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no simulated file at {}", path.display()),
    )
}

// =============================================================================
// Repository
// =============================================================================

/// Catalogue of videos.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Videos that still need processing.
    async fn unprocessed_videos(&self) -> Result<Vec<Video>, VideoError>;
}

/// Video catalogue held in memory.
#[derive(Debug, Default)]
pub struct InMemoryVideoRepository {
    videos: RwLock<Vec<Video>>,
}

impl InMemoryVideoRepository {
    /// Create a repository holding `videos`.
    #[must_use]
    pub fn with_videos(videos: Vec<Video>) -> Self {
        Self {
            videos: RwLock::new(videos),
        }
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn unprocessed_videos(&self) -> Result<Vec<Video>, VideoError> {
        let videos = self.videos.read().await;
        Ok(videos.iter().filter(|v| !v.is_processed).cloned().collect())
    }
}

// =============================================================================
// Service
// =============================================================================

/// Reads the current video and reports on the catalogue.
pub struct VideoService {
    file_reader: Arc<dyn FileReader>,
    repository: Arc<dyn VideoRepository>,
    video_path: PathBuf,
}

impl VideoService {
    /// Create a service.
    pub fn new(
        file_reader: Arc<dyn FileReader>,
        repository: Arc<dyn VideoRepository>,
        video_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            file_reader,
            repository,
            video_path: video_path.into(),
        }
    }

    /// Title of the video described by the video file.
    ///
    /// # Errors
    /// - `VideoError::Io` if the file cannot be read
    /// - `VideoError::TooLarge` if the file exceeds `VIDEO_FILE_BYTES_MAX`
    /// - `VideoError::Parse` if the contents are not a video
    pub async fn read_video_title(&self) -> Result<String, VideoError> {
        let len = self.file_reader.size(&self.video_path).await?;
        if len > VIDEO_FILE_BYTES_MAX as u64 {
            return Err(VideoError::TooLarge {
                len,
                max: VIDEO_FILE_BYTES_MAX,
            });
        }

        let contents = self.file_reader.read(&self.video_path).await?;
        let video: Video = serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(
                path = %self.video_path.display(),
                error = %e,
                "Error parsing the video"
            );
            VideoError::Parse(e)
        })?;

        Ok(video.title)
    }

    /// Ids of unprocessed videos, comma separated. Empty when none.
    ///
    /// # Errors
    /// Propagates repository failures.
    pub async fn unprocessed_video_ids_csv(&self) -> Result<String, VideoError> {
        let videos = self.repository.unprocessed_videos().await?;
        let ids: Vec<String> = videos.iter().map(|v| v.id.to_string()).collect();
        Ok(ids.join(","))
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Video-related errors
#[derive(Debug, thiserror::Error)]
pub enum VideoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("error parsing the video: {0}")]
    Parse(serde_json::Error),

    #[error("video file too large: {len} > {max}")]
    TooLarge { len: u64, max: usize },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VIDEO_FILE_NAME_DEFAULT;
    use tempfile::tempdir;

    fn video(id: u64, is_processed: bool) -> Video {
        Video {
            id,
            title: format!("video {}", id),
            is_processed,
        }
    }

    fn service_with_file(contents: &str) -> VideoService {
        VideoService::new(
            Arc::new(SimFileReader::with_file(VIDEO_FILE_NAME_DEFAULT, contents)),
            Arc::new(InMemoryVideoRepository::default()),
            VIDEO_FILE_NAME_DEFAULT,
        )
    }

    fn service_with_videos(videos: Vec<Video>) -> VideoService {
        VideoService::new(
            Arc::new(SimFileReader::new()),
            Arc::new(InMemoryVideoRepository::with_videos(videos)),
            VIDEO_FILE_NAME_DEFAULT,
        )
    }

    #[tokio::test]
    async fn test_read_video_title_empty_file_is_parse_error() {
        let service = service_with_file("");

        let result = service.read_video_title().await;

        let err = result.unwrap_err();
        assert!(matches!(err, VideoError::Parse(_)));
        assert!(err.to_string().to_lowercase().contains("error"));
    }

    #[tokio::test]
    async fn test_read_video_title_valid_file() {
        let service =
            service_with_file(r#"{"id": 1, "title": "Intro to Rust", "is_processed": true}"#);

        let title = service.read_video_title().await.unwrap();

        assert_eq!(title, "Intro to Rust");
    }

    #[tokio::test]
    async fn test_read_video_title_missing_file_is_io_error() {
        let service = service_with_videos(Vec::new());

        let result = service.read_video_title().await;

        assert!(matches!(result, Err(VideoError::Io(e)) if e.kind() == io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_read_video_title_too_large() {
        let big = "x".repeat(VIDEO_FILE_BYTES_MAX + 1);
        let service = service_with_file(&big);

        let result = service.read_video_title().await;

        assert!(matches!(result, Err(VideoError::TooLarge { .. })));
    }

    /// Reader whose `read` must never be reached.
    struct OversizedFileReader;

    #[async_trait]
    impl FileReader for OversizedFileReader {
        async fn size(&self, _path: &Path) -> io::Result<u64> {
            Ok(u64::MAX)
        }

        async fn read(&self, _path: &Path) -> io::Result<String> {
            panic!("oversized file was read");
        }
    }

    #[tokio::test]
    async fn test_read_video_title_too_large_is_not_read() {
        let service = VideoService::new(
            Arc::new(OversizedFileReader),
            Arc::new(InMemoryVideoRepository::default()),
            VIDEO_FILE_NAME_DEFAULT,
        );

        let result = service.read_video_title().await;

        assert!(matches!(result, Err(VideoError::TooLarge { len: u64::MAX, .. })));
    }

    #[tokio::test]
    async fn test_oversized_file_on_disk_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(VIDEO_FILE_NAME_DEFAULT);
        tokio::fs::write(&path, vec![b' '; VIDEO_FILE_BYTES_MAX + 1])
            .await
            .unwrap();
        let service = VideoService::new(
            Arc::new(FsFileReader),
            Arc::new(InMemoryVideoRepository::default()),
            path,
        );

        let result = service.read_video_title().await;

        assert!(matches!(result, Err(VideoError::TooLarge { .. })));
    }

    #[tokio::test]
    async fn test_read_video_title_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(VIDEO_FILE_NAME_DEFAULT);
        tokio::fs::write(&path, r#"{"id": 7, "title": "On Disk"}"#).await.unwrap();
        let service = VideoService::new(
            Arc::new(FsFileReader),
            Arc::new(InMemoryVideoRepository::default()),
            path,
        );

        assert_eq!(service.read_video_title().await.unwrap(), "On Disk");
    }

    #[tokio::test]
    async fn test_unprocessed_csv_all_processed_is_empty() {
        let service = service_with_videos(vec![video(1, true), video(2, true)]);

        assert_eq!(service.unprocessed_video_ids_csv().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_unprocessed_csv_lists_unprocessed_ids() {
        let service = service_with_videos(vec![video(1, false), video(2, true), video(3, false)]);

        assert_eq!(service.unprocessed_video_ids_csv().await.unwrap(), "1,3");
    }

    #[tokio::test]
    async fn test_sim_file_reader_set_file() {
        let reader = SimFileReader::new();
        reader.set_file("a.txt", "hello").await;

        assert_eq!(reader.read(Path::new("a.txt")).await.unwrap(), "hello");
    }
}
