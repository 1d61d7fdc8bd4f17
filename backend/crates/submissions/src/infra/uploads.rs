//! Upload Directory Implementation

use std::path::PathBuf;

use crate::domain::repository::ImageStore;
use crate::error::SubmissionResult;

/// Disk-backed image store
///
/// Filenames are `{slug}-{n}{ext}` where `n` is one past the number of
/// entries already starting with the slug. The scan runs per file, so
/// files within one request number sequentially as earlier writes land;
/// callers serialize requests through the store mutex to keep the count
/// deterministic in-process. Writers from other processes still race the
/// scan.
#[derive(Debug, Clone)]
pub struct DiskImageStore {
    upload_dir: PathBuf,
}

impl DiskImageStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir(&self) -> SubmissionResult<()> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        Ok(())
    }

    async fn count_slug_files(&self, slug: &str) -> SubmissionResult<usize> {
        let mut entries = match tokio::fs::read_dir(&self.upload_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let mut count = 0;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name().to_string_lossy().starts_with(slug) {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl ImageStore for DiskImageStore {
    async fn store_image(
        &self,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> SubmissionResult<String> {
        self.ensure_dir().await?;

        let n = self.count_slug_files(slug).await? + 1;
        let filename = format!("{slug}-{n}{extension}");
        tokio::fs::write(self.upload_dir.join(&filename), bytes).await?;

        tracing::debug!(filename = %filename, bytes = bytes.len(), "Stored uploaded image");

        Ok(filename)
    }
}
