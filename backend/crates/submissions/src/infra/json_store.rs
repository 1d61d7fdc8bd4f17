//! JSON Flat-File Repository Implementation

use std::path::PathBuf;

use crate::domain::entities::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::error::{SubmissionError, SubmissionResult};

/// Flat-file repository: one pretty-printed JSON document on disk
///
/// `load` returns the empty sequence until the first `save` creates the
/// document. `save` overwrites the file directly; the write is not atomic,
/// a crash mid-write can corrupt the document (surfaced as `CorruptStore`
/// on the next load).
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SubmissionRepository for JsonFileRepository {
    async fn load(&self) -> SubmissionResult<Vec<Submission>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(SubmissionError::CorruptStore),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, submissions: &[Submission]) -> SubmissionResult<()> {
        let raw =
            serde_json::to_string_pretty(submissions).map_err(SubmissionError::Serialize)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}
