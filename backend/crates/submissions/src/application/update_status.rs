//! Update Status Use Case

use std::sync::Arc;

use kernel::id::SubmissionId;
use tokio::sync::Mutex;

use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::SubmissionStatus;
use crate::error::{SubmissionError, SubmissionResult};

/// Update Status Use Case
///
/// Overwrites the status of one submission. Transitions between the three
/// states are unrestricted. The load-locate-save sequence runs under the
/// store mutex; an unknown id leaves the store untouched.
pub struct UpdateStatusUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
    store_lock: Arc<Mutex<()>>,
}

impl<R> UpdateStatusUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>, store_lock: Arc<Mutex<()>>) -> Self {
        Self { repo, store_lock }
    }

    pub async fn execute(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> SubmissionResult<()> {
        let _guard = self.store_lock.lock().await;

        let mut submissions = self.repo.load().await?;
        let submission = submissions
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or(SubmissionError::NotFound)?;

        let previous = submission.status;
        submission.status = status;
        self.repo.save(&submissions).await?;

        tracing::info!(
            id = %id,
            from = %previous,
            to = %status,
            "Submission status updated"
        );

        Ok(())
    }
}
