//! Review Queue Use Case
//!
//! Read side of the moderation flow: list submissions by status.

use std::sync::Arc;

use crate::domain::entities::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_objects::SubmissionStatus;
use crate::error::SubmissionResult;

/// Review Queue Use Case
///
/// Pure reads of the store; no lock is taken, each call sees one
/// consistent snapshot of the persisted document.
pub struct ReviewQueueUseCase<R>
where
    R: SubmissionRepository,
{
    repo: Arc<R>,
}

impl<R> ReviewQueueUseCase<R>
where
    R: SubmissionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All pending submissions, in store order
    pub async fn list_pending(&self) -> SubmissionResult<Vec<Submission>> {
        self.list_by_status(SubmissionStatus::Pending).await
    }

    /// All approved submissions, in store order
    pub async fn list_approved(&self) -> SubmissionResult<Vec<Submission>> {
        self.list_by_status(SubmissionStatus::Approved).await
    }

    async fn list_by_status(&self, status: SubmissionStatus) -> SubmissionResult<Vec<Submission>> {
        let mut submissions = self.repo.load().await?;
        submissions.retain(|s| s.status == status);
        Ok(submissions)
    }
}
