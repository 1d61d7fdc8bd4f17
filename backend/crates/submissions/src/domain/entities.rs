//! Domain Entities
//!
//! Core business entities for the submissions domain.

use kernel::id::SubmissionId;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SubmissionStatus;

/// Submission entity - one proposed tourism site awaiting or having
/// received a moderation decision
///
/// The persisted form and the API form are the same JSON object.
/// Submissions are never deleted; only `status` is ever mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Ordered public paths (`/uploads/<filename>`), non-empty
    pub images: Vec<String>,
    pub status: SubmissionStatus,
}

impl Submission {
    /// Create a new pending submission
    pub fn new(
        id: SubmissionId,
        title: String,
        description: String,
        location: String,
        images: Vec<String>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            location,
            images,
            status: SubmissionStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn is_approved(&self) -> bool {
        self.status == SubmissionStatus::Approved
    }
}
