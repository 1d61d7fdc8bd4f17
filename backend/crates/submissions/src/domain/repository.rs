//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the infra layer.

use crate::domain::entities::Submission;
use crate::error::SubmissionResult;

/// Submission store trait
///
/// The store is one serialized document holding the total ordered sequence
/// of all submissions ever created. Both operations work on the whole
/// sequence; callers that read-modify-write must serialize themselves
/// through the store mutex.
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Load the full sequence; empty when no document has been persisted yet
    async fn load(&self) -> SubmissionResult<Vec<Submission>>;

    /// Overwrite the persisted document with the full sequence
    async fn save(&self, submissions: &[Submission]) -> SubmissionResult<()>;
}

/// Image store trait
#[trait_variant::make(ImageStore: Send)]
pub trait LocalImageStore {
    /// Persist one image under a slug-derived name and return the filename
    async fn store_image(
        &self,
        slug: &str,
        extension: &str,
        bytes: &[u8],
    ) -> SubmissionResult<String>;
}
