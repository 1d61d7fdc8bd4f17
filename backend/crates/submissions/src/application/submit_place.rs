//! Submit Place Use Case

use std::sync::Arc;

use kernel::id::SubmissionId;
use tokio::sync::Mutex;

use crate::application::config::SubmissionsConfig;
use crate::domain::entities::Submission;
use crate::domain::repository::{ImageStore, SubmissionRepository};
use crate::domain::services::{file_extension, slugify, unique_submission_id};
use crate::error::{SubmissionError, SubmissionResult};

/// One image file received with the submission
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Client-supplied filename, used only for its extension
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Input DTO for submit place
#[derive(Debug, Clone)]
pub struct SubmitPlaceInput {
    pub title: String,
    pub description: String,
    pub location: String,
    pub images: Vec<UploadedImage>,
}

/// Output DTO for submit place
#[derive(Debug, Clone)]
pub struct SubmitPlaceOutput {
    pub id: SubmissionId,
}

/// Submit Place Use Case
///
/// Validates the proposal, writes its images to the upload directory and
/// appends the new pending submission to the store. The whole
/// write-images-then-load-push-save sequence runs under the store mutex,
/// so concurrent in-process submits cannot lose updates and slug-suffix
/// numbering stays sequential.
pub struct SubmitPlaceUseCase<R, S>
where
    R: SubmissionRepository,
    S: ImageStore,
{
    repo: Arc<R>,
    images: Arc<S>,
    config: Arc<SubmissionsConfig>,
    store_lock: Arc<Mutex<()>>,
}

impl<R, S> SubmitPlaceUseCase<R, S>
where
    R: SubmissionRepository,
    S: ImageStore,
{
    pub fn new(
        repo: Arc<R>,
        images: Arc<S>,
        config: Arc<SubmissionsConfig>,
        store_lock: Arc<Mutex<()>>,
    ) -> Self {
        Self {
            repo,
            images,
            config,
            store_lock,
        }
    }

    pub async fn execute(&self, input: SubmitPlaceInput) -> SubmissionResult<SubmitPlaceOutput> {
        if input.title.is_empty()
            || input.description.is_empty()
            || input.location.is_empty()
            || input.images.is_empty()
        {
            return Err(SubmissionError::MissingFields);
        }

        if input.images.len() > self.config.max_images {
            return Err(SubmissionError::TooManyImages {
                max: self.config.max_images,
            });
        }

        let slug = slugify(&input.title);

        let _guard = self.store_lock.lock().await;

        let mut image_paths = Vec::with_capacity(input.images.len());
        for image in &input.images {
            let extension = file_extension(&image.original_name);
            let filename = self.images.store_image(&slug, &extension, &image.bytes).await?;
            image_paths.push(self.config.public_image_path(&filename));
        }

        let mut submissions = self.repo.load().await?;
        let id = unique_submission_id(&submissions, SubmissionId::now());

        let submission = Submission::new(
            id.clone(),
            input.title,
            input.description,
            input.location,
            image_paths,
        );
        submissions.push(submission);
        self.repo.save(&submissions).await?;

        tracing::info!(
            id = %id,
            slug = %slug,
            images = input.images.len(),
            "New submission accepted"
        );

        Ok(SubmitPlaceOutput { id })
    }
}
