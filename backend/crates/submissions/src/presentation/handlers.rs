//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use kernel::id::SubmissionId;
use tokio::sync::Mutex;

use crate::application::config::SubmissionsConfig;
use crate::application::review_queue::ReviewQueueUseCase;
use crate::application::submit_place::{SubmitPlaceInput, SubmitPlaceUseCase, UploadedImage};
use crate::application::update_status::UpdateStatusUseCase;
use crate::domain::entities::Submission;
use crate::domain::repository::{ImageStore, SubmissionRepository};
use crate::error::SubmissionResult;
use crate::presentation::dto::{SubmitResponse, UpdateStatusRequest, UpdateStatusResponse};

/// Shared state for submission handlers
#[derive(Clone)]
pub struct SubmissionsAppState<R, S>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub images: Arc<S>,
    pub config: Arc<SubmissionsConfig>,
    /// Serializes every store read-modify-write in this process
    pub store_lock: Arc<Mutex<()>>,
}

/// POST /submit
pub async fn submit<R, S>(
    State(state): State<SubmissionsAppState<R, S>>,
    mut multipart: Multipart,
) -> SubmissionResult<Json<SubmitResponse>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let mut title = String::new();
    let mut description = String::new();
    let mut location = String::new();
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => title = field.text().await?,
            Some("description") => description = field.text().await?,
            Some("location") => location = field.text().await?,
            Some("images") => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                images.push(UploadedImage {
                    original_name,
                    bytes: bytes.to_vec(),
                });
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let use_case = SubmitPlaceUseCase::new(
        state.repo.clone(),
        state.images.clone(),
        state.config.clone(),
        state.store_lock.clone(),
    );

    let output = use_case
        .execute(SubmitPlaceInput {
            title,
            description,
            location,
            images,
        })
        .await?;

    Ok(Json(SubmitResponse {
        success: true,
        id: output.id.to_string(),
    }))
}

/// GET /submissions
pub async fn list_pending<R, S>(
    State(state): State<SubmissionsAppState<R, S>>,
) -> SubmissionResult<Json<Vec<Submission>>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = ReviewQueueUseCase::new(state.repo.clone());
    Ok(Json(use_case.list_pending().await?))
}

/// GET /approved
pub async fn list_approved<R, S>(
    State(state): State<SubmissionsAppState<R, S>>,
) -> SubmissionResult<Json<Vec<Submission>>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = ReviewQueueUseCase::new(state.repo.clone());
    Ok(Json(use_case.list_approved().await?))
}

/// POST /update-status
pub async fn update_status<R, S>(
    State(state): State<SubmissionsAppState<R, S>>,
    Json(req): Json<UpdateStatusRequest>,
) -> SubmissionResult<Json<UpdateStatusResponse>>
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let use_case = UpdateStatusUseCase::new(state.repo.clone(), state.store_lock.clone());

    let id = SubmissionId::from(req.id);
    use_case.execute(&id, req.status).await?;

    Ok(Json(UpdateStatusResponse { success: true }))
}
