//! Submissions Router

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::sync::Mutex;

use crate::application::config::SubmissionsConfig;
use crate::domain::repository::{ImageStore, SubmissionRepository};
use crate::infra::json_store::JsonFileRepository;
use crate::infra::uploads::DiskImageStore;
use crate::presentation::handlers::{self, SubmissionsAppState};

/// Create the submissions router with the flat-file store
pub fn submissions_router(config: SubmissionsConfig) -> Router {
    let repo = JsonFileRepository::new(&config.store_path);
    let images = DiskImageStore::new(&config.upload_dir);
    submissions_router_generic(repo, images, config)
}

/// Create a generic submissions router for any repository implementation
pub fn submissions_router_generic<R, S>(repo: R, images: S, config: SubmissionsConfig) -> Router
where
    R: SubmissionRepository + Clone + Send + Sync + 'static,
    S: ImageStore + Clone + Send + Sync + 'static,
{
    let body_limit = config.max_upload_bytes;

    let state = SubmissionsAppState {
        repo: Arc::new(repo),
        images: Arc::new(images),
        config: Arc::new(config),
        store_lock: Arc::new(Mutex::new(())),
    };

    Router::new()
        .route("/submit", post(handlers::submit::<R, S>))
        .route("/submissions", get(handlers::list_pending::<R, S>))
        .route("/approved", get(handlers::list_approved::<R, S>))
        .route("/update-status", post(handlers::update_status::<R, S>))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
