//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SubmissionStatus;

/// Response for POST /submit
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub id: String,
}

/// Request for POST /update-status
///
/// An unknown `status` string fails deserialization, so it is rejected
/// before it can ever reach the store.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: String,
    pub status: SubmissionStatus,
}

/// Response for POST /update-status
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
}
