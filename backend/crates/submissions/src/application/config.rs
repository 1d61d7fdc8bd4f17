//! Application Configuration
//!
//! Configuration for the submissions application layer.

use std::path::PathBuf;

/// Route prefix under which uploaded images are publicly served
pub const UPLOAD_ROUTE: &str = "/uploads";

/// Submissions application configuration
#[derive(Debug, Clone)]
pub struct SubmissionsConfig {
    /// Path of the persisted JSON document
    pub store_path: PathBuf,
    /// Directory uploaded images are written to (publicly served)
    pub upload_dir: PathBuf,
    /// Maximum number of image files per submission
    pub max_images: usize,
    /// Request body cap for multipart uploads, in bytes
    pub max_upload_bytes: usize,
}

impl Default for SubmissionsConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("submissions.json"),
            upload_dir: PathBuf::from("uploads"),
            max_images: 5,
            max_upload_bytes: 25 * 1024 * 1024,
        }
    }
}

impl SubmissionsConfig {
    /// Public path an uploaded filename is served under
    pub fn public_image_path(&self, filename: &str) -> String {
        format!("{UPLOAD_ROUTE}/{filename}")
    }
}
