//! Submissions Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Flat-file store and upload-directory implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Storage Model
//! - The whole submission sequence lives in one JSON document, read and
//!   rewritten wholesale on every mutation
//! - Store mutations are serialized through one per-process mutex held
//!   across the full read-modify-write (cross-process writers still race)
//! - Uploaded images are written to a publicly served directory, named
//!   `{title-slug}-{n}{ext}` by scanning for existing slug-prefixed files

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{SubmissionsConfig, UPLOAD_ROUTE};
pub use error::{SubmissionError, SubmissionResult};
pub use infra::json_store::JsonFileRepository;
pub use infra::uploads::DiskImageStore;
pub use presentation::router::{submissions_router, submissions_router_generic};

// Re-export kernel types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
pub use kernel::id::SubmissionId;

#[cfg(test)]
mod tests;
