//! Domain Services
//!
//! Pure domain logic for slug and identity derivation.

use std::path::Path;

use kernel::id::SubmissionId;

use crate::domain::entities::Submission;

/// Derive a filesystem/URL-safe slug from a submission title
///
/// Lowercases, trims, collapses internal whitespace runs to single hyphens,
/// then strips everything outside ASCII word characters and hyphens.
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Extract the extension of an uploaded file, dot included
///
/// Returns an empty string when the original name has no extension.
pub fn file_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

/// Resolve an identity candidate against the store's uniqueness invariant
///
/// Timestamp-derived ids collide when two submissions land in the same
/// millisecond; the candidate is bumped to the next unused integer. The
/// caller must hold the store mutex for the check to be race-free.
pub fn unique_submission_id(existing: &[Submission], candidate: SubmissionId) -> SubmissionId {
    let mut id = candidate;
    let mut millis = id.to_millis().unwrap_or(0);
    while existing.iter().any(|s| s.id == id) {
        millis += 1;
        id = SubmissionId::from_millis(millis);
    }
    id
}
