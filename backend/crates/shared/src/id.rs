//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Submission identity - Unix ミリ秒タイムスタンプ由来の文字列 ID
///
/// 作成時刻のミリ秒を 10 進文字列にしたものをそのまま識別子として
/// 使用します。永続化形式・API 形式ともにプレーン文字列です。
///
/// ## Notes
/// * 同一ミリ秒内の衝突はドメイン層で次の未使用整数に繰り上げて解決する
///
/// ## Examples
/// ```
/// use kernel::id::SubmissionId;
///
/// let id = SubmissionId::from_millis(1700000000000);
/// assert_eq!(id.as_str(), "1700000000000");
/// assert_eq!(id.to_millis(), Some(1700000000000));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(String);

impl SubmissionId {
    /// Create an ID from the current wall-clock time
    pub fn now() -> Self {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    /// Create an ID from an explicit millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse back to milliseconds
    ///
    /// Returns `None` for ids that predate the numeric scheme.
    pub fn to_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Debug for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubmissionId({})", self.0)
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SubmissionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SubmissionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<SubmissionId> for String {
    fn from(id: SubmissionId) -> Self {
        id.0
    }
}
