use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A raw focus-session record as supplied by the caller.
///
/// `start_time` is required at the semantic level, but modeled as optional
/// so a missing value surfaces through the normalizer's error path rather
/// than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focused_minutes: Option<i64>,
}

/// A session with resolved start, end, and duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSession {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Focused duration in whole minutes.
    pub minutes: i64,
}
