use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a movie record. Assigned at creation, never
/// reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(Uuid);

impl MovieId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A cataloged movie. Immutable after creation; there are no edit or delete
/// operations.
///
/// Stored as camelCase JSON: `{id, title, year, rating, poster, url,
/// fileSize?, createdAt}` with `createdAt` as an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Rating in [0, 10].
    pub rating: f64,
    /// Poster image URL; may be empty, in which case rendering falls back to
    /// a placeholder.
    pub poster: String,
    /// Playback URL. Always the `"#"` placeholder since no real upload
    /// target exists.
    pub url: String,
    /// Formatted size of the uploaded file, e.g. `"2.50 GB"`. Absent for
    /// seed records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    pub created_at: DateTime<Utc>,
}
