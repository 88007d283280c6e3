//! Frontend Models
//!
//! Data structures matching the task API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Backend-assigned task identifier
pub type TaskId = u64;

/// Task record (matches backend JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Serialize)]
pub struct NewTaskBody<'a> {
    pub title: &'a str,
}

/// Body of `PATCH /api/tasks/{id}`
#[derive(Debug, Serialize)]
pub struct SetDoneBody {
    pub done: bool,
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Trim a raw form value into a title the backend will accept.
pub fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    Ok(title.to_string())
}
