//! Task API Bindings
//!
//! Frontend bindings to the `/api/tasks` backend. `TaskApi` is the seam the
//! controller talks to; `HttpTaskApi` is the fetch-based implementation.
//! Response decoding is kept free of browser types so it can be unit tested.

mod task;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{ErrorBody, Task, TaskId};

pub use task::HttpTaskApi;

/// Request/response operations against the task collection.
///
/// Every call is a single attempt: no retries, no timeout.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Fetch the whole collection
    async fn get_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Create a task and return the server copy
    async fn add_task(&self, title: &str) -> Result<Task, ApiError>;

    /// Set the completion flag and return the server copy
    async fn set_done(&self, id: TaskId, done: bool) -> Result<Task, ApiError>;

    /// Remove a task
    async fn delete_task(&self, id: TaskId) -> Result<(), ApiError>;
}

/// Constructor for one of the `ApiError` variants
pub type ErrorKind = fn(Option<String>) -> ApiError;

// ========================
// Response Decoding
// ========================

/// Pull the `error` field out of a non-2xx body, if the body has one
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.is_empty())
}

fn invalid_response(kind: ErrorKind, err: serde_json::Error) -> ApiError {
    kind(Some(format!("invalid response: {err}")))
}

pub fn decode_task_list(ok: bool, body: &str) -> Result<Vec<Task>, ApiError> {
    if !ok {
        return Err(ApiError::Load(error_message(body)));
    }
    serde_json::from_str(body).map_err(|e| invalid_response(ApiError::Load, e))
}

pub fn decode_task(ok: bool, body: &str, kind: ErrorKind) -> Result<Task, ApiError> {
    if !ok {
        return Err(kind(error_message(body)));
    }
    serde_json::from_str(body).map_err(|e| invalid_response(kind, e))
}

/// The delete body is ignored on success, whatever it contains
pub fn decode_delete(ok: bool, body: &str) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::Delete(error_message(body)))
    }
}
