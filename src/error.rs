//! Client Errors
//!
//! One error kind per API operation, plus local form validation.

use thiserror::Error;

pub const LOAD_FAILED: &str = "Failed to load tasks";
pub const ADD_FAILED: &str = "Failed to add task";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_FAILED: &str = "Failed to delete task";

/// A request against the task API failed.
///
/// Each variant carries the server-supplied message when there was one;
/// `Display` falls back to a fixed per-operation text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", message_or(.0, LOAD_FAILED))]
    Load(Option<String>),
    #[error("{}", message_or(.0, ADD_FAILED))]
    Add(Option<String>),
    #[error("{}", message_or(.0, UPDATE_FAILED))]
    Update(Option<String>),
    #[error("{}", message_or(.0, DELETE_FAILED))]
    Delete(Option<String>),
}

fn message_or<'a>(msg: &'a Option<String>, fallback: &'a str) -> &'a str {
    msg.as_deref().unwrap_or(fallback)
}

/// Rejected locally before any request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        assert_eq!(ApiError::Load(None).to_string(), "Failed to load tasks");
        assert_eq!(ApiError::Add(None).to_string(), "Failed to add task");
        assert_eq!(ApiError::Update(None).to_string(), "Failed to update task");
        assert_eq!(ApiError::Delete(None).to_string(), "Failed to delete task");
    }

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Update(Some("not found".to_string()));
        assert_eq!(err.to_string(), "not found");
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(ValidationError::TitleRequired.to_string(), "Title is required");
    }
}
