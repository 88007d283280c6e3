//! UI Actions
//!
//! Each user action calls the API first and only touches the store once the
//! server has confirmed. Failures land in the shared error banner and leave
//! the task cache alone.

use leptos::prelude::*;
use tracing::{debug, info, warn};

use crate::commands::TaskApi;
use crate::filter::Filter;
use crate::models::{validate_title, Task, TaskId};
use crate::store::{AppState, AppStore};

/// Somewhere `AppState` lives and can be edited in place.
///
/// Returns `None` when the state is gone (e.g. the owning view was disposed).
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R>;
}

impl StateCell for AppStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl StateCell for std::cell::RefCell<AppState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
        let mut state = self.borrow_mut();
        Some(f(&mut *state))
    }
}

fn show_error<S: StateCell>(state: &S, message: String) {
    state.with_state(|s| s.set_error(message));
}

/// Fetch everything and replace the cache
pub async fn load_tasks<A, S>(api: &A, state: &S)
where
    A: TaskApi + ?Sized,
    S: StateCell,
{
    state.with_state(AppState::clear_error);
    match api.get_tasks().await {
        Ok(tasks) => {
            info!(count = tasks.len(), "loaded tasks");
            state.with_state(|s| s.tasks.load(tasks));
        }
        Err(err) => {
            warn!(%err, "load failed");
            show_error(state, err.to_string());
        }
    }
}

/// Create a task from the form input.
///
/// Returns `true` when the task was created and the input should be cleared.
pub async fn submit_task<A, S>(api: &A, state: &S, raw_title: &str) -> bool
where
    A: TaskApi + ?Sized,
    S: StateCell,
{
    state.with_state(AppState::clear_error);
    let title = match validate_title(raw_title) {
        Ok(title) => title,
        Err(err) => {
            show_error(state, err.to_string());
            return false;
        }
    };

    match api.add_task(&title).await {
        Ok(task) => {
            debug!(id = task.id, "task created");
            state.with_state(|s| s.tasks.insert_front(task));
            true
        }
        Err(err) => {
            warn!(%err, "add failed");
            show_error(state, err.to_string());
            false
        }
    }
}

/// Push a checkbox change to the server.
///
/// `task` is the row as it was rendered. Returns the checked state the
/// checkbox should show afterwards: the server's value on success, the
/// pre-toggle value on failure.
pub async fn toggle_task<A, S>(api: &A, state: &S, task: &Task, requested: bool) -> bool
where
    A: TaskApi + ?Sized,
    S: StateCell,
{
    state.with_state(AppState::clear_error);
    match api.set_done(task.id, requested).await {
        Ok(updated) => {
            debug!(id = updated.id, done = updated.done, "task updated");
            let done = updated.done;
            state.with_state(|s| s.tasks.replace(updated));
            done
        }
        Err(err) => {
            warn!(id = task.id, %err, "update failed");
            show_error(state, err.to_string());
            task.done
        }
    }
}

pub async fn delete_task<A, S>(api: &A, state: &S, id: TaskId)
where
    A: TaskApi + ?Sized,
    S: StateCell,
{
    state.with_state(AppState::clear_error);
    match api.delete_task(id).await {
        Ok(()) => {
            debug!(id, "task deleted");
            state.with_state(|s| s.tasks.remove(id));
        }
        Err(err) => {
            warn!(id, %err, "delete failed");
            show_error(state, err.to_string());
        }
    }
}

pub fn select_filter<S: StateCell>(state: &S, filter: Filter) {
    debug!(filter = filter.as_str(), "filter changed");
    state.with_state(|s| s.filter = filter);
}
