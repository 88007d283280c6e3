//! Global Application State Store
//!
//! `TaskStore` mirrors the last known server state. It is wrapped, together
//! with the active filter and the error banner text, in a Leptos
//! `reactive_stores` store for fine-grained reactivity.

use reactive_stores::Store;

use crate::filter::Filter;
use crate::models::{Task, TaskId};

/// Ordered task cache, at most one entry per id
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Replace everything with `tasks`, newest first.
    ///
    /// The sort is stable, so tasks sharing a timestamp keep server order.
    pub fn load(&mut self, mut tasks: Vec<Task>) {
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        self.tasks = tasks;
    }

    /// Prepend a freshly created task without re-sorting
    pub fn insert_front(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Overwrite the entry with the same id in place. Unknown ids are ignored.
    pub fn replace(&mut self, updated: Task) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *task = updated;
        }
    }

    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Tasks kept by `filter`, in store order
    pub fn filtered(&self, filter: Filter) -> Vec<Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// `(open, done)` totals
    pub fn counts(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|task| task.done).count();
        (self.tasks.len() - done, done)
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last known server state
    pub tasks: TaskStore,
    /// Active list filter
    pub filter: Filter,
    /// Text of the shared error banner (None = hidden)
    pub error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Rows for the current filter
    pub fn visible(&self) -> Vec<Task> {
        self.tasks.filtered(self.filter)
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashSet;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap()
    }

    fn task(id: TaskId, title: &str, done: bool, minute: u32) -> Task {
        Task { id, title: title.to_string(), done, created_at: at(minute) }
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|task| task.id).collect()
    }

    fn mixed_store() -> TaskStore {
        let mut store = TaskStore::default();
        store.load(vec![
            task(1, "A", false, 1),
            task(2, "B", true, 2),
            task(3, "C", false, 3),
            task(4, "D", true, 4),
            task(5, "E", false, 5),
        ]);
        store
    }

    #[test]
    fn test_load_sorts_newest_first() {
        let mut store = TaskStore::default();
        store.load(vec![task(1, "old", false, 1), task(3, "new", false, 30), task(2, "mid", true, 10)]);

        assert_eq!(ids(&store.filtered(Filter::All)), vec![3, 2, 1]);
    }

    #[test]
    fn test_load_keeps_server_order_on_ties() {
        let mut store = TaskStore::default();
        store.load(vec![task(1, "a", false, 5), task(2, "b", false, 5), task(3, "c", false, 9)]);

        assert_eq!(ids(&store.filtered(Filter::All)), vec![3, 1, 2]);
    }

    #[test]
    fn test_load_replaces_previous_content() {
        let mut store = mixed_store();
        store.load(vec![task(9, "only", false, 0)]);

        assert_eq!(store.len(), 1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_insert_front_ignores_created_at() {
        let mut store = mixed_store();
        store.insert_front(task(6, "older than all", false, 0));

        assert_eq!(ids(&store.filtered(Filter::All)), vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_replace_in_place() {
        let mut store = mixed_store();
        store.replace(task(3, "C", true, 3));

        assert_eq!(ids(&store.filtered(Filter::All)), vec![5, 4, 3, 2, 1]);
        assert!(store.get(3).unwrap().done);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut store = mixed_store();
        let before = store.clone();
        store.replace(task(42, "ghost", true, 0));

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove() {
        let mut store = mixed_store();
        store.remove(2);

        assert!(store.get(2).is_none());
        for filter in Filter::ALL {
            assert!(store.filtered(filter).iter().all(|task| task.id != 2));
        }

        store.remove(2);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_filtered_open_and_done_partition_all() {
        let store = mixed_store();
        let open: HashSet<_> = ids(&store.filtered(Filter::Open)).into_iter().collect();
        let done: HashSet<_> = ids(&store.filtered(Filter::Done)).into_iter().collect();
        let all: HashSet<_> = ids(&store.filtered(Filter::All)).into_iter().collect();

        assert!(open.is_disjoint(&done));
        assert_eq!(open.union(&done).copied().collect::<HashSet<_>>(), all);
    }

    #[test]
    fn test_filtered_preserves_order_and_store() {
        let store = mixed_store();
        let before = store.clone();

        assert_eq!(ids(&store.filtered(Filter::Open)), vec![5, 3, 1]);
        assert_eq!(ids(&store.filtered(Filter::Done)), vec![4, 2]);
        assert_eq!(store, before);
    }

    #[test]
    fn test_two_task_scenario() {
        let mut store = TaskStore::default();
        store.load(vec![task(1, "A", false, 1), task(2, "B", true, 2)]);

        assert_eq!(store.filtered(Filter::Open), vec![task(1, "A", false, 1)]);
        assert_eq!(store.filtered(Filter::Done), vec![task(2, "B", true, 2)]);
    }

    #[test]
    fn test_counts() {
        assert_eq!(mixed_store().counts(), (3, 2));
        assert_eq!(TaskStore::default().counts(), (0, 0));
    }

    #[test]
    fn test_app_state_visible_follows_filter() {
        let mut state = AppState::new();
        state.tasks = mixed_store();
        assert_eq!(state.visible().len(), 5);

        state.filter = Filter::Done;
        assert_eq!(ids(&state.visible()), vec![4, 2]);
    }
}
