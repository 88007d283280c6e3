//! UI Components
//!
//! Reusable Leptos components.

mod new_task_form;
mod error_banner;
mod filter_bar;
mod task_list;
mod task_row;
mod task_summary;

pub use new_task_form::NewTaskForm;
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use task_summary::TaskSummary;
