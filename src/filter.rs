//! Task Filter
//!
//! The three list views and which tasks each one keeps.

use crate::models::Task;

/// Active list filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Open,
    Done,
}

impl Filter {
    /// Button order in the filter bar
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Open, Filter::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Open => "open",
            Filter::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Open => "Open",
            Filter::Done => "Done",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Open => !task.done,
            Filter::Done => task.done,
        }
    }
}
