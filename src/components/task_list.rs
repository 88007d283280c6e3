//! Task List Component
//!
//! Rebuilds every row from the filtered view whenever the tasks or the
//! filter change. No keyed diffing.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_context().store;

    let visible = Memo::new(move |_| store.read().visible());

    view! {
        <ul class="task-list">
            {move || visible.get().into_iter().map(|task| view! { <TaskRow task=task /> }).collect_view()}
        </ul>
        <p class="empty" class:hidden=move || !visible.with(|tasks| tasks.is_empty())>
            "No tasks"
        </p>
    }
}
