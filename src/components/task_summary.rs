//! Task Summary Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Open/done totals across the whole cache, regardless of filter
#[component]
pub fn TaskSummary() -> impl IntoView {
    let store = use_app_context().store;
    let counts = move || store.tasks().read().counts();

    view! {
        <p class="task-count">
            {move || {
                let (open, done) = counts();
                format!("{open} open · {done} done")
            }}
        </p>
    }
}
