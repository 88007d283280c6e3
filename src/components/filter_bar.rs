//! Filter Bar Component
//!
//! Three exclusive buttons; exactly one carries the `active` class.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller;
use crate::filter::Filter;
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <div class="filters">
            {Filter::ALL.into_iter().map(|mode| {
                let is_active = move || store.filter().get() == mode;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| controller::select_filter(&store, mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
