//! New Task Form Component
//!
//! Text input plus submit button for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::controller;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (new_title, set_new_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = new_title.get();

        spawn_local(async move {
            let api = ctx.api();
            if controller::submit_task(&api, &ctx.store, &raw).await {
                set_new_title.set(String::new());
            }
        });
    };

    view! {
        <form class="add-form" on:submit=create_task>
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
