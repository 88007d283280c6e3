//! Task Row Component
//!
//! Checkbox, title and delete button for one task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::controller;
use crate::models::Task;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id;
    let done = task.done;
    let title = task.title.clone();
    let title_class = if done { "task-title done" } else { "task-title" };
    let rendered = StoredValue::new(task);

    let on_toggle = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        // The browser has already flipped the box
        let requested = input.checked();
        let task = rendered.get_value();

        spawn_local(async move {
            let api = ctx.api();
            let checked = controller::toggle_task(&api, &ctx.store, &task, requested).await;
            input.set_checked(checked);
        });
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            let api = ctx.api();
            controller::delete_task(&api, &ctx.store, id).await;
        });
    };

    view! {
        <li class="task-item">
            <div class="task-left">
                <input type="checkbox" prop:checked=done on:change=on_toggle />
                <span class=title_class>{title}</span>
            </div>
            <div class="task-right">
                <button type="button" class="btn-delete" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}
