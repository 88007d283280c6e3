//! To-Do Frontend App
//!
//! Main application component: add form, filter bar, task list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::HttpTaskApi;
use crate::components::{ErrorBanner, FilterBar, NewTaskForm, TaskList, TaskSummary};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    let ctx = AppContext::new(Store::new(AppState::new()), HttpTaskApi::new(&config));

    // Provide context to all children
    provide_context(ctx);

    // State is rebuilt from the server on every page load
    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            controller::load_tasks(&api, &ctx.store).await;
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Tasks"</h1>

            <NewTaskForm />
            <ErrorBanner />
            <FilterBar />
            <TaskList />
            <TaskSummary />
        </main>
    }
}
