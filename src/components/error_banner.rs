//! Error Banner Component
//!
//! Single shared region for the latest failure; each action replaces it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_context().store;
    let message = move || store.error().get();

    view! {
        <p class="error" class:hidden=move || message().is_none() role="alert">
            {move || message().unwrap_or_default()}
        </p>
    }
}
