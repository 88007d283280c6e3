//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpTaskApi;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Tasks, filter and error banner
    pub store: AppStore,
    /// Task API client
    api: StoredValue<HttpTaskApi>,
}

impl AppContext {
    pub fn new(store: AppStore, api: HttpTaskApi) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    /// Owned copy of the API client for use inside `spawn_local`
    pub fn api(&self) -> HttpTaskApi {
        self.api.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
