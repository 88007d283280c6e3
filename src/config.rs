//! Client Configuration
//!
//! The only knob is where the task API lives. It can be overridden from
//! `index.html` with `<meta name="todo-api-base" content="...">`.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_BASE: &str = "/api/tasks";
pub const API_BASE_META: &str = "todo-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection URL, without trailing slash
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string() }
    }
}

impl ClientConfig {
    /// Build from an optional override; blank values fall back to the default.
    pub fn with_api_base(api_base: Option<&str>) -> Self {
        match api_base.map(|base| base.trim().trim_end_matches('/')) {
            Some(base) if !base.is_empty() => Self { api_base: base.to_string() },
            _ => Self::default(),
        }
    }

    /// Read the override from the page's `<meta>` tag, if present.
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| {
                document
                    .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|element| element.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        let config = Self::with_api_base(content.as_deref());
        tracing::debug!(api_base = %config.api_base, "client config");
        config
    }
}
