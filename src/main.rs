//! To-Do Frontend Entry Point

mod models;
mod error;
mod config;
mod filter;
mod commands;
mod store;
mod context;
mod controller;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting to-do frontend");

    mount_to_body(App);
}
