#![allow(warnings)]
//! Timeline Visualizer Frontend Entry Point

mod app;
mod commands;
mod components;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use timeline_core::TimelineConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = TimelineConfig::default();
    logging::init(config.log_level);
    log::info!(target: "app", "Starting with storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
