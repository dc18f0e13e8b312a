//! Task Reorder Frontend Entry Point

mod app;
mod components;
mod context;
mod monitor;
mod observer;
mod store;

use app::App;
use leptos::prelude::*;
use task_reorder::ReorderOptions;
use tracing::Level;
use wasm_bindgen::JsValue;

/// Log lines kept in memory for the log panel
const LOG_CAPACITY: usize = 200;

/// `<body data-reorder-options='{"sticky": false}'>` overrides the defaults
const OPTIONS_ATTRIBUTE: &str = "data-reorder-options";

fn load_options() -> ReorderOptions {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(OPTIONS_ATTRIBUTE));

    match raw.as_deref().map(ReorderOptions::from_json) {
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "ignoring {}", OPTIONS_ATTRIBUTE);
            ReorderOptions::default()
        }
        None => ReorderOptions::default(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let logs = match rolling_logger::init_logger("TaskReorder", LOG_CAPACITY, Level::DEBUG, |line| {
        web_sys::console::log_1(&JsValue::from_str(&line.to_string()));
    }) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("logger init failed: {}", e)));
            None
        }
    };

    let options = load_options();
    mount_to_body(move || view! { <App options=options logs=logs.clone() /> });
}
