//! Log Panel Component
//!
//! Collapsible view of the most recent log lines.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

const LOG_PANEL_LINES: usize = 30;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Refresh whenever a list trace line is written
    let lines = move || {
        store.list_message().track();
        ctx.recent_logs(LOG_PANEL_LINES).join("\n")
    };

    view! {
        <details class="log-panel">
            <summary>"Log"</summary>
            <pre>{lines}</pre>
        </details>
    }
}
