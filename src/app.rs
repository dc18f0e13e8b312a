//! Task Reorder App
//!
//! Root component: wires the reorder controller, the reactive store and the
//! list view together.

use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::LogBuffer;
use task_reorder::{ReorderController, ReorderOptions};

use crate::components::{LogPanel, TaskList};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(options: ReorderOptions, logs: Option<LogBuffer>) -> impl IntoView {
    let controller = ReorderController::new(options);
    let store = Store::new(AppState::new(controller.tasks().to_vec(), options));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(controller, store, logs));

    tracing::info!(?options, "app mounted");

    view! {
        <div class="app-layout">
            <h1>"Reorderable List"</h1>
            <TaskList />
            <LogPanel />
        </div>
    }
}
