//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The reorder
//! controller owns the authoritative task list; this store mirrors it for
//! rendering.

use leptos::prelude::*;
use reactive_stores::Store;
use task_reorder::{ReorderOptions, Task};

/// Rendered application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Latest list-level trace line
    pub list_message: String,
    /// Latest applied change set, as a trace line
    pub change_message: String,
    /// Settings bar toggles
    pub options: ReorderOptions,
    /// Task to flash after a drop settles
    pub flash_id: Option<u32>,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, options: ReorderOptions) -> Self {
        Self {
            tasks,
            options,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
