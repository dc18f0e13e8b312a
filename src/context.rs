//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use rolling_logger::LogBuffer;
use task_reorder::{DndEvent, ReorderController, ReorderOptions};

use crate::observer::StoreObserver;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owns the task store; sole writer of the task order
    controller: StoredValue<ReorderController>,
    /// Rendered mirror of controller state
    store: AppStore,
    /// Recent log lines, when the logger could be installed
    logs: StoredValue<Option<LogBuffer>>,
}

impl AppContext {
    pub fn new(controller: ReorderController, store: AppStore, logs: Option<LogBuffer>) -> Self {
        Self {
            controller: StoredValue::new(controller),
            store,
            logs: StoredValue::new(logs),
        }
    }

    /// Run one drag event through the controller
    pub fn dispatch(&self, event: DndEvent) {
        let mut observer = StoreObserver::new(self.store);
        self.controller.update_value(|controller| {
            let outcome = controller.dispatch(event, &mut observer);
            tracing::debug!(?outcome, "drag event dispatched");
        });
    }

    /// Restore the default task order
    pub fn reset(&self) {
        let mut observer = StoreObserver::new(self.store);
        self.controller.update_value(|controller| controller.reset(&mut observer));
    }

    pub fn set_options(&self, options: ReorderOptions) {
        self.controller.update_value(|controller| controller.set_options(options));
    }

    /// Up to `limit` most recent log lines, oldest first
    pub fn recent_logs(&self, limit: usize) -> Vec<String> {
        self.logs.with_value(|logs| {
            let Some(buffer) = logs else {
                return Vec::new();
            };
            let lines = buffer.lines();
            let skip = lines.len().saturating_sub(limit);
            lines.into_iter().skip(skip).map(|line| line.to_string()).collect()
        })
    }
}
