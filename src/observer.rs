//! Store Observer
//!
//! Mirrors controller notifications into the reactive store.

use leptos::prelude::*;
use task_reorder::controller::changes_json;
use task_reorder::{OrderChange, ReorderObserver, Task, TraceFormatter};

use crate::store::{AppStateStoreFields, AppStore};

/// Milliseconds since page load, for trace timestamps
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or(0.0)
}

pub struct StoreObserver {
    store: AppStore,
    formatter: TraceFormatter,
}

impl StoreObserver {
    pub fn new(store: AppStore) -> Self {
        let formatter = TraceFormatter::from(&store.options().get_untracked());
        Self { store, formatter }
    }
}

impl ReorderObserver for StoreObserver {
    fn trace(&mut self, message: &str) {
        let current = self.store.list_message().get_untracked();
        if let Some(line) = self.formatter.format(&current, message, now_ms()) {
            self.store.list_message().set(line);
        }
    }

    fn changes_applied(&mut self, changes: &[OrderChange], tasks: &[Task]) {
        let message = format!("changes applied: {}", changes_json(changes));
        let current = self.store.change_message().get_untracked();
        if let Some(line) = self.formatter.format(&current, &message, now_ms()) {
            self.store.change_message().set(line);
        }
        self.store.tasks().set(tasks.to_vec());
    }

    fn restored(&mut self, tasks: &[Task]) {
        self.store.tasks().set(tasks.to_vec());
    }

    fn drop_settled(&mut self, task_id: Option<u32>) {
        self.store.flash_id().set(task_id);
    }
}
