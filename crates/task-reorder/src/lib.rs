//! Task Reorder Core
//!
//! Layered like the rest of the app:
//! - models: tasks, order changes, edges
//! - resolver: pure reorder-with-edge and minimal diff
//! - store: the ordered task collection (single writer)
//! - payload: "is this a task" capability check for drag data
//! - controller: tagged drag event dispatch with rollback
//! - visual / trace / options: presentation helpers the UI observes

mod error;
mod models;
mod options;
mod payload;
mod resolver;
mod store;
mod trace;
mod visual;

pub mod controller;

pub use error::{ReorderError, ReorderResult, TaskRole};
pub use models::{default_tasks, Edge, OrderChange, Task};
pub use options::ReorderOptions;
pub use payload::{task_payload, DndPayload};
pub use resolver::{destination_index, diff_changes, resolve, resolve_changes};
pub use store::{Snapshot, TaskStore};
pub use trace::TraceFormatter;
pub use visual::ItemDragState;

pub use controller::{
    DispatchOutcome, DndEvent, DropEffect, DropTargetData, ReorderController, ReorderObserver,
};
