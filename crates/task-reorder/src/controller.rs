//! Drag Event Controller
//!
//! Single entry point for drag events. Drag-over resolves against the
//! current list and commits the diff immediately; drop only validates and
//! either keeps that state or restores the drag-start snapshot.

use serde_json::Value;

use crate::error::{ReorderError, ReorderResult, TaskRole};
use crate::models::{Edge, OrderChange, Task};
use crate::options::ReorderOptions;
use crate::payload::DndPayload;
use crate::resolver::resolve_changes;
use crate::store::{Snapshot, TaskStore};

/// Drop target as reported by the drag sensor
#[derive(Debug, Clone, PartialEq)]
pub struct DropTargetData {
    pub data: Value,
    pub edge: Option<Edge>,
}

/// Drop effect descriptor reported with a drop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropEffect {
    #[default]
    Move,
    None,
}

impl DropEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropEffect::Move => "move",
            DropEffect::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DndEvent {
    DragStart {
        source: Value,
    },
    DragOver {
        source: Value,
        target: Option<DropTargetData>,
    },
    Drop {
        source: Value,
        target: Option<DropTargetData>,
        drop_effect: DropEffect,
    },
}

/// What a dispatched event did to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Source was not a task; event not monitored
    Ignored,
    SnapshotTaken,
    Reordered(Vec<OrderChange>),
    Unchanged,
    /// Drag-over could not be resolved; nothing changed
    Skipped(ReorderError),
    /// Drop accepted; changes made while dragging are kept
    Committed { task_id: u32 },
    RolledBack(ReorderError),
}

/// Presentation hooks, notified after each handled event
pub trait ReorderObserver {
    fn trace(&mut self, message: &str);

    fn changes_applied(&mut self, _changes: &[OrderChange], _tasks: &[Task]) {}

    fn restored(&mut self, _tasks: &[Task]) {}

    /// Drag finished over the given task (used for the post-move flash)
    fn drop_settled(&mut self, _task_id: Option<u32>) {}
}

pub struct ReorderController {
    store: TaskStore,
    snapshot: Option<Snapshot>,
    options: ReorderOptions,
}

impl ReorderController {
    pub fn new(options: ReorderOptions) -> Self {
        Self {
            store: TaskStore::new(),
            snapshot: None,
            options,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ReorderOptions) {
        self.options = options;
    }

    /// Snapshot of the drag in progress, if any
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn dispatch(&mut self, event: DndEvent, observer: &mut dyn ReorderObserver) -> DispatchOutcome {
        match event {
            DndEvent::DragStart { source } => self.drag_start(&source, observer),
            DndEvent::DragOver { source, target } => self.drag_over(&source, target.as_ref(), observer),
            DndEvent::Drop {
                source,
                target,
                drop_effect,
            } => self.drop(&source, target.as_ref(), drop_effect, observer),
        }
    }

    /// Restore the default ordering and forget any drag snapshot
    pub fn reset(&mut self, observer: &mut dyn ReorderObserver) {
        self.store.reset();
        self.snapshot = None;
        tracing::info!("task list reset");
        observer.restored(self.store.tasks());
        observer.trace("reset tasks");
    }

    fn drag_start(&mut self, source: &Value, observer: &mut dyn ReorderObserver) -> DispatchOutcome {
        let Ok(payload) = DndPayload::parse(source) else {
            return DispatchOutcome::Ignored;
        };

        self.snapshot = Some(self.store.snapshot());
        tracing::debug!(task_id = payload.task_id(), "drag start, snapshot taken");
        observer.trace(&format!("drag start {}", payload.task_id()));
        DispatchOutcome::SnapshotTaken
    }

    fn drag_over(
        &mut self,
        source: &Value,
        target: Option<&DropTargetData>,
        observer: &mut dyn ReorderObserver,
    ) -> DispatchOutcome {
        if DndPayload::parse(source).is_err() {
            return DispatchOutcome::Ignored;
        }

        let found = match self.locate(source, target) {
            Ok(found) => found,
            Err(err) => {
                observer.trace(&format!("drag over: {}", err));
                return DispatchOutcome::Skipped(err);
            }
        };

        if found.start_index == found.target_index && !self.options.allow_self_drop {
            observer.trace("drag over: own item");
            return DispatchOutcome::Unchanged;
        }

        let changes = resolve_changes(self.store.tasks(), found.start_index, found.target_index, found.edge);
        if changes.is_empty() {
            observer.trace("drag over: no changes");
            return DispatchOutcome::Unchanged;
        }

        if let Err(err) = self.store.apply_changes(&changes) {
            tracing::warn!(error = %err, "resolved changes rejected by store");
            observer.trace(&format!("drag over: {}", err));
            return DispatchOutcome::Skipped(err);
        }

        tracing::info!(count = changes.len(), "order changes applied");
        observer.trace(&format!("drag over: found changes: {}", changes_json(&changes)));
        observer.changes_applied(&changes, self.store.tasks());
        DispatchOutcome::Reordered(changes)
    }

    fn drop(
        &mut self,
        source: &Value,
        target: Option<&DropTargetData>,
        drop_effect: DropEffect,
        observer: &mut dyn ReorderObserver,
    ) -> DispatchOutcome {
        let Ok(dragged) = DndPayload::parse(source) else {
            return DispatchOutcome::Ignored;
        };

        let outcome = match self.locate(source, target) {
            Ok(found) => {
                self.snapshot = None;
                tracing::debug!(effect = drop_effect.as_str(), "drop accepted");
                observer.trace("drop: keeping changes from drag");
                DispatchOutcome::Committed { task_id: found.dragged_id }
            }
            Err(err) => {
                self.rollback(observer);
                tracing::warn!(error = %err, "drop rejected, rolled back");
                observer.trace(&format!("drop: {}, rolled back", err));
                DispatchOutcome::RolledBack(err)
            }
        };

        observer.drop_settled(Some(dragged.task_id()));
        outcome
    }

    /// Restore the snapshot of the current drag; a drop with no drag start
    /// of its own leaves the list alone
    fn rollback(&mut self, observer: &mut dyn ReorderObserver) {
        if let Some(snapshot) = self.snapshot.take() {
            self.store.restore(&snapshot);
            observer.restored(self.store.tasks());
        }
    }

    /// Validate both payloads and find their indices in the current list
    fn locate(
        &self,
        source: &Value,
        target: Option<&DropTargetData>,
    ) -> ReorderResult<Located> {
        let target = target.ok_or(ReorderError::NoTarget)?;
        let dragged = DndPayload::parse(source)
            .map_err(|_| ReorderError::ForeignPayload("dragged item".to_string()))?;
        let dropped = DndPayload::parse(&target.data).map_err(|err| {
            tracing::debug!(error = %err, "foreign drop target");
            ReorderError::ForeignPayload("target item".to_string())
        })?;

        let start_index = self.store.index_of(dragged.task_id()).ok_or(ReorderError::NotFound {
            role: TaskRole::Dragged,
            id: dragged.task_id(),
        })?;
        let target_index = self.store.index_of(dropped.task_id()).ok_or(ReorderError::NotFound {
            role: TaskRole::Target,
            id: dropped.task_id(),
        })?;

        Ok(Located {
            dragged_id: dragged.task_id(),
            start_index,
            target_index,
            edge: target.edge,
        })
    }
}

/// Validated drag pair resolved against the current list
struct Located {
    dragged_id: u32,
    start_index: usize,
    target_index: usize,
    edge: Option<Edge>,
}

/// JSON rendering of a change list for trace lines
pub fn changes_json(changes: &[OrderChange]) -> String {
    serde_json::to_string(changes).unwrap_or_default()
}
