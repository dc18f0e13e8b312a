//! Task Store
//!
//! Holds the ordered task collection. `apply_changes`, `restore` and `reset`
//! are the only writers, and each swaps in a fully merged list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ReorderError, ReorderResult};
use crate::models::{default_tasks, OrderChange, Task};

/// Immutable copy of the task list taken at drag start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<[Task]>);

impl Snapshot {
    pub fn tasks(&self) -> &[Task] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Store seeded with the default tasks
    pub fn new() -> Self {
        Self { tasks: default_tasks() }
    }

    /// Store over an arbitrary list; orders must be exactly 1..=N
    pub fn from_tasks(mut tasks: Vec<Task>) -> ReorderResult<Self> {
        tasks.sort_by_key(|task| task.order);
        check_dense(&tasks)?;
        Ok(Self { tasks })
    }

    /// Current tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Merge order changes by id and re-sort.
    ///
    /// All or nothing: a change list that would leave orders other than
    /// exactly 1..=N is rejected and the store is untouched.
    pub fn apply_changes(&mut self, changes: &[OrderChange]) -> ReorderResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let by_id: HashMap<u32, u32> = changes.iter().map(|c| (c.id, c.order)).collect();
        if let Some(unknown) = by_id.keys().find(|id| self.index_of(**id).is_none()) {
            return Err(ReorderError::InvalidChanges(format!("unknown task id {}", unknown)));
        }

        let mut merged: Vec<Task> = self
            .tasks
            .iter()
            .map(|task| match by_id.get(&task.id) {
                Some(&order) => Task { order, ..task.clone() },
                None => task.clone(),
            })
            .collect();
        merged.sort_by_key(|task| task.order);
        check_dense(&merged)?;

        self.tasks = merged;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.tasks.as_slice().into())
    }

    /// Replace current state wholesale with a captured snapshot
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.tasks = snapshot.tasks().to_vec();
    }

    /// Back to the fixed default ordering
    pub fn reset(&mut self) {
        self.tasks = default_tasks();
    }
}

/// Sorted orders must be exactly 1..=N
fn check_dense(tasks: &[Task]) -> ReorderResult<()> {
    for (index, task) in tasks.iter().enumerate() {
        if task.order != index as u32 + 1 {
            return Err(ReorderError::InvalidChanges(format!(
                "task {} has order {} at position {}",
                task.id,
                task.order,
                index + 1
            )));
        }
    }
    Ok(())
}
