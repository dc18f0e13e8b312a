//! Reorder Resolver
//!
//! Pure reorder-with-edge over an ordered task list. Cheap enough (O(N)) to
//! run on every drag-over event.

use crate::models::{Edge, OrderChange, Task};

/// Index the dragged task lands on once it has been removed from the list.
///
/// `Bottom` inserts after the target, `Top` and `None` insert before it.
/// Moving forward shifts the target one slot left after the removal.
pub fn destination_index(start_index: usize, target_index: usize, edge: Option<Edge>) -> usize {
    if start_index == target_index {
        return start_index;
    }

    let after = edge == Some(Edge::Bottom);
    if start_index < target_index {
        if after { target_index } else { target_index - 1 }
    } else if after {
        target_index + 1
    } else {
        target_index
    }
}

/// Move the task at `start_index` next to `target_index` and renumber orders.
///
/// Both indices must be in range; callers report "not found" before calling.
pub fn resolve(list: &[Task], start_index: usize, target_index: usize, edge: Option<Edge>) -> Vec<Task> {
    debug_assert!(start_index < list.len() && target_index < list.len());

    let mut result = list.to_vec();
    let moved = result.remove(start_index);
    result.insert(destination_index(start_index, target_index, edge), moved);

    for (index, task) in result.iter_mut().enumerate() {
        task.order = index as u32 + 1;
    }
    result
}

/// Positional diff: only entries whose id or order changed at that slot.
pub fn diff_changes(previous: &[Task], next: &[Task]) -> Vec<OrderChange> {
    next.iter()
        .zip(previous)
        .filter(|(new, old)| new.id != old.id || new.order != old.order)
        .map(|(new, _)| OrderChange { id: new.id, order: new.order })
        .collect()
}

/// Resolve and reduce to the minimal change set for the store.
pub fn resolve_changes(
    list: &[Task],
    start_index: usize,
    target_index: usize,
    edge: Option<Edge>,
) -> Vec<OrderChange> {
    let next = resolve(list, start_index, target_index, edge);
    diff_changes(list, &next)
}
