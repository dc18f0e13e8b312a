//! Property tests for reorder resolution and the task store.
//!
//! 1. Resolve is a permutation of the same ids.
//! 2. Orders after resolve are exactly 1..=N.
//! 3. Applying the minimal diff reproduces the resolved list.
//! 4. Resolve is deterministic.
//! 5. Failed drops always land back on the drag-start snapshot.
//! 6. Committed orders survive later drops that have no drag start.
//! 7. Reset restores the default ordering after any history.

use proptest::prelude::*;
use serde_json::{json, Value};
use task_reorder::{
    default_tasks, resolve, resolve_changes, DndEvent, DropEffect, DropTargetData, Edge,
    ReorderController, ReorderObserver, ReorderOptions, Task, TaskStore,
};

struct Quiet;

impl ReorderObserver for Quiet {
    fn trace(&mut self, _message: &str) {}
}

fn task_list(len: usize) -> Vec<Task> {
    (1..=len as u32).map(|id| Task::new(id, format!("Item {}", id), id)).collect()
}

fn edge_strategy() -> impl Strategy<Value = Option<Edge>> {
    prop_oneof![Just(None), Just(Some(Edge::Top)), Just(Some(Edge::Bottom))]
}

/// List length plus valid start and target indices
fn move_strategy() -> impl Strategy<Value = (usize, usize, usize, Option<Edge>)> {
    (1usize..=12).prop_flat_map(|len| (Just(len), 0..len, 0..len, edge_strategy()))
}

#[derive(Debug, Clone)]
enum FailedDrop {
    NoTarget,
    ForeignTarget,
    UnknownTarget,
}

fn failed_drop_strategy() -> impl Strategy<Value = FailedDrop> {
    prop_oneof![
        Just(FailedDrop::NoTarget),
        Just(FailedDrop::ForeignTarget),
        Just(FailedDrop::UnknownTarget),
    ]
}

fn task_value(id: u32) -> Value {
    json!({ "type": "task", "id": id })
}

fn failed_drop_event(kind: &FailedDrop, dragged: u32) -> DndEvent {
    let (source, target) = match kind {
        FailedDrop::NoTarget => (task_value(dragged), None),
        FailedDrop::ForeignTarget => (
            task_value(dragged),
            Some(DropTargetData { data: json!({ "type": "card", "id": 1 }), edge: None }),
        ),
        FailedDrop::UnknownTarget => (
            task_value(dragged),
            Some(DropTargetData { data: task_value(1000), edge: Some(Edge::Bottom) }),
        ),
    };
    DndEvent::Drop { source, target, drop_effect: DropEffect::None }
}

proptest! {
    #[test]
    fn resolve_is_permutation((len, start, target, edge) in move_strategy()) {
        let list = task_list(len);
        let result = resolve(&list, start, target, edge);

        let mut ids: Vec<u32> = result.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        let expected: Vec<u32> = (1..=len as u32).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn resolve_orders_are_dense((len, start, target, edge) in move_strategy()) {
        let result = resolve(&task_list(len), start, target, edge);
        let orders: Vec<u32> = result.iter().map(|t| t.order).collect();
        let expected: Vec<u32> = (1..=len as u32).collect();
        prop_assert_eq!(orders, expected);
    }

    #[test]
    fn diff_reproduces_resolved_list((len, start, target, edge) in move_strategy()) {
        let list = task_list(len);
        let expected = resolve(&list, start, target, edge);
        let changes = resolve_changes(&list, start, target, edge);

        let mut store = TaskStore::from_tasks(list).unwrap();
        prop_assert!(store.apply_changes(&changes).is_ok());
        prop_assert_eq!(store.tasks(), expected.as_slice());
    }

    #[test]
    fn resolve_is_deterministic((len, start, target, edge) in move_strategy()) {
        let list = task_list(len);
        prop_assert_eq!(resolve(&list, start, target, edge), resolve(&list, start, target, edge));
        prop_assert_eq!(
            resolve_changes(&list, start, target, edge),
            resolve_changes(&list, start, target, edge)
        );
    }

    #[test]
    fn self_drop_has_empty_diff(len in 1usize..=12, index in 0usize..12, edge in edge_strategy()) {
        let index = index % len;
        prop_assert!(resolve_changes(&task_list(len), index, index, edge).is_empty());
    }

    #[test]
    fn failed_drops_restore_snapshot(
        dragged in 1u32..=4,
        moves in proptest::collection::vec((1u32..=4, edge_strategy()), 0..6),
        failures in proptest::collection::vec(failed_drop_strategy(), 1..6),
    ) {
        let mut controller = ReorderController::new(ReorderOptions::default());
        let mut quiet = Quiet;
        let snapshot = controller.tasks().to_vec();

        for failure in &failures {
            controller.dispatch(DndEvent::DragStart { source: task_value(dragged) }, &mut quiet);
            for (target, edge) in &moves {
                controller.dispatch(
                    DndEvent::DragOver {
                        source: task_value(dragged),
                        target: Some(DropTargetData { data: task_value(*target), edge: *edge }),
                    },
                    &mut quiet,
                );
            }
            controller.dispatch(failed_drop_event(failure, dragged), &mut quiet);
            prop_assert_eq!(controller.tasks(), snapshot.as_slice());
        }
    }

    #[test]
    fn committed_order_survives_stray_drops(
        dragged in 1u32..=4,
        moves in proptest::collection::vec((1u32..=4, edge_strategy()), 1..6),
        failures in proptest::collection::vec(failed_drop_strategy(), 1..4),
    ) {
        let mut controller = ReorderController::new(ReorderOptions::default());
        let mut quiet = Quiet;

        controller.dispatch(DndEvent::DragStart { source: task_value(dragged) }, &mut quiet);
        for (target, edge) in &moves {
            controller.dispatch(
                DndEvent::DragOver {
                    source: task_value(dragged),
                    target: Some(DropTargetData { data: task_value(*target), edge: *edge }),
                },
                &mut quiet,
            );
        }
        controller.dispatch(
            DndEvent::Drop {
                source: task_value(dragged),
                target: Some(DropTargetData { data: task_value(dragged), edge: None }),
                drop_effect: DropEffect::Move,
            },
            &mut quiet,
        );
        let committed = controller.tasks().to_vec();

        for failure in &failures {
            controller.dispatch(failed_drop_event(failure, dragged), &mut quiet);
            controller.dispatch(
                DndEvent::Drop {
                    source: json!({ "type": "file" }),
                    target: None,
                    drop_effect: DropEffect::None,
                },
                &mut quiet,
            );
            prop_assert_eq!(controller.tasks(), committed.as_slice());
        }
    }

    #[test]
    fn reset_restores_defaults(
        moves in proptest::collection::vec((1u32..=4, 1u32..=4, edge_strategy()), 0..10),
    ) {
        let mut controller = ReorderController::new(ReorderOptions { allow_self_drop: true, ..Default::default() });
        let mut quiet = Quiet;

        for (dragged, target, edge) in &moves {
            controller.dispatch(DndEvent::DragStart { source: task_value(*dragged) }, &mut quiet);
            controller.dispatch(
                DndEvent::DragOver {
                    source: task_value(*dragged),
                    target: Some(DropTargetData { data: task_value(*target), edge: *edge }),
                },
                &mut quiet,
            );
        }
        controller.reset(&mut quiet);
        let expected = default_tasks();
        prop_assert_eq!(controller.tasks(), expected.as_slice());
    }
}

#[test]
fn documented_example() {
    let list = default_tasks();
    let names: Vec<String> = resolve(&list, 0, 2, Some(Edge::Bottom))
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["Item 2", "Item 3", "Item 1", "Item 4"]);
}
