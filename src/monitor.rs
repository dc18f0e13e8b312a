//! Drag Monitor Bridge
//!
//! Turns drag sensor callbacks into tagged controller events.

use leptos::prelude::*;
use leptos_dragdrop as dnd;
use leptos_dragdrop::{DndMonitor, DndOptions, DragSource, DropTarget};
use task_reorder::{DndEvent, DropEffect, DropTargetData, Edge, ReorderOptions};

use crate::context::AppContext;

pub fn core_edge(edge: dnd::Edge) -> Edge {
    match edge {
        dnd::Edge::Top => Edge::Top,
        dnd::Edge::Bottom => Edge::Bottom,
    }
}

pub fn drop_effect(effect: dnd::DropEffect) -> DropEffect {
    match effect {
        dnd::DropEffect::Move => DropEffect::Move,
        dnd::DropEffect::None => DropEffect::None,
    }
}

pub fn target_data(target: Option<DropTarget>) -> Option<DropTargetData> {
    target.map(|target| DropTargetData {
        data: target.data,
        edge: target.edge.map(core_edge),
    })
}

/// Sensor toggles that follow the app options
pub fn dnd_options(options: &ReorderOptions) -> DndOptions {
    DndOptions {
        sticky: options.sticky,
        can_drop_on_self: options.allow_self_drop,
    }
}

pub fn make_monitor(ctx: AppContext) -> DndMonitor {
    DndMonitor {
        on_drag_start: Callback::new(move |source: DragSource| {
            ctx.dispatch(DndEvent::DragStart { source: source.data });
        }),
        on_drag: Callback::new(move |(source, target): (DragSource, Option<DropTarget>)| {
            ctx.dispatch(DndEvent::DragOver {
                source: source.data,
                target: target_data(target),
            });
        }),
        on_drop: Callback::new(
            move |(source, target, effect): (DragSource, Option<DropTarget>, dnd::DropEffect)| {
                tracing::debug!(task = source.key, effect = ?effect, "drop");
                ctx.dispatch(DndEvent::Drop {
                    source: source.data,
                    target: target_data(target),
                    drop_effect: drop_effect(effect),
                });
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_target_data() {
        let target = DropTarget {
            key: 2,
            data: json!({ "type": "task", "id": 2 }),
            edge: Some(dnd::Edge::Bottom),
        };
        let data = target_data(Some(target)).unwrap();
        assert_eq!(data.edge, Some(Edge::Bottom));
        assert_eq!(data.data, json!({ "type": "task", "id": 2 }));
        assert!(target_data(None).is_none());
    }

    #[test]
    fn test_dnd_options_follow_app_options() {
        let options = ReorderOptions {
            allow_self_drop: true,
            sticky: false,
            ..Default::default()
        };
        assert_eq!(
            dnd_options(&options),
            DndOptions {
                sticky: false,
                can_drop_on_self: true
            }
        );
    }

    #[test]
    fn test_drop_effect() {
        assert_eq!(drop_effect(dnd::DropEffect::None), DropEffect::None);
        assert_eq!(core_edge(dnd::Edge::Top), Edge::Top);
    }
}
