//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports the
//! closest edge of the drop target under the pointer.

use leptos::prelude::*;
use serde_json::Value;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set so the trailing click can be ignored
const DRAG_END_GRACE_MS: i32 = 100;

/// Edge of a drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

/// Drop effect reported with a drop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEffect {
    /// Released over a drop target
    Move,
    /// Released over nothing
    None,
}

/// Element being dragged, with the data it attached
#[derive(Clone, Debug, PartialEq)]
pub struct DragSource {
    pub key: u32,
    pub data: Value,
}

/// Drop target under the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct DropTarget {
    pub key: u32,
    pub data: Value,
    pub edge: Option<Edge>,
}

/// Sensor behaviour toggles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DndOptions {
    /// Keep the last target while the pointer is over no target
    pub sticky: bool,
    /// Let the dragged element be its own drop target
    pub can_drop_on_self: bool,
}

impl Default for DndOptions {
    fn default() -> Self {
        Self {
            sticky: true,
            can_drop_on_self: false,
        }
    }
}

/// Callbacks fired by the global handlers
#[derive(Clone, Copy)]
pub struct DndMonitor {
    pub on_drag_start: Callback<DragSource>,
    /// Fires on every pointer move while dragging
    pub on_drag: Callback<(DragSource, Option<DropTarget>)>,
    pub on_drop: Callback<(DragSource, Option<DropTarget>, DropEffect)>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<DragSource>>,
    pub dragging_write: WriteSignal<Option<DragSource>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending source (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<DragSource>>,
    pub pending_write: WriteSignal<Option<DragSource>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Last pointer position (client coordinates), for drag previews
    pub pointer_read: ReadSignal<(i32, i32)>,
    pub pointer_write: WriteSignal<(i32, i32)>,
    pub options_read: ReadSignal<DndOptions>,
    pub options_write: WriteSignal<DndOptions>,
}

pub fn create_dnd_signals(options: DndOptions) -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<DragSource>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<DragSource>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let (pointer_read, pointer_write) = signal((0i32, 0i32));
    let (options_read, options_write) = signal(options);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        pointer_read,
        pointer_write,
        options_read,
        options_write,
    }
}

/// Closest allowed edge of a box spanning `top..top + height` to `pointer_y`.
///
/// Ties go to the edge listed first.
pub fn closest_edge(top: f64, height: f64, pointer_y: f64, allowed: &[Edge]) -> Option<Edge> {
    let distance = |edge: &Edge| match edge {
        Edge::Top => (pointer_y - top).abs(),
        Edge::Bottom => (top + height - pointer_y).abs(),
    };
    allowed
        .iter()
        .copied()
        .fold(None, |best: Option<Edge>, edge| match best {
            Some(current) if distance(&current) <= distance(&edge) => Some(current),
            _ => Some(edge),
        })
}

/// Whether the pointer moved far enough from the press to start a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_GRACE_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, key: u32, data: Value) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
        }
        dnd.pending_write.set(Some(DragSource { key, data: data.clone() }));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Create mousemove handler for drop targets - tracks the closest edge.
///
/// Element handlers run before the document handler, so `on_drag` always
/// sees the updated target.
pub fn make_on_target_mousemove(dnd: DndSignals, key: u32, data: Value) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.get_untracked() else {
            return;
        };
        let options = dnd.options_read.get_untracked();

        if dragging.key == key && !options.can_drop_on_self {
            if !options.sticky {
                dnd.drop_target_write.set(None);
            }
            return;
        }

        let edge = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| {
                let rect = el.get_bounding_client_rect();
                closest_edge(rect.top(), rect.height(), ev.client_y() as f64, &[Edge::Top, Edge::Bottom])
            });

        let unchanged = dnd
            .drop_target_read
            .with_untracked(|current| matches!(current, Some(t) if t.key == key && t.edge == edge));
        if !unchanged {
            dnd.drop_target_write.set(Some(DropTarget { key, data: data.clone(), edge }));
        }
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_target_mouseleave(dnd: DndSignals, key: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_none() {
            return;
        }
        if dnd.options_read.get_untracked().sticky {
            return;
        }
        let leaving_current = dnd
            .drop_target_read
            .with_untracked(|current| matches!(current, Some(t) if t.key == key));
        if leaving_current {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mousemove - starts drag if moved enough, then reports drag moves
pub fn bind_global_mousemove(dnd: DndSignals, monitor: DndMonitor) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let position = (ev.client_x(), ev.client_y());
        dnd.pointer_write.set(position);

        if let Some(source) = dnd.dragging_read.get_untracked() {
            monitor.on_drag.run((source, dnd.drop_target_read.get_untracked()));
            return;
        }

        // Pending drag that hasn't started yet
        if let Some(pending) = dnd.pending_read.get_untracked() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, position) {
                dnd.pending_write.set(None);
                dnd.dragging_write.set(Some(pending.clone()));
                monitor.on_drag_start.run(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup(dnd: DndSignals, monitor: DndMonitor) {
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_write.set(None);

        match dragging {
            Some(source) => {
                let effect = if target.is_some() { DropEffect::Move } else { DropEffect::None };
                end_drag(&dnd);
                monitor.on_drop.run((source, target, effect));
            }
            // Not dragging - click event will fire naturally on the element
            None => end_drag(&dnd),
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd, monitor);
}
