//! List Item Component
//!
//! One draggable task row. It is both a drag source and a drop target.

use gloo_timers::callback::Timeout;
use leptos::html::Li;
use leptos::prelude::*;
use task_reorder::{task_payload, ItemDragState, Task, TraceFormatter};

use crate::monitor::core_edge;
use crate::observer::now_ms;
use crate::store::{use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// How long a moved item stays highlighted
const FLASH_MS: u32 = 700;

/// Element the item is wired to. A row without its node is a wiring bug.
fn anchor<T>(node: Option<T>) -> T {
    node.expect("list item element missing")
}

#[component]
pub fn ListItem(task: Task, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let node_ref = NodeRef::<Li>::new();

    let id = task.id;
    let name = task.name.clone();
    let payload = task_payload(&task);

    // Visual state follows the sensor signals
    let state = Memo::new(move |prev: Option<&ItemDragState>| {
        let prev = prev.copied().unwrap_or_default();
        let pending = dnd.pending_read.with(|p| p.as_ref().map(|s| s.key));
        let dragging = dnd.dragging_read.with(|d| d.as_ref().map(|s| s.key));
        let over = dnd
            .drop_target_read
            .with(|t| t.as_ref().filter(|t| t.key == id).map(|t| t.edge.map(core_edge)));

        match (dragging, over) {
            (None, _) if pending == Some(id) => prev.preview(),
            (None, _) => prev.drop(),
            (Some(_), Some(edge)) => match prev {
                ItemDragState::DraggingOver(_) => prev.drag(edge),
                _ => prev.drag_enter(edge),
            },
            (Some(source), None) if source == id => prev.drag_start(),
            (Some(_), None) => prev.drag_leave(),
        }
    });

    // Per-item trace line
    let (message, set_message) = signal(String::new());
    Effect::new(move |prev: Option<ItemDragState>| {
        let current = state.get();
        if let Some(label) = prev.and_then(|prev| ItemDragState::transition_label(prev, current)) {
            let formatter = TraceFormatter::from(&store.options().get_untracked());
            if let Some(line) = formatter.format(&message.get_untracked(), &label, now_ms()) {
                set_message.set(line);
            }
        }
        current
    });

    // Post-move flash once a drop settles on this task
    Effect::new(move |_| {
        if store.flash_id().get() != Some(id) {
            return;
        }
        let element = anchor(node_ref.get());
        let _ = element.set_attribute("data-flash", "");
        Timeout::new(FLASH_MS, move || {
            let _ = element.remove_attribute("data-flash");
        })
        .forget();
        store.flash_id().set(None);
    });

    let on_mousedown = make_on_mousedown(dnd, id, payload.clone());
    let on_mousemove = make_on_target_mousemove(dnd, id, payload);
    let on_mouseleave = make_on_target_mouseleave(dnd, id);

    let on_click = move |_| {
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        tracing::info!(task_id = id, name = %name, "item clicked");
    };

    view! {
        <li
            node_ref=node_ref
            data-dnd-id=id.to_string()
            class=move || state.get().class_name()
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            <button disabled=move || state.get().is_dragging() on:click=on_click>
                {task.name}
            </button>
            <span class="item-message">{move || message.get()}</span>
        </li>
    }
}
