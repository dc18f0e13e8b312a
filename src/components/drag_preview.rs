//! Drag Preview Component
//!
//! Floating copy of the dragged task that follows the pointer.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

use leptos_dragdrop::DndSignals;

/// Keeps the preview just outside the pointer
const PREVIEW_OFFSET_X: i32 = 16;

#[component]
pub fn DragPreview(dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();

    let preview = move || {
        let key = dnd.dragging_read.with(|d| d.as_ref().map(|s| s.key))?;
        let name = store
            .tasks()
            .with(|tasks| tasks.iter().find(|t| t.id == key).map(|t| t.name.clone()))?;
        let (x, y) = dnd.pointer_read.get();
        Some(view! {
            <div
                class="drag-preview-item"
                style=format!("left: {}px; top: {}px;", x + PREVIEW_OFFSET_X, y)
            >
                {name}
            </div>
        })
    };

    view! { {preview} }
}
