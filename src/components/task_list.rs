//! Task List Component
//!
//! Reorderable list with trace lines, reset button and settings.
//! Uses leptos-dragdrop; drag-over commits the new order live.

use leptos::prelude::*;

use crate::components::{DragPreview, ListItem, SettingsBar};
use crate::context::AppContext;
use crate::monitor::{dnd_options, make_monitor};
use crate::store::{use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let dnd = create_dnd_signals(dnd_options(&store.options().get_untracked()));
    bind_global_mouseup(dnd, make_monitor(ctx));

    // Keep controller and sensor in step with the settings bar
    Effect::new(move |_| {
        let options = store.options().get();
        ctx.set_options(options);
        dnd.options_write.set(dnd_options(&options));
    });

    view! {
        <div class="list-message">"List: " {move || store.list_message().get()}</div>
        <div class="change-message">"Changes: " {move || store.change_message().get()}</div>
        <ul class="task-list">
            <For
                each=move || store.tasks().get()
                key=|task| task.id
                children=move |task| view! { <ListItem task=task dnd=dnd /> }
            />
        </ul>
        <button class="reset-btn" on:click=move |_| ctx.reset()>"Reset Tasks"</button>
        <SettingsBar />
        <DragPreview dnd=dnd />
    }
}
