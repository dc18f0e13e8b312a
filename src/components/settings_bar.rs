//! Settings Bar Component
//!
//! Demo toggles bound to the reorder options.

use leptos::prelude::*;
use task_reorder::ReorderOptions;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn OptionToggle(
    label: &'static str,
    get: fn(&ReorderOptions) -> bool,
    flip: fn(&mut ReorderOptions),
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <td>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || store.options().with(get)
                    on:change=move |_| store.options().update(flip)
                />
                {label}
            </label>
        </td>
    }
}

fn sticky(o: &ReorderOptions) -> bool {
    o.sticky
}

fn flip_sticky(o: &mut ReorderOptions) {
    o.sticky = !o.sticky;
}

fn self_drop(o: &ReorderOptions) -> bool {
    o.allow_self_drop
}

fn flip_self_drop(o: &mut ReorderOptions) {
    o.allow_self_drop = !o.allow_self_drop;
}

fn timestamps(o: &ReorderOptions) -> bool {
    o.timestamps
}

fn flip_timestamps(o: &mut ReorderOptions) {
    o.timestamps = !o.timestamps;
}

fn change_only(o: &ReorderOptions) -> bool {
    o.timestamp_change_only
}

fn flip_change_only(o: &mut ReorderOptions) {
    o.timestamp_change_only = !o.timestamp_change_only;
}

#[component]
pub fn SettingsBar() -> impl IntoView {
    view! {
        <table class="settings">
            <tr>
                <OptionToggle label="Sticky" get=sticky flip=flip_sticky />
                <OptionToggle label="Can drop on self" get=self_drop flip=flip_self_drop />
                <OptionToggle label="Timestamps" get=timestamps flip=flip_timestamps />
                <OptionToggle label="Timestamp Change Only" get=change_only flip=flip_change_only />
            </tr>
        </table>
    }
}
