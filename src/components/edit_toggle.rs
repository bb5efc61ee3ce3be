//! Edit Toggle Component

use leptos::prelude::*;

use crate::store::{store_toggle_editmode, use_ui_store, UiStateStoreFields};

/// Switches edit mode on and off for the whole page
#[component]
pub fn EditToggle() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <button
            class="edit-toggle"
            on:click=move |_| store_toggle_editmode(&store)
        >
            {move || if store.editmode().get() { "Done Editing" } else { "Edit This Page" }}
        </button>
    }
}
