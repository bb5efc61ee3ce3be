//! Multi Page Component
//!
//! `/:collection/:id?` — the index grid and the detail view share one
//! screen and slide past each other.

use leptos::prelude::*;
use leptos_page_stack::use_retained_id;
use leptos_router::hooks::use_params_map;

use crate::components::{Index, ItemView};
use crate::config::use_config;
use crate::routes::parse_item_id;

#[component]
pub fn MultiPage() -> impl IntoView {
    let config = use_config();
    let params = use_params_map();

    let collection = Signal::derive(move || params.read().get("collection").unwrap_or_default());
    let id = Memo::new(move |_| params.read().get("id").as_deref().and_then(parse_item_id));
    let shown = Signal::derive(move || id.get().is_some());

    // Keep the last item on screen while the detail view slides out.
    let retained = use_retained_id(id.into(), config.transition());

    view! {
        <div class="multi-page">
            <Index collection=collection visible=Signal::derive(move || !shown.get()) />
            <ItemView collection=collection visible=shown id=retained />
        </div>
    }
}
