//! UI Context Provider
//!
//! Builds the UI store from the router location and keeps it in sync.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use reactive_stores::Store;

use crate::routes::SearchParams;
use crate::store::{store_sync_location, UiState};

/// Provides the `UiStore` to everything below it. Must sit inside `<Router>`.
#[component]
pub fn UiProvider(children: Children) -> impl IntoView {
    let location = use_location();

    let initial = UiState::from_location(
        location.pathname.get_untracked(),
        SearchParams::parse(&location.search.get_untracked()),
    );
    log::info!("edit mode on load: {}", initial.editmode);
    let store = Store::new(initial);
    provide_context(store);

    Effect::new(move |_| {
        let path = location.pathname.get();
        let search = SearchParams::parse(&location.search.get());
        store_sync_location(&store, path, search);
    });

    children()
}
