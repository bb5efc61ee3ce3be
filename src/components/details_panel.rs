//! Details Panel Component
//!
//! Loaded on demand; shows a placeholder until the details arrive.

use leptos::prelude::*;

use crate::config::use_config;
use crate::details::load_details;
use crate::routes::ItemId;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <span class="loading">"Loading..."</span> }
}

#[component]
pub fn DetailsPanel(item: ItemId) -> impl IntoView {
    let config = use_config();
    let details = LocalResource::new(move || load_details(item, config.clone()));

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {move || details.get().map(|result| match result {
                Ok(details) => view! {
                    <div class="details" data-item=details.item.to_string() inner_html=details.html></div>
                }.into_any(),
                Err(_) => view! {
                    <p class="details-error">"Could not load details."</p>
                }.into_any(),
            })}
        </Suspense>
    }
}
