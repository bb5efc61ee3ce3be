//! Index Grid Components
//!
//! Logo tile plus one numbered tile per item.

use leptos::prelude::*;

use crate::config::use_config;
use crate::routes::{item_href, ItemId};
use crate::style::{page_style, PageSide};

#[component]
pub fn GridLogo() -> impl IntoView {
    let config = use_config();

    view! {
        <div class="grid-logo">
            {config.logo_src.map(|src| view! { <img class="grid-logo-img" src=src alt="" /> })}
            <h1>{config.heading} <span>{config.owner}</span></h1>
        </div>
    }
}

#[component]
pub fn GridItem(#[prop(into)] collection: Signal<String>, id: ItemId) -> impl IntoView {
    view! {
        <a class="grid-item" href=move || item_href(&collection.get(), id)>
            {id}
        </a>
    }
}

#[component]
pub fn Index(
    #[prop(into)] collection: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
) -> impl IntoView {
    let config = use_config();
    let transition_ms = config.transition_ms;

    view! {
        <div class="page index-page" style=move || page_style(visible.get(), PageSide::Left, transition_ms)>
            <div class="grid">
                <GridLogo />
                {(1..=config.item_count)
                    .map(|id| view! { <GridItem collection=collection id=id /> })
                    .collect_view()}
            </div>
        </div>
    }
}
