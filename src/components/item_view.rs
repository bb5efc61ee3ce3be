//! Item View Component
//!
//! Detail page: back link, prev/next buttons and the page stack.

use leptos::html;
use leptos::prelude::*;

use crate::components::PageStack;
use crate::config::use_config;
use crate::routes::{index_href, next_href, prev_href, ItemId};
use crate::style::{page_style, PageSide};

/// Scroll `el` back to the top whenever a new id is shown
fn use_scroll_top(el: NodeRef<html::Div>, id: Signal<Option<ItemId>>) {
    Effect::new(move |_| {
        if id.get().is_none() {
            return;
        }
        if let Some(el) = el.get_untracked() {
            el.set_scroll_top(0);
        }
    });
}

#[component]
pub fn ItemView(
    #[prop(into)] collection: Signal<String>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] id: Signal<Option<ItemId>>,
) -> impl IntoView {
    let config = use_config();
    let transition_ms = config.transition_ms;
    let el = NodeRef::<html::Div>::new();
    use_scroll_top(el, id);

    view! {
        <div
            node_ref=el
            class="page details-page"
            style=move || page_style(visible.get(), PageSide::Right, transition_ms)
        >
            <a class="button" href=move || index_href(&collection.get())>"Return to Index"</a>
            <div class="flex-box">
                <a class="button secondary" href=move || prev_href(&collection.get(), id.get())>"Prev"</a>
                <a class="button secondary" href=move || next_href(&collection.get(), id.get())>"Next"</a>
            </div>

            <PageStack id=id />
        </div>
    }
}
