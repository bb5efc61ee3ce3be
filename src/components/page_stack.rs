//! Page Stack Component
//!
//! Previous, current and next items side by side; the whole row slides
//! when the route id changes.

use leptos::prelude::*;
use leptos_page_stack::{use_page_stack, PanelSlot};

use crate::components::PageItem;
use crate::config::use_config;
use crate::routes::ItemId;

#[component]
pub fn PageStack(#[prop(into)] id: Signal<Option<ItemId>>) -> impl IntoView {
    let config = use_config();
    let stack = use_page_stack(id, config.transition());
    let padding = config.padding.clone();
    let transition_ms = config.transition_ms;

    let style = move || stack.movement.get().stack_style(&padding, transition_ms);

    view! {
        <div class="page-stack flex-box" style=style>
            // Keyed by id: a panel that stays on screen keeps its state and only moves slot.
            <For
                each=move || stack.panels.get()
                key=|(id, _)| *id
                children=move |(id, initial)| {
                    let panel = Signal::derive(move || {
                        stack.settled.get()
                            .and_then(|settled| PanelSlot::for_item(id, settled))
                            .unwrap_or(initial)
                    });
                    view! { <PageItem id=id panel=panel /> }
                }
            />
        </div>
    }
}
