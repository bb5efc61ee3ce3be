//! Page Item Component
//!
//! One panel of the page stack: title, body text and the details panel.

use leptos::prelude::*;
use leptos_page_stack::PanelSlot;

use crate::components::{DetailsPanel, EditToggle, Editable};
use crate::config::use_config;
use crate::routes::ItemId;
use crate::style::panel_style;

const BODY: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Phasellus nunc libero, venenatis id diam imperdiet, sollicitudin porttitor neque. Quisque a sapien sit amet felis laoreet molestie nec vel est. Integer porttitor elit odio, in facilisis libero dictum eu.",
    "Donec risus risus, feugiat at ultricies vitae, mollis et ex. Nam bibendum eros vitae eros imperdiet hendrerit. Suspendisse varius dui eu tempor vestibulum. Phasellus vehicula massa eget rutrum semper.",
    "Phasellus volutpat, urna at mattis suscipit, urna mi dignissim neque, sit amet luctus lacus augue ac tortor. Donec ac nibh leo. Nunc convallis diam vulputate tincidunt finibus.",
];

#[component]
pub fn PageItem(id: ItemId, #[prop(into)] panel: Signal<PanelSlot>) -> impl IntoView {
    let config = use_config();
    let padding = config.padding;
    let (show_details, set_show_details) = signal(false);

    view! {
        <div
            class=move || panel.get().class()
            style=move || panel_style(&panel.get().offset(&padding))
        >
            <EditToggle />
            <Editable
                class="page-item-title"
                value=format!("item {id}")
                on_blur=Callback::new(move |text: String| {
                    log::debug!("item {} title edited: {}", id, text);
                })
            />

            {BODY.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}

            <button class="button secondary" on:click=move |_| set_show_details.set(true)>
                "Show Details"
            </button>
            <Show when=move || show_details.get()>
                <DetailsPanel item=id />
            </Show>
        </div>
    }
}
