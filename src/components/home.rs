//! Home Page
//!
//! Shown at `/` and for unknown paths.

use leptos::prelude::*;

use crate::config::use_config;
use crate::routes::index_href;

#[component]
pub fn Home() -> impl IntoView {
    let config = use_config();
    let href = index_href(&config.default_collection);
    let label = href.clone();

    view! {
        <p class="home">
            "invisible page? go to "
            <a href=href>{label}</a>
        </p>
    }
}
