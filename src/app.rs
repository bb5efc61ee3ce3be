//! Gallery Stack App
//!
//! Router and context setup.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Home, MultiPage};
use crate::config::GalleryConfig;
use crate::context::UiProvider;

#[component]
pub fn App(config: GalleryConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <UiProvider>
                <main class="main">
                    <Routes fallback=|| view! { <Home /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/:collection/:id?") view=MultiPage />
                    </Routes>
                </main>
            </UiProvider>
        </Router>
    }
}
