//! Gallery Stack Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod details;
mod markdown;
mod routes;
mod store;
mod style;

use app::App;
use config::{ConfigError, GalleryConfig};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_config();
    let level = loaded.as_ref().map(GalleryConfig::level_filter).unwrap_or(log::LevelFilter::Debug);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", err).into());
    }

    let config = match loaded {
        Ok(config) => config,
        Err(ConfigError::Missing) => GalleryConfig::default(),
        Err(err) => {
            log::warn!("{}; using defaults", err);
            GalleryConfig::default()
        }
    };
    log::info!("mounting gallery with {} items", config.item_count);

    mount_to_body(move || view! { <App config=config /> });
}
