//! Gallery Configuration
//!
//! Optional JSON embedded in `index.html`:
//!
//! ```html
//! <script type="application/json" id="gallery-config">{ "item_count": 24 }</script>
//! ```
//!
//! Every field falls back to its default when missing.

use std::time::Duration;

use leptos::prelude::*;
use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Id of the element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no #gallery-config element in the page")]
    Missing,
    #[error("invalid gallery config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Slide duration for pages and the page stack
    pub transition_ms: u32,
    /// Number of tiles in the index grid
    pub item_count: u32,
    /// Gap between stacked panels, any CSS length
    pub padding: String,
    /// Simulated load time of the details panel
    pub details_delay_ms: u32,
    pub log_level: String,
    /// Collection suggested on the home page
    pub default_collection: String,
    pub heading: String,
    pub owner: String,
    pub logo_src: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            transition_ms: 400,
            item_count: 40,
            padding: "3em".to_string(),
            details_delay_ms: 150,
            log_level: "debug".to_string(),
            default_collection: "foo".to_string(),
            heading: "the original works of".to_string(),
            owner: "K. R. Whitley".to_string(),
            logo_src: None,
        }
    }
}

impl GalleryConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(u64::from(self.transition_ms))
    }

    /// Unknown level names fall back to `debug`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }
}

/// Read the config embedded in the host page
pub fn load_config() -> Result<GalleryConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .ok_or(ConfigError::Missing)?;
    GalleryConfig::from_json(&text)
}

/// Get the config from context
pub fn use_config() -> GalleryConfig {
    expect_context::<GalleryConfig>()
}
