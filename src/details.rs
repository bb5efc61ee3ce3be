//! Item Details
//!
//! Content of the "Show Details" panel. Loaded asynchronously so the panel
//! can show a placeholder while it arrives.

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config::GalleryConfig;
use crate::markdown::parse_markdown;
use crate::routes::ItemId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DetailsError {
    #[error("item {0} is not part of the collection")]
    UnknownItem(ItemId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDetails {
    pub item: ItemId,
    /// Rendered HTML
    pub html: String,
}

/// Load details for `item` after the configured delay
pub async fn load_details(item: ItemId, config: GalleryConfig) -> Result<ItemDetails, DetailsError> {
    TimeoutFuture::new(config.details_delay_ms).await;
    let details = build_details(item, config.item_count);
    match &details {
        Ok(_) => log::debug!("details loaded for item {}", item),
        Err(err) => log::warn!("details failed: {}", err),
    }
    details
}

pub fn build_details(item: ItemId, item_count: u32) -> Result<ItemDetails, DetailsError> {
    if item == 0 || item > item_count {
        return Err(DetailsError::UnknownItem(item));
    }

    let mut source = format!("### Item {item} of {item_count}\n\n");
    if item > 1 {
        source.push_str(&format!("- Previous: item {}\n", item - 1));
    }
    if item < item_count {
        source.push_str(&format!("- Next: item {}\n", item + 1));
    }

    Ok(ItemDetails {
        item,
        html: parse_markdown(&source),
    })
}
