//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Provided through
//! context by `UiProvider`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::SearchParams;

/// Query parameter that turns on edit mode
pub const EDIT_PARAM: &str = "edit";

/// Shared UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Whether item text is presented as editable
    pub editmode: bool,
    /// Parsed query string of the current location
    pub search: SearchParams,
    /// Current location path
    pub path: String,
}

impl UiState {
    /// State for the first render: edit mode follows the `edit` flag
    pub fn from_location(path: String, search: SearchParams) -> Self {
        Self {
            editmode: search.is_truthy(EDIT_PARAM),
            search,
            path,
        }
    }

    /// Track a new location. The URL flag overrides a toggled edit mode.
    /// Returns true when edit mode changed.
    pub fn sync_location(&mut self, path: String, search: SearchParams) -> bool {
        let flag = search.is_truthy(EDIT_PARAM);
        self.path = path;
        self.search = search;
        if self.editmode != flag {
            self.editmode = flag;
            true
        } else {
            false
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_editmode(store: &UiStore, editmode: bool) {
    *store.editmode().write() = editmode;
}

pub fn store_toggle_editmode(store: &UiStore) {
    let editmode = !store.editmode().get_untracked();
    log::debug!("edit mode toggled to {}", editmode);
    store_set_editmode(store, editmode);
}

pub fn store_sync_location(store: &UiStore, path: String, search: SearchParams) {
    if store.write().sync_location(path, search) {
        log::debug!("edit mode changed from url to {}", store.editmode().get_untracked());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_editmode_follows_flag() {
        let on = UiState::from_location("/foo/3".into(), SearchParams::parse("?edit"));
        assert!(on.editmode);
        assert_eq!(on.path, "/foo/3");

        let valued = UiState::from_location("/foo".into(), SearchParams::parse("?edit=yes"));
        assert!(valued.editmode);

        let empty = UiState::from_location("/foo".into(), SearchParams::parse("?edit="));
        assert!(!empty.editmode);

        let off = UiState::from_location("/foo".into(), SearchParams::parse(""));
        assert!(!off.editmode);
    }

    #[test]
    fn test_sync_location_overrides_toggle() {
        let mut state = UiState::from_location("/foo".into(), SearchParams::default());
        state.editmode = true;

        assert!(state.sync_location("/foo/2".into(), SearchParams::default()));
        assert!(!state.editmode);
        assert_eq!(state.path, "/foo/2");

        assert!(!state.sync_location("/foo/3".into(), SearchParams::default()));
        assert!(state.sync_location("/foo/3".into(), SearchParams::parse("edit")));
        assert!(state.editmode);
    }
}
