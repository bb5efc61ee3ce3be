//! UI Components
//!
//! Leptos components for the gallery views.

mod details_panel;
mod edit_toggle;
mod editable;
mod home;
mod index;
mod item_view;
mod multi_page;
mod page_item;
mod page_stack;

pub use details_panel::DetailsPanel;
pub use edit_toggle::EditToggle;
pub use editable::Editable;
pub use home::Home;
pub use index::Index;
pub use item_view::ItemView;
pub use multi_page::MultiPage;
pub use page_item::PageItem;
pub use page_stack::PageStack;
