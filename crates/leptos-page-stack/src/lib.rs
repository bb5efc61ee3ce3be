//! Leptos Page Stack
//!
//! Three adjacent panels (previous, current, next) that slide horizontally
//! when the active id changes. The state machines are plain data so they can
//! be driven and tested without a browser; `use_page_stack` and
//! `use_retained_id` wire them to Leptos signals and browser timers.

mod hook;
mod movement;
mod retained;
mod stack;

pub use hook::{use_page_stack, use_retained_id, PageStackSignals};
pub use movement::{Movement, PanelSlot};
pub use retained::{RetainCommand, RetainedId};
pub use stack::{Generation, PageStack, StackCommand};
