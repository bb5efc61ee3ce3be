//! Movement direction and panel placement.

use std::cmp::Ordering;

/// Direction the page stack is sliding in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Sliding right, towards a lower id
    Prev,
    /// No transition in flight
    #[default]
    Static,
    /// Sliding left, towards a higher id
    Next,
}

impl Movement {
    /// Direction of travel from one id to another
    pub fn between(from: u32, to: u32) -> Self {
        match to.cmp(&from) {
            Ordering::Greater => Movement::Next,
            Ordering::Less => Movement::Prev,
            Ordering::Equal => Movement::Static,
        }
    }

    pub fn is_static(self) -> bool {
        self == Movement::Static
    }

    /// Horizontal offset of the whole stack while in this state
    pub fn translation(self, padding: &str) -> String {
        match self {
            Movement::Prev => format!("calc(100% + {padding})"),
            Movement::Static => "0".to_string(),
            Movement::Next => format!("calc(-100% - {padding})"),
        }
    }

    /// Pointer events are only accepted when nothing is moving
    pub fn pointer_events(self) -> &'static str {
        if self.is_static() { "auto" } else { "none" }
    }

    /// Snapping back to `Static` is instant; sliding takes the full duration.
    pub fn transition_secs(self, duration_ms: u32) -> f64 {
        if self.is_static() {
            0.0
        } else {
            f64::from(duration_ms) / 1000.0
        }
    }

    /// Inline style for the stack container
    pub fn stack_style(self, padding: &str, duration_ms: u32) -> String {
        format!(
            "pointer-events: {}; transition: all {}s ease; transform: translate3d({},0,0);",
            self.pointer_events(),
            self.transition_secs(duration_ms),
            self.translation(padding),
        )
    }
}

/// Position of a panel inside the stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelSlot {
    Prev,
    Current,
    Next,
}

impl PanelSlot {
    /// Slot `id` occupies around `settled`, if it is one of the three panels
    pub fn for_item(id: u32, settled: u32) -> Option<Self> {
        if id == settled {
            Some(PanelSlot::Current)
        } else if settled.checked_sub(1) == Some(id) {
            Some(PanelSlot::Prev)
        } else if settled.checked_add(1) == Some(id) {
            Some(PanelSlot::Next)
        } else {
            None
        }
    }

    /// Offset that parks the panel beside the current one
    pub fn offset(self, padding: &str) -> String {
        match self {
            PanelSlot::Prev => format!("calc(-100% - {padding})"),
            PanelSlot::Current => "0".to_string(),
            PanelSlot::Next => format!("calc(100% + {padding})"),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            PanelSlot::Prev => "page-item prev",
            PanelSlot::Current => "page-item",
            PanelSlot::Next => "page-item next",
        }
    }
}
