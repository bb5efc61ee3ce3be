//! Inline styles for the sliding pages.

/// Which edge a page slides out towards when hidden
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSide {
    Left,
    Right,
}

impl PageSide {
    fn hidden_offset(self) -> &'static str {
        match self {
            PageSide::Left => "-100%",
            PageSide::Right => "100%",
        }
    }
}

/// Style for a full-screen page that slides in when `visible`
pub fn page_style(visible: bool, side: PageSide, transition_ms: u32) -> String {
    let offset = if visible { "0" } else { side.hidden_offset() };
    let overflow = if visible { "auto" } else { "hidden" };
    format!(
        "overflow-y: {}; transition: all {}s ease; transform: translate3d({},0,0);",
        overflow,
        f64::from(transition_ms) / 1000.0,
        offset
    )
}

/// Style that parks a stacked panel beside the current one
pub fn panel_style(offset: &str) -> String {
    format!("transform: translate3d({},0,0);", offset)
}
