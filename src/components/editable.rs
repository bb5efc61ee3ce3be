//! Editable Component
//!
//! Content-editable wrapper. Text is only editable while edit mode is on;
//! edits stay local to the page and are reported through `on_blur`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Local edits against the last value handed in from outside
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditBuffer {
    value: String,
    local: String,
}

impl EditBuffer {
    pub fn new(value: String) -> Self {
        Self {
            local: value.clone(),
            value,
        }
    }

    pub fn set_local(&mut self, local: String) {
        self.local = local;
    }

    /// A new outside value replaces the reference but keeps local edits
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.local != self.value
    }
}

#[component]
pub fn Editable(
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(optional)] on_blur: Option<Callback<String>>,
) -> impl IntoView {
    let store = use_ui_store();
    let buffer = RwSignal::new(EditBuffer::new(value.get_untracked()));

    Effect::new(move |_| {
        let value = value.get();
        buffer.update(|b| b.set_value(value));
    });

    let on_input = move |ev: web_sys::Event| {
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            buffer.update(|b| b.set_local(el.inner_html()));
        }
    };

    let handle_blur = move |_: web_sys::FocusEvent| {
        if let Some(callback) = on_blur {
            callback.run(buffer.with_untracked(|b| b.local().to_string()));
        }
    };

    view! {
        <div class="editable-wrapper">
            <div
                class=format!("editable {class}")
                contenteditable=move || if store.editmode().get() { "true" } else { "false" }
                data-placeholder=placeholder
                inner_html=move || value.get()
                on:input=on_input
                on:blur=handle_blur
            ></div>
            <Show when=move || store.editmode().get() && buffer.with(EditBuffer::is_dirty)>
                <span class="editable-dirty">"unsaved changes"</span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_clean() {
        let buffer = EditBuffer::new("item 3".to_string());
        assert_eq!(buffer.local(), "item 3");
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_local_edit_marks_dirty_until_it_matches() {
        let mut buffer = EditBuffer::new("item 3".to_string());
        buffer.set_local("item three".to_string());
        assert!(buffer.is_dirty());

        buffer.set_local("item 3".to_string());
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_outside_value_catching_up_clears_dirty() {
        let mut buffer = EditBuffer::new("a".to_string());
        buffer.set_local("b".to_string());
        buffer.set_value("b".to_string());
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.value(), "b");
    }
}
