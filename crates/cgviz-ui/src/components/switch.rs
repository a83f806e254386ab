//! Toggle Switch Component
//!
//! A pill-shaped on/off switch rendered as a `role="switch"` button.

use dioxus::prelude::*;

/// Properties for the Switch component
#[derive(Clone, PartialEq, Props)]
pub struct SwitchProps {
    /// Current state
    pub checked: bool,
    /// Called with the requested new state
    pub on_change: EventHandler<bool>,
    /// Accessible label for screen readers
    pub aria_label: String,
}

/// Toggle switch
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Switch {
///         checked: state.read().is_dark_mode(),
///         on_change: move |_| toggle_dark_mode(),
///         aria_label: "Dark mode".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let checked = props.checked;

    rsx! {
        button {
            class: if checked { "switch checked" } else { "switch" },
            r#type: "button",
            role: "switch",
            "aria-checked": if checked { "true" } else { "false" },
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.on_change.call(!checked),
            span { class: "switch-thumb" }
        }
    }
}
