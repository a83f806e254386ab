//! Tabs Component
//!
//! A row of mutually exclusive tab triggers. The caller owns the selected
//! value and renders the matching panel.

use dioxus::prelude::*;

/// A single tab trigger
#[derive(Clone, PartialEq, Debug)]
pub struct TabItem {
    /// Stable value, also used for element ids
    pub value: String,
    /// Display label
    pub label: String,
}

impl TabItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the TabList component
#[derive(Clone, PartialEq, Props)]
pub struct TabListProps {
    /// Tabs in display order
    pub tabs: Vec<TabItem>,
    /// Value of the selected tab
    pub selected: String,
    /// Called with the value of the clicked tab
    pub on_select: EventHandler<String>,
}

/// Row of tab triggers
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TabList {
///         tabs: vec![TabItem::new("login", "Login"), TabItem::new("signup", "Sign Up")],
///         selected: tab().as_str().to_string(),
///         on_select: move |value: String| { /* parse and select */ },
///     }
/// }
/// ```
#[component]
pub fn TabList(props: TabListProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "tabs-list",
            role: "tablist",
            for tab in props.tabs.iter() {
                {
                    let value = tab.value.clone();
                    let is_selected = selected == tab.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab.value}",
                            id: "tab-{tab.value}",
                            class: if is_selected { "tabs-trigger active" } else { "tabs-trigger" },
                            r#type: "button",
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            "aria-controls": "panel-{tab.value}",
                            onclick: move |_| on_select.call(value.clone()),
                            "{tab.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Properties for the TabPanel component
#[derive(Clone, PartialEq, Props)]
pub struct TabPanelProps {
    /// Value of the tab this panel belongs to
    pub value: String,
    pub children: Element,
}

#[component]
pub fn TabPanel(props: TabPanelProps) -> Element {
    rsx! {
        div {
            id: "panel-{props.value}",
            class: "tabs-content",
            role: "tabpanel",
            "aria-labelledby": "tab-{props.value}",
            {props.children}
        }
    }
}
