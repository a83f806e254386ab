//! Card Components
//!
//! Header / content / footer slots inside a rounded, shadowed container.

use dioxus::prelude::*;

use super::button::class_list;

#[derive(Clone, PartialEq, Props)]
pub struct CardSlotProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn Card(props: CardSlotProps) -> Element {
    let class = class_list("card", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardHeader(props: CardSlotProps) -> Element {
    let class = class_list("card-header", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardContent(props: CardSlotProps) -> Element {
    let class = class_list("card-content", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[component]
pub fn CardFooter(props: CardSlotProps) -> Element {
    let class = class_list("card-footer", props.class.as_deref());
    rsx! {
        div { class: "{class}", {props.children} }
    }
}

/// Card title (h3)
#[component]
pub fn CardTitle(title: String) -> Element {
    rsx! {
        h3 { class: "card-title", "{title}" }
    }
}

/// Muted text under a card title
#[component]
pub fn CardDescription(text: String) -> Element {
    rsx! {
        p { class: "card-description", "{text}" }
    }
}
