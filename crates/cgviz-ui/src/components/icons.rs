//! Inline SVG Icons
//!
//! Stroke icons on a 24x24 grid, drawn with `currentColor` so they pick up
//! the surrounding text color.

use dioxus::prelude::*;

/// Properties shared by all icons
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// Rendered size in pixels (default: 20)
    #[props(default = 20)]
    pub size: u32,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

fn icon_class(props: &IconProps) -> String {
    super::button::class_list("icon", props.class.as_deref())
}

#[component]
pub fn SunIcon(props: IconProps) -> Element {
    let class = icon_class(&props);
    let size = props.size;

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon(props: IconProps) -> Element {
    let class = icon_class(&props);
    let size = props.size;

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub fn SparklesIcon(props: IconProps) -> Element {
    let class = icon_class(&props);
    let size = props.size;

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "M9.94 14.06 8 20l-1.94-5.94L0 12l6.06-1.94L8 4l1.94 6.06L16 12z" }
            path { d: "M20 3v4M22 5h-4M18 17v4M20 19h-4" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(props: IconProps) -> Element {
    let class = icon_class(&props);
    let size = props.size;

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            width: "{size}",
            height: "{size}",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}
