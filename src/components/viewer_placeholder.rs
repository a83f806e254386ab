//! Placeholder panel where the 3D viewer will live.

use cgviz_core::site::VIEWER_PLACEHOLDER;
use cgviz_ui::SparklesIcon;
use dioxus::prelude::*;

#[component]
pub fn ViewerPlaceholder() -> Element {
    rsx! {
        div { class: "viewer-placeholder",
            div { class: "viewer-pulse",
                SparklesIcon { size: 64, class: "viewer-icon".to_string() }
                p { class: "viewer-label", "{VIEWER_PLACEHOLDER}" }
            }
        }
    }
}
