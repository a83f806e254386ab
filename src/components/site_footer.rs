use cgviz_core::site::{copyright, FOOTER_LINKS};
use cgviz_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                p { class: "footer-copyright", "{copyright()}" }
                div { class: "footer-links",
                    for link in FOOTER_LINKS {
                        Button { key: "{link}", variant: ButtonVariant::Link, "{link}" }
                    }
                }
            }
        }
    }
}
