//! Landing page - the studio's single marketing page.
//!
//! Header, hero, viewer placeholder, services and footer, with the auth
//! modal layered on top while it is open.

use cgviz_ui::class_list;
use dioxus::prelude::*;

use crate::components::{AuthModal, Hero, ServicesGrid, SiteFooter, SiteHeader, ViewerPlaceholder};
use crate::context::use_view_state;

/// Landing page component.
///
/// The auth modal is only mounted while open, so its tab selection starts
/// fresh on every open.
#[component]
pub fn Landing() -> Element {
    let view_state = use_view_state();
    let state = view_state();
    let theme = state.theme();
    let page_class = class_list("page", Some(theme.root_class()));

    rsx! {
        div {
            class: "{page_class}",
            "data-theme": theme.as_str(),

            SiteHeader {}

            main { class: "container page-main",
                Hero {}
                ViewerPlaceholder {}
                ServicesGrid {}
            }

            SiteFooter {}

            if state.is_modal_open() {
                AuthModal {}
            }
        }
    }
}
