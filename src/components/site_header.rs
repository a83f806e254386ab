//! Site Header Component
//!
//! Brand on the left; theme switch, theme icon and the Login / Sign Up
//! triggers on the right.

use cgviz_core::site::BRAND;
use cgviz_core::{AuthTrigger, ViewEvent};
use cgviz_ui::{Button, ButtonVariant, MoonIcon, SunIcon, Switch};
use dioxus::prelude::*;

use crate::context::{use_dispatch, use_view_state};

#[component]
pub fn SiteHeader() -> Element {
    let view_state = use_view_state();
    let mut dispatch = use_dispatch();
    let dark = view_state().is_dark_mode();

    rsx! {
        header { class: "site-header",
            div { class: "container header-inner",
                h1 { class: "brand", "{BRAND}" }

                nav { class: "header-nav",
                    Switch {
                        checked: dark,
                        on_change: move |_| dispatch(ViewEvent::ToggleDarkMode),
                        aria_label: "Toggle dark mode".to_string(),
                    }
                    if dark {
                        MoonIcon {}
                    } else {
                        SunIcon {}
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| dispatch(ViewEvent::OpenAuthModal(AuthTrigger::Login)),
                        "Login"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dispatch(ViewEvent::OpenAuthModal(AuthTrigger::SignUp)),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
