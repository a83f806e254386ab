//! Hero section with headline, tagline and the quote call to action.

use cgviz_core::site::{HERO_CTA, HERO_TAGLINE, HERO_TITLE};
use cgviz_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            h2 { class: "hero-title gradient-text", "{HERO_TITLE}" }
            p { class: "hero-tagline", "{HERO_TAGLINE}" }
            // No quote flow exists yet
            Button { variant: ButtonVariant::Gradient, "{HERO_CTA}" }
        }
    }
}
