//! Services Grid Component
//!
//! One card per entry of the fixed services catalog.

use cgviz_core::site::{SERVICES_HEADING, SERVICE_CTA};
use cgviz_core::SERVICES;
use cgviz_ui::{Button, Card, CardContent, CardFooter, CardHeader, CardTitle};
use dioxus::prelude::*;

#[component]
pub fn ServicesGrid() -> Element {
    rsx! {
        section { class: "services",
            h3 { class: "services-heading gradient-text", "{SERVICES_HEADING}" }
            div { class: "services-grid",
                for (index, service) in SERVICES.iter().enumerate() {
                    {
                        let delay = format!("animation-delay: {}ms;", index * 100);
                        rsx! {
                            div {
                                key: "{service.slug()}",
                                class: "service-card-wrapper",
                                style: "{delay}",
                                Card { class: "service-card".to_string(),
                                    CardHeader { class: "service-card-header".to_string(),
                                        CardTitle { title: service.title.to_string() }
                                    }
                                    CardContent {
                                        p { class: "muted-text", "{service.description()}" }
                                    }
                                    CardFooter { class: "service-card-footer".to_string(),
                                        Button { full_width: true, "{SERVICE_CTA}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
