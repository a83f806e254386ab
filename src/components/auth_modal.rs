//! Auth Modal Component
//!
//! Login / sign-up dialog over a dimmed backdrop. Presentation only: the
//! forms are never validated or sent anywhere.

use cgviz_core::{AuthForm, AuthModalState, AuthTab, ClickTarget, CloseReason, ViewEvent};
use cgviz_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    ChevronDownIcon, IconButton, Input, TabItem, TabList, TabPanel,
};
use dioxus::prelude::*;

use crate::context::use_dispatch;

/// Auth Modal
///
/// Mount it only while the modal is open; the selected tab lives in this
/// component and resets to login on every mount.
///
/// Clicks on the backdrop close the modal. Clicks anywhere inside the
/// dialog stop propagating at the dialog body so they never reach the
/// backdrop handler.
#[component]
pub fn AuthModal() -> Element {
    let mut dispatch = use_dispatch();
    let mut modal = use_signal(AuthModalState::new);

    let state = modal();
    let tab = state.tab();
    let tabs: Vec<TabItem> = AuthTab::ALL
        .iter()
        .map(|t| TabItem::new(t.as_str(), t.label()))
        .collect();

    let select_tab = move |value: String| match value.parse::<AuthTab>() {
        Ok(tab) => {
            modal.write().select(tab);
        }
        Err(e) => tracing::warn!("Ignoring tab selection: {}", e),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| dispatch(ViewEvent::OverlayClick(ClickTarget::Backdrop)),

            div {
                class: "auth-modal",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |e| {
                    e.stop_propagation();
                    dispatch(ViewEvent::OverlayClick(ClickTarget::ModalBody));
                },

                div { class: "tabs",
                    TabList {
                        tabs: tabs,
                        selected: tab.as_str().to_string(),
                        on_select: select_tab,
                    }
                    for panel in AuthTab::ALL {
                        if state.is_visible(panel) {
                            TabPanel { key: "{panel.as_str()}", value: panel.as_str().to_string(),
                                AuthFormCard { form: state.visible_form() }
                            }
                        }
                    }
                }

                IconButton {
                    class: "modal-close".to_string(),
                    aria_label: "Close".to_string(),
                    onclick: move |_| dispatch(ViewEvent::CloseAuthModal(CloseReason::CloseButton)),
                    ChevronDownIcon { size: 24 }
                }
            }
        }
    }
}

/// The form card for one tab
#[component]
fn AuthFormCard(form: &'static AuthForm) -> Element {

    rsx! {
        Card {
            CardHeader {
                CardTitle { title: form.title.to_string() }
                CardDescription { text: form.description.to_string() }
            }
            CardContent { class: "form-stack".to_string(),
                for field in form.fields {
                    Input {
                        key: "{field.id}",
                        field: *field,
                        id_prefix: form.tab.as_str().to_string(),
                    }
                }
            }
            CardFooter {
                Button {
                    full_width: true,
                    onclick: move |_| form.submit(),
                    "{form.submit_label}"
                }
            }
        }
    }
}
