use dioxus::prelude::*;

use crate::context::provide_view_state;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Studio landing page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, view state context, the document theme class,
/// and routing.
#[component]
pub fn App() -> Element {
    let view_state = provide_view_state();

    // Keep the <html> class in step with the theme. Runs once on mount
    // (light) and again only when the theme flips.
    let theme = use_memo(move || view_state.read().theme());
    use_effect(move || {
        let theme = theme();
        tracing::debug!(%theme, "Applying document theme");
        document::eval(&theme.document_script());
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
