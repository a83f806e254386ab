//! View state context for CG Viz Studio.
//!
//! The page's [`ViewState`] lives in a single signal created by `App` and
//! shared with the page sections through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let view_state = provide_view_state();
//!
//! // In child components
//! let mut view_state = use_view_state();
//! view_state.write().open_auth_modal(AuthTrigger::Login);
//! ```

use cgviz_core::{ViewEvent, ViewState};
use dioxus::prelude::*;

/// Create the page's view state and provide it to all child components.
///
/// Must be called once, from the root component.
pub fn provide_view_state() -> Signal<ViewState> {
    let view_state = use_signal(ViewState::new);
    use_context_provider(|| view_state)
}

/// Hook to access the page's view state from context.
pub fn use_view_state() -> Signal<ViewState> {
    use_context::<Signal<ViewState>>()
}

/// Hook returning a dispatcher that applies [`ViewEvent`]s to the view state.
///
/// Only writes the signal (and so re-renders) when the event changes state.
pub fn use_dispatch() -> impl FnMut(ViewEvent) + Copy {
    let mut view_state = use_view_state();
    move |event: ViewEvent| {
        let mut next = *view_state.peek();
        if next.apply(event) {
            view_state.set(next);
        }
    }
}
