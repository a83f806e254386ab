//! Property tests for view state transitions
//!
//! Random sequences of page interactions must keep the overlay and theme
//! rules intact no matter the order they arrive in.

use cgviz_core::{AuthTrigger, ClickTarget, CloseReason, Theme, ViewEvent, ViewState};
use proptest::prelude::*;

fn arb_event() -> impl Strategy<Value = ViewEvent> {
    prop_oneof![
        Just(ViewEvent::OpenAuthModal(AuthTrigger::Login)),
        Just(ViewEvent::OpenAuthModal(AuthTrigger::SignUp)),
        Just(ViewEvent::CloseAuthModal(CloseReason::Backdrop)),
        Just(ViewEvent::CloseAuthModal(CloseReason::CloseButton)),
        Just(ViewEvent::OverlayClick(ClickTarget::Backdrop)),
        Just(ViewEvent::OverlayClick(ClickTarget::ModalBody)),
        Just(ViewEvent::ToggleDarkMode),
    ]
}

fn replay(events: &[ViewEvent]) -> ViewState {
    let mut state = ViewState::new();
    for event in events {
        state.apply(*event);
    }
    state
}

proptest! {
    /// Toggling twice from any reachable state restores the theme
    #[test]
    fn prop_double_toggle_restores(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut state = replay(&events);
        let before = state;
        state.toggle_dark_mode();
        state.toggle_dark_mode();
        prop_assert_eq!(state, before);
    }

    /// Clicks inside the modal body never change anything
    #[test]
    fn prop_body_click_is_inert(events in prop::collection::vec(arb_event(), 0..40)) {
        let mut state = replay(&events);
        let before = state;
        let changed = state.apply(ViewEvent::OverlayClick(ClickTarget::ModalBody));
        prop_assert!(!changed);
        prop_assert_eq!(state, before);
    }

    /// Dark mode equals the parity of toggle events
    #[test]
    fn prop_dark_mode_tracks_toggle_parity(events in prop::collection::vec(arb_event(), 0..40)) {
        let state = replay(&events);
        let toggles = events.iter().filter(|e| **e == ViewEvent::ToggleDarkMode).count();
        prop_assert_eq!(state.is_dark_mode(), toggles % 2 == 1);
        prop_assert_eq!(state.theme(), Theme::from_dark_mode(toggles % 2 == 1));
    }

    /// The modal is open exactly when the last modal-affecting event opened it
    #[test]
    fn prop_modal_follows_last_open_or_close(events in prop::collection::vec(arb_event(), 0..40)) {
        let state = replay(&events);
        let expected = events
            .iter()
            .rev()
            .find_map(|e| match e {
                ViewEvent::OpenAuthModal(_) => Some(true),
                ViewEvent::CloseAuthModal(_) | ViewEvent::OverlayClick(ClickTarget::Backdrop) => Some(false),
                _ => None,
            })
            .unwrap_or(false);
        prop_assert_eq!(state.is_modal_open(), expected);
    }
}
