//! Page view state.
//!
//! Two flags drive the whole page: whether the auth modal is shown and
//! whether dark mode is enabled. Both start `false` on every launch and are
//! never persisted.
//!
//! ## Overlay clicks
//!
//! The modal is drawn on top of a full-screen backdrop. A click on the
//! backdrop dismisses the modal, a click anywhere inside the dialog must not.
//! The UI stops propagation at the dialog body, and [`ViewState::handle_overlay_click`]
//! ignores [`ClickTarget::ModalBody`] so the rule holds even if an event
//! slips through.

use crate::theme::Theme;

/// Header control that opened the auth modal
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthTrigger {
    Login,
    SignUp,
}

/// Why the auth modal was dismissed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseReason {
    /// Click on the dimmed area around the dialog
    Backdrop,
    /// The explicit close control in the dialog corner
    CloseButton,
}

/// Where a click on the overlay layer landed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickTarget {
    Backdrop,
    ModalBody,
}

/// A user interaction that may change the view state
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewEvent {
    OpenAuthModal(AuthTrigger),
    CloseAuthModal(CloseReason),
    OverlayClick(ClickTarget),
    ToggleDarkMode,
}

/// Ephemeral state owned by the landing page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ViewState {
    modal_open: bool,
    dark_mode: bool,
}

impl ViewState {
    /// Initial state: modal closed, light theme
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Show the auth modal. Both triggers open it the same way.
    pub fn open_auth_modal(&mut self, trigger: AuthTrigger) {
        tracing::debug!(?trigger, was_open = self.modal_open, "Opening auth modal");
        self.modal_open = true;
    }

    /// Hide the auth modal.
    pub fn close_auth_modal(&mut self, reason: CloseReason) {
        tracing::debug!(?reason, was_open = self.modal_open, "Closing auth modal");
        self.modal_open = false;
    }

    /// Resolve a click that reached the overlay layer.
    ///
    /// Returns `true` if the modal was dismissed.
    pub fn handle_overlay_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop if self.modal_open => {
                self.close_auth_modal(CloseReason::Backdrop);
                true
            }
            ClickTarget::Backdrop => false,
            ClickTarget::ModalBody => {
                tracing::trace!("Click inside modal body ignored");
                false
            }
        }
    }

    /// Flip dark mode and return the resulting theme.
    ///
    /// The caller is responsible for mirroring the theme onto the document
    /// root (see [`Theme::document_script`]).
    pub fn toggle_dark_mode(&mut self) -> Theme {
        let theme = self.theme().toggled();
        self.dark_mode = theme.is_dark();
        tracing::debug!(%theme, "Toggled dark mode");
        theme
    }

    /// Apply a [`ViewEvent`]. Returns `true` if the state changed.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let before = *self;
        match event {
            ViewEvent::OpenAuthModal(trigger) => self.open_auth_modal(trigger),
            ViewEvent::CloseAuthModal(reason) => self.close_auth_modal(reason),
            ViewEvent::OverlayClick(target) => {
                self.handle_overlay_click(target);
            }
            ViewEvent::ToggleDarkMode => {
                self.toggle_dark_mode();
            }
        }
        before != *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = ViewState::new();
        assert!(!state.is_modal_open());
        assert!(!state.is_dark_mode());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn both_triggers_open_modal() {
        for trigger in [AuthTrigger::Login, AuthTrigger::SignUp] {
            let mut state = ViewState::new();
            state.open_auth_modal(trigger);
            assert!(state.is_modal_open());
        }
    }

    #[test]
    fn close_button_closes_modal() {
        let mut state = ViewState::new();
        state.open_auth_modal(AuthTrigger::Login);
        state.close_auth_modal(CloseReason::CloseButton);
        assert!(!state.is_modal_open());
    }

    #[test]
    fn backdrop_click_closes_modal() {
        let mut state = ViewState::new();
        state.open_auth_modal(AuthTrigger::Login);
        assert!(state.handle_overlay_click(ClickTarget::Backdrop));
        assert!(!state.is_modal_open());
    }

    #[test]
    fn body_click_keeps_modal_open() {
        let mut state = ViewState::new();
        state.open_auth_modal(AuthTrigger::SignUp);
        assert!(!state.handle_overlay_click(ClickTarget::ModalBody));
        assert!(state.is_modal_open());
    }

    #[test]
    fn backdrop_click_when_closed_is_noop() {
        let mut state = ViewState::new();
        assert!(!state.handle_overlay_click(ClickTarget::Backdrop));
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn toggle_dark_mode_twice_restores() {
        let mut state = ViewState::new();
        assert_eq!(state.toggle_dark_mode(), Theme::Dark);
        assert!(state.is_dark_mode());
        assert_eq!(state.toggle_dark_mode(), Theme::Light);
        assert!(!state.is_dark_mode());
    }

    #[test]
    fn toggle_follows_theme_toggled() {
        let mut state = ViewState::new();
        for _ in 0..4 {
            let expected = state.theme().toggled();
            assert_eq!(state.toggle_dark_mode(), expected);
            assert_eq!(state.theme(), expected);
            assert_eq!(state.is_dark_mode(), expected.is_dark());
        }
    }

    #[test]
    fn dark_mode_is_independent_of_modal() {
        let mut state = ViewState::new();
        state.open_auth_modal(AuthTrigger::Login);
        state.toggle_dark_mode();
        state.close_auth_modal(CloseReason::Backdrop);
        assert!(state.is_dark_mode());
    }

    #[test]
    fn apply_reports_changes() {
        let mut state = ViewState::new();
        assert!(state.apply(ViewEvent::OpenAuthModal(AuthTrigger::Login)));
        // Already open
        assert!(!state.apply(ViewEvent::OpenAuthModal(AuthTrigger::SignUp)));
        assert!(!state.apply(ViewEvent::OverlayClick(ClickTarget::ModalBody)));
        assert!(state.apply(ViewEvent::OverlayClick(ClickTarget::Backdrop)));
        assert!(!state.apply(ViewEvent::CloseAuthModal(CloseReason::CloseButton)));
        assert!(state.apply(ViewEvent::ToggleDarkMode));
    }
}
