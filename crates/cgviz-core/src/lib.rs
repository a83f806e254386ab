//! CG Viz Studio Core Library
//!
//! View model for the studio landing page, kept free of any UI framework so
//! it can be driven and tested on its own.
//!
//! ## Overview
//!
//! The page owns very little state:
//!
//! - **ViewState**: whether the auth modal is open and whether dark mode is on
//! - **AuthModalState**: which tab (login / sign up) the open modal shows
//!
//! Everything else (hero copy, the services catalog, footer links) is static
//! content exposed from [`site`] and [`services`].
//!
//! ## Quick Start
//!
//! ```
//! use cgviz_core::{AuthTrigger, ClickTarget, Theme, ViewState};
//!
//! let mut state = ViewState::new();
//! state.open_auth_modal(AuthTrigger::SignUp);
//! assert!(state.is_modal_open());
//!
//! // Clicks inside the dialog never dismiss it
//! state.handle_overlay_click(ClickTarget::ModalBody);
//! assert!(state.is_modal_open());
//!
//! state.handle_overlay_click(ClickTarget::Backdrop);
//! assert!(!state.is_modal_open());
//!
//! assert_eq!(state.toggle_dark_mode(), Theme::Dark);
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod services;
pub mod site;
pub mod theme;
pub mod view_state;

// Re-exports
pub use auth::{AuthForm, AuthModalState, AuthTab, FormField, InputKind};
pub use config::{WindowConfig, WindowSize};
pub use error::{Result, VizError};
pub use services::{Service, SERVICES};
pub use theme::Theme;
pub use view_state::{AuthTrigger, ClickTarget, CloseReason, ViewEvent, ViewState};
