//! CG Viz Studio UI Components
//!
//! Dioxus primitives for the studio landing page: buttons, inputs, a toggle
//! switch, tabs, cards and inline icons.
//!
//! ## Styling
//!
//! Components only emit class names. The host app ships the stylesheet, with
//! light values on `:root` and dark overrides under `.dark`:
//! - **Purple (#9333ea)**: primary actions, headings
//! - **Pink (#ec4899)**: gradient accents
//! - **Indigo (#4f46e5)**: header gradient

pub mod components;

pub use components::*;
