//! Reusable UI components.

mod button;
mod card;
mod icons;
mod input;
mod switch;
mod tabs;

pub use button::*;
pub use card::*;
pub use icons::*;
pub use input::*;
pub use switch::*;
pub use tabs::*;
