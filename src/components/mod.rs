//! Page sections for CG Viz Studio.

mod auth_modal;
mod hero;
mod services_grid;
mod site_footer;
mod site_header;
mod viewer_placeholder;

pub use auth_modal::AuthModal;
pub use hero::Hero;
pub use services_grid::ServicesGrid;
pub use site_footer::SiteFooter;
pub use site_header::SiteHeader;
pub use viewer_placeholder::ViewerPlaceholder;
