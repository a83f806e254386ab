//! Page components for CG Viz Studio.

mod landing;

pub use landing::Landing;
