//! Global styling for CG Viz Studio.

mod styles;

pub use styles::GLOBAL_STYLES;
