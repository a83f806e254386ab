//! Error types for CG Viz Studio

use thiserror::Error;

/// Errors raised while parsing values that cross the UI or CLI boundary.
///
/// View state transitions themselves are infallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VizError {
    /// Tab identifier was neither `login` nor `signup`
    #[error("Unknown auth tab: {0}")]
    UnknownTab(String),

    /// Window size was not in `WIDTHxHEIGHT` form or had a zero dimension
    #[error("Invalid window size: {0}")]
    InvalidWindowSize(String),
}

/// Result type alias for CG Viz Studio operations
pub type Result<T> = std::result::Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            VizError::UnknownTab("admin".into()).to_string(),
            "Unknown auth tab: admin"
        );
        assert_eq!(
            VizError::InvalidWindowSize("12".into()).to_string(),
            "Invalid window size: 12"
        );
    }
}
