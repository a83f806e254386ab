//! Desktop window configuration.
//!
//! Only the window is configurable. The page itself always mounts in its
//! initial state (modal closed, light theme).

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VizError};
use crate::site::BRAND;

/// Logical window size in pixels
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 900.0,
        }
    }
}

impl FromStr for WindowSize {
    type Err = VizError;

    /// Parse `WIDTHxHEIGHT`, e.g. `1280x800`
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || VizError::InvalidWindowSize(s.to_string());
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        Ok(Self {
            width: f64::from(width),
            height: f64::from(height),
        })
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Settings for the desktop window hosting the page
#[derive(Clone, PartialEq, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub size: WindowSize,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: BRAND.to_string(),
            size: WindowSize::default(),
            resizable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_window_size() {
        let size: WindowSize = "1280x800".parse().unwrap();
        assert_eq!(size.width, 1280.0);
        assert_eq!(size.height, 800.0);

        let size: WindowSize = " 640 X 480 ".parse().unwrap();
        assert_eq!(size.width, 640.0);
        assert_eq!(size.height, 480.0);
    }

    #[test]
    fn reject_bad_window_size() {
        for bad in ["", "1280", "x800", "1280x", "0x800", "1280x0", "-1x5", "axb"] {
            assert_eq!(
                bad.parse::<WindowSize>(),
                Err(VizError::InvalidWindowSize(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn window_size_display() {
        assert_eq!(WindowSize::default().to_string(), "1200x900");
    }

    #[test]
    fn default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "CG Viz Studio");
        assert!(config.resizable);
        assert_eq!(config.size, WindowSize::default());
    }
}
