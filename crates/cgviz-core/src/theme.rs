//! Light / dark display mode.
//!
//! The page mirrors the dark-mode flag in two places: the page root
//! container and the document root element (`<html>`), so that styles keyed
//! on `.dark` apply everywhere, including the modal overlay.

/// Class toggled on the page root and the document root in dark mode
pub const DARK_CLASS: &str = "dark";

/// Visual theme of the page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Theme {
    /// Initial theme on every launch
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme for a dark-mode flag
    pub fn from_dark_mode(enabled: bool) -> Self {
        if enabled {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The opposite theme
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class to put on the page root container ("" in light mode)
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_CLASS,
        }
    }

    /// Lowercase name, used for logging and `data-theme` attributes
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// JavaScript that forces the document root class to match this theme.
    ///
    /// Uses the two-argument `classList.toggle` so that running it twice is
    /// harmless and the document can never drift from the view state.
    pub fn document_script(&self) -> String {
        format!(
            "document.documentElement.classList.toggle('{}', {});",
            DARK_CLASS,
            self.is_dark()
        )
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn theme_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn theme_root_class() {
        assert_eq!(Theme::Light.root_class(), "");
        assert_eq!(Theme::Dark.root_class(), "dark");
    }

    #[test]
    fn theme_document_script() {
        assert_eq!(
            Theme::Dark.document_script(),
            "document.documentElement.classList.toggle('dark', true);"
        );
        assert_eq!(
            Theme::Light.document_script(),
            "document.documentElement.classList.toggle('dark', false);"
        );
    }

    #[test]
    fn theme_from_flag() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
