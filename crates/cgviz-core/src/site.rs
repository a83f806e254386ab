//! Static copy for the landing page.

pub const BRAND: &str = "CG Viz Studio";

pub const HERO_TITLE: &str = "Professional 3D Visualization Services";
pub const HERO_TAGLINE: &str = "Bringing your ideas to life with stunning, photorealistic results";
pub const HERO_CTA: &str = "Get a Free Quote";

pub const VIEWER_PLACEHOLDER: &str = "3D Viewer Coming Soon";

pub const SERVICES_HEADING: &str = "Our Services";
pub const SERVICE_CTA: &str = "Learn More";

pub const COPYRIGHT_YEAR: u16 = 2024;

/// Footer link buttons. None of them navigate anywhere yet.
pub const FOOTER_LINKS: [&str; 2] = ["Privacy Policy", "Terms of Service"];

/// Footer copyright line
pub fn copyright() -> String {
    format!("\u{00A9} {COPYRIGHT_YEAR} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        assert_eq!(copyright(), "© 2024 CG Viz Studio. All rights reserved.");
    }
}
