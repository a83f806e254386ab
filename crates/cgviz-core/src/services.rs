//! Services offered by the studio, shown as a grid of cards.

/// A service card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Service {
    pub title: &'static str,
}

impl Service {
    /// Card body text, derived from the title
    pub fn description(&self) -> String {
        format!(
            "Stunning {} to bring your projects to life with unparalleled realism and creativity.",
            self.title.to_lowercase()
        )
    }

    /// Stable key for list rendering
    pub fn slug(&self) -> String {
        self.title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// The fixed services catalog, in display order
pub const SERVICES: [Service; 3] = [
    Service {
        title: "Architectural Visualization",
    },
    Service {
        title: "Product Visualization",
    },
    Service {
        title: "3D Animation",
    },
];
