//! Sidebar navigation.

/// A top-level sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

/// Sidebar links in display order.
pub const NAV_LINKS: [NavLink; 7] = [
    NavLink {
        title: "Home",
        href: "/",
        description: "Documentation overview",
    },
    NavLink {
        title: "Getting Started",
        href: "/getting-started",
        description: "Setup and installation guide",
    },
    NavLink {
        title: "System Design",
        href: "/system-design",
        description: "Architecture and patterns",
    },
    NavLink {
        title: "API Documentation",
        href: "/api-docs",
        description: "Complete API reference",
    },
    NavLink {
        title: "How-to Guides",
        href: "/how-to-guides",
        description: "Step-by-step tutorials",
    },
    NavLink {
        title: "Deployment",
        href: "/deployment",
        description: "Production deployment",
    },
    NavLink {
        title: "Contributing",
        href: "/contributing",
        description: "Contribution guidelines",
    },
];

impl NavLink {
    /// Whether this link points at `path` exactly.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.href == path
    }
}

/// Open state of the collapsible mobile sidebar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
}

impl Sidebar {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
