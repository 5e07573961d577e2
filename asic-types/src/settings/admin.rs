//! Admin dashboard theme and sidebar navigation.
//!
//! Purely presentational: the admin renderer walks this tree, nothing else
//! depends on its shape.

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminTheme {
    pub site_title: String,
    pub site_header: String,
    pub site_url: String,
    /// Material icon name shown next to the title.
    pub site_symbol: String,
    pub show_history: bool,
    pub show_view_on_site: bool,
    /// Forced colour scheme; `None` follows the user's preference.
    pub theme: Option<String>,
    /// Primary palette keyed by shade (`"50"` .. `"950"`).
    pub primary_colors: IndexMap<String, String>,
    pub sidebar: Sidebar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub show_search: bool,
    pub show_all_applications: bool,
    pub navigation: Vec<NavGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub title: String,
    pub separator: bool,
    pub collapsible: bool,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    pub icon: String,
    pub link: String,
}

impl NavGroup {
    pub fn new(title: impl Into<String>, collapsible: bool, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            separator: true,
            collapsible,
            items,
        }
    }
}

impl NavItem {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            link: link.into(),
        }
    }
}

impl Sidebar {
    /// Total number of links across all groups.
    pub fn link_count(&self) -> usize {
        self.navigation.iter().map(|group| group.items.len()).sum()
    }
}
