//! Cosmetic navigation tab highlighting. No data flows through here.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

pub const NAV_TABS: [&str; 4] = ["Create", "Templates", "Gallery", "Help"];

/// Navigation tabs and which one carries the `active` marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTabs {
    labels: Vec<&'static str>,
    active: Option<usize>,
}

impl Default for NavTabs {
    fn default() -> Self {
        Self { labels: NAV_TABS.to_vec(), active: Some(0) }
    }
}

impl NavTabs {
    #[must_use]
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Clear the marker from every tab and set it on `index`.
    ///
    /// An index outside the tab list leaves the markers untouched.
    pub fn activate(&mut self, index: usize) {
        if index < self.labels.len() {
            self.active = Some(index);
        }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}
