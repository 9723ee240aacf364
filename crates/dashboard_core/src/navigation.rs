/// Windows narrower than this hide the sidebar.
pub const DEFAULT_SIDEBAR_BREAKPOINT: f32 = 880.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Dashboard,
    Candidates,
    JobPostings,
    Interviews,
    Analytics,
    Settings,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Dashboard,
        MenuItem::Candidates,
        MenuItem::JobPostings,
        MenuItem::Interviews,
        MenuItem::Analytics,
        MenuItem::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Dashboard => "Dashboard",
            MenuItem::Candidates => "Candidates",
            MenuItem::JobPostings => "Job Postings",
            MenuItem::Interviews => "Interviews",
            MenuItem::Analytics => "Analytics",
            MenuItem::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigation {
    active: MenuItem,
}

impl Navigation {
    pub fn active(&self) -> MenuItem {
        self.active
    }

    pub fn is_active(&self, item: MenuItem) -> bool {
        self.active == item
    }

    /// Exactly one item is active at a time.
    pub fn select(&mut self, item: MenuItem) {
        self.active = item;
        tracing::info!(item = item.label(), "navigating to menu item");
    }
}

pub fn sidebar_visible(window_width: f32, breakpoint: f32) -> bool {
    window_width >= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_the_active_item() {
        let mut nav = Navigation::default();
        assert!(nav.is_active(MenuItem::Dashboard));

        nav.select(MenuItem::JobPostings);
        assert_eq!(nav.active(), MenuItem::JobPostings);
        assert_eq!(
            MenuItem::ALL.iter().filter(|item| nav.is_active(**item)).count(),
            1
        );
    }

    #[test]
    fn sidebar_hides_below_breakpoint() {
        assert!(!sidebar_visible(879.0, DEFAULT_SIDEBAR_BREAKPOINT));
        assert!(sidebar_visible(880.0, DEFAULT_SIDEBAR_BREAKPOINT));
        assert!(sidebar_visible(1280.0, DEFAULT_SIDEBAR_BREAKPOINT));
    }
}
