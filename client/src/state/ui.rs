//! Local UI chrome state (sidebar, tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the fetched records so
//! layout controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// `localStorage` key for the sidebar collapse flag.
pub const SIDEBAR_COLLAPSED_KEY: &str = "nexops.sidebar.collapsed";

/// Tabs on the alerts page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertsTab {
    /// Firing alerts only.
    #[default]
    Active,
    /// Every alert regardless of status.
    History,
    /// Alert rule configuration.
    Rules,
}

impl AlertsTab {
    pub const ALL: [AlertsTab; 3] = [Self::Active, Self::History, Self::Rules];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active Alerts",
            Self::History => "History",
            Self::Rules => "Alert Rules",
        }
    }
}

/// UI state shared through context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    pub alerts_tab: AlertsTab,
}

impl UiState {
    /// Flip the sidebar flag and return the new value for persistence.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }
}
