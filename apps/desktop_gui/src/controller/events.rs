//! UI intents queued by widgets and applied once per frame.

use dashboard_core::MenuItem;
use shared::domain::CandidateId;

#[derive(Debug, Clone, PartialEq)]
pub enum UiIntent {
    SearchChanged(String),
    /// Carries the tab caption; the filter is resolved from it.
    FilterTabClicked(&'static str),
    ViewProfile(CandidateId),
    SubmitJobPosting,
    ToggleNotifications,
    ClearNotifications,
    PointerOutsideNotifications,
    Navigate(MenuItem),
    AvatarClicked,
    DismissAlert,
}

impl UiIntent {
    pub fn name(&self) -> &'static str {
        match self {
            UiIntent::SearchChanged(_) => "search_changed",
            UiIntent::FilterTabClicked(_) => "filter_tab_clicked",
            UiIntent::ViewProfile(_) => "view_profile",
            UiIntent::SubmitJobPosting => "submit_job_posting",
            UiIntent::ToggleNotifications => "toggle_notifications",
            UiIntent::ClearNotifications => "clear_notifications",
            UiIntent::PointerOutsideNotifications => "pointer_outside_notifications",
            UiIntent::Navigate(_) => "navigate",
            UiIntent::AvatarClicked => "avatar_clicked",
            UiIntent::DismissAlert => "dismiss_alert",
        }
    }
}
