use dashboard_core::{job_posting::JOB_POSTED_MESSAGE, DashboardController};
use serde::Serialize;
use shared::{domain::Notification, forms::JobPosting};

#[derive(Debug, Serialize)]
pub struct NotificationsView<'a> {
    pub unread: usize,
    pub badge: Option<usize>,
    pub notifications: &'a [Notification],
}

impl<'a> NotificationsView<'a> {
    pub fn of(controller: &'a DashboardController) -> Self {
        Self {
            unread: controller.unread_count(),
            badge: controller.badge_count(),
            notifications: controller.notifications(),
        }
    }
}

/// Outcome of an accepted posting: confirmation plus the refreshed list.
#[derive(Debug, Serialize)]
pub struct JobPostedView {
    pub message: String,
    pub posting: JobPosting,
    pub unread: usize,
    pub notifications: Vec<Notification>,
}

impl JobPostedView {
    /// Consumes the pending confirmation alert.
    pub fn acknowledge(controller: &mut DashboardController, posting: JobPosting) -> Self {
        let message = controller
            .dismiss_alert()
            .map(|alert| alert.to_string())
            .unwrap_or_else(|| JOB_POSTED_MESSAGE.to_string());
        Self {
            message,
            posting,
            unread: controller.unread_count(),
            notifications: controller.notifications().to_vec(),
        }
    }
}
