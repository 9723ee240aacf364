//! Intent orchestration from widgets to the dashboard controller.

use crossbeam_channel::{Sender, TrySendError};
use dashboard_core::{DashboardController, PointerTarget};

use crate::controller::events::UiIntent;

pub fn dispatch_intent(intent_tx: &Sender<UiIntent>, intent: UiIntent, status: &mut String) {
    let intent_name = intent.name();
    match intent_tx.try_send(intent) {
        Ok(()) => tracing::trace!(intent = intent_name, "queued ui intent"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(intent = intent_name, "ui intent queue is full");
            *status = "Too many pending actions; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(intent = intent_name, "ui intent queue disconnected");
            *status = "Dashboard input queue disconnected".to_string();
        }
    }
}

/// Runs one intent to completion against the controller.
pub fn apply_intent(controller: &mut DashboardController, intent: UiIntent) {
    tracing::debug!(intent = intent.name(), "applying ui intent");
    match intent {
        UiIntent::SearchChanged(term) => controller.set_search_term(&term),
        UiIntent::FilterTabClicked(label) => {
            controller.select_filter_tab(label);
        }
        UiIntent::ViewProfile(id) => {
            controller.view_profile(id);
        }
        UiIntent::SubmitJobPosting => match controller.submit_job_form() {
            Ok(posting) => tracing::debug!(title = %posting.title, "job posting accepted"),
            Err(err) => tracing::debug!(%err, "job posting rejected"),
        },
        UiIntent::ToggleNotifications => {
            controller.toggle_notifications_panel();
        }
        UiIntent::ClearNotifications => controller.clear_notifications(),
        UiIntent::PointerOutsideNotifications => {
            controller.pointer_interaction(PointerTarget::Elsewhere);
        }
        UiIntent::Navigate(item) => controller.navigate(item),
        UiIntent::AvatarClicked => controller.open_avatar_menu(),
        UiIntent::DismissAlert => {
            controller.dismiss_alert();
        }
    }
}
