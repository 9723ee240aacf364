use std::fmt;

use shared::{
    domain::{Candidate, CandidateId, FilterTag, Notification},
    error::ValidationError,
    forms::{JobPosting, JobPostingForm},
};
use tracing::{debug, info, warn};

use crate::{
    cards::{render_cards, CandidateCard, ProfileSummary},
    config::Settings,
    count_up::{dashboard_stats, CountUpTiming, StatTile},
    filter::{filter_indices, normalize_search_term},
    job_posting::{self, JOB_POSTED_MESSAGE},
    navigation::{MenuItem, Navigation},
    notifications::{BadgeChange, NotificationCenter, PanelToggle, PointerTarget},
    seed::{seed_candidates, seed_notifications},
};

pub const AVATAR_MENU_MESSAGE: &str = "User profile menu would open here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Profile(ProfileSummary),
    ValidationFailed(String),
    JobPosted,
    Info(String),
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::Profile(summary) => write!(f, "{summary}"),
            Alert::ValidationFailed(message) | Alert::Info(message) => f.write_str(message),
            Alert::JobPosted => f.write_str(JOB_POSTED_MESSAGE),
        }
    }
}

/// Owns the whole dashboard session: the read-only candidate list, the
/// derived filtered view and every piece of UI state the adapters render.
pub struct DashboardController {
    candidates: Vec<Candidate>,
    filtered: Vec<usize>,
    active_filter: FilterTag,
    search_term: String,
    notifications: NotificationCenter,
    job_form: JobPostingForm,
    navigation: Navigation,
    grid: Vec<CandidateCard>,
    grid_generation: u64,
    alert: Option<Alert>,
    reveal_stagger_ms: u64,
    count_up: CountUpTiming,
}

impl DashboardController {
    pub fn initialize(settings: &Settings) -> Self {
        Self::with_seed(seed_candidates(), seed_notifications(), settings)
    }

    pub fn with_seed(
        candidates: Vec<Candidate>,
        notifications: Vec<Notification>,
        settings: &Settings,
    ) -> Self {
        let mut controller = Self {
            candidates,
            filtered: Vec::new(),
            active_filter: FilterTag::All,
            search_term: String::new(),
            notifications: NotificationCenter::new(notifications),
            job_form: JobPostingForm::default(),
            navigation: Navigation::default(),
            grid: Vec::new(),
            grid_generation: 0,
            alert: None,
            reveal_stagger_ms: settings.reveal_stagger_ms,
            count_up: settings.count_up,
        };
        controller.refilter();
        info!(
            candidates = controller.candidates.len(),
            unread = controller.unread_count(),
            "dashboard initialized"
        );
        controller
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn filtered_candidates(&self) -> impl Iterator<Item = &Candidate> + '_ {
        let candidates = &self.candidates;
        self.filtered.iter().map(move |&index| &candidates[index])
    }

    pub fn active_filter(&self) -> FilterTag {
        self.active_filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.notifications()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.unread_count()
    }

    pub fn badge_count(&self) -> Option<usize> {
        self.notifications.badge_count()
    }

    pub fn is_notifications_open(&self) -> bool {
        self.notifications.is_panel_open()
    }

    pub fn grid(&self) -> &[CandidateCard] {
        &self.grid
    }

    pub fn grid_generation(&self) -> u64 {
        self.grid_generation
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn dismiss_alert(&mut self) -> Option<Alert> {
        self.alert.take()
    }

    pub fn job_form(&self) -> &JobPostingForm {
        &self.job_form
    }

    pub fn job_form_mut(&mut self) -> &mut JobPostingForm {
        &mut self.job_form
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn stats(&self) -> Vec<StatTile> {
        dashboard_stats(&self.candidates, self.count_up)
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = normalize_search_term(term);
        self.refilter();
    }

    pub fn set_active_filter(&mut self, tag: FilterTag) {
        self.active_filter = tag;
        self.refilter();
    }

    /// Unknown tags leave the previous filter in place.
    pub fn select_filter(&mut self, raw: &str) -> bool {
        match raw.parse::<FilterTag>() {
            Ok(tag) => {
                self.set_active_filter(tag);
                true
            }
            Err(err) => {
                warn!(%err, active = %self.active_filter, "ignoring filter selection");
                false
            }
        }
    }

    pub fn select_filter_tab(&mut self, label: &str) -> bool {
        match FilterTag::from_tab_label(label) {
            Some(tag) => {
                self.set_active_filter(tag);
                true
            }
            None => {
                warn!(label, active = %self.active_filter, "ignoring unknown filter tab");
                false
            }
        }
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.candidates, &self.search_term, self.active_filter);
        debug!(
            term = %self.search_term,
            filter = %self.active_filter,
            visible = self.filtered.len(),
            "recomputed candidate view"
        );
        self.render_candidate_grid();
    }

    /// Replaces the grid with one card per visible candidate.
    pub fn render_candidate_grid(&mut self) -> &[CandidateCard] {
        self.grid = render_cards(
            self.filtered.iter().map(|&index| &self.candidates[index]),
            self.reveal_stagger_ms,
        );
        self.grid_generation = self.grid_generation.wrapping_add(1);
        &self.grid
    }

    /// Looks the id up in the full candidate list; unknown ids do nothing.
    pub fn view_profile(&mut self, id: CandidateId) -> Option<ProfileSummary> {
        let Some(candidate) = self.candidates.iter().find(|c| c.id == id) else {
            debug!(candidate_id = id.0, "no candidate for profile request");
            return None;
        };
        let summary = ProfileSummary::from(candidate);
        self.alert = Some(Alert::Profile(summary.clone()));
        Some(summary)
    }

    /// All-or-nothing: a rejected posting leaves the form and notifications
    /// untouched.
    pub fn submit_job_posting(
        &mut self,
        fields: &JobPostingForm,
    ) -> Result<JobPosting, ValidationError> {
        let posting = match job_posting::validate(fields) {
            Ok(posting) => posting,
            Err(err) => {
                warn!(%err, "job posting rejected");
                self.alert = Some(Alert::ValidationFailed(err.message.clone()));
                return Err(err);
            }
        };

        info!(
            title = %posting.title,
            department = %posting.department,
            skills = ?posting.skills,
            experience = %posting.experience,
            "job posting submitted"
        );
        self.job_form.clear();
        self.alert = Some(Alert::JobPosted);
        self.add_notification(job_posting::notification_text(&posting));
        Ok(posting)
    }

    pub fn submit_job_form(&mut self) -> Result<JobPosting, ValidationError> {
        let fields = self.job_form.clone();
        self.submit_job_posting(&fields)
    }

    pub fn add_notification(&mut self, text: impl Into<String>) -> BadgeChange {
        let change = self.notifications.add(text);
        debug!(?change, unread = self.unread_count(), "notification added");
        change
    }

    pub fn toggle_notifications_panel(&mut self) -> PanelToggle {
        let toggle = self.notifications.toggle_panel();
        debug!(?toggle, "notifications panel toggled");
        toggle
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear_all();
        debug!("notifications cleared");
    }

    pub fn pointer_interaction(&mut self, target: PointerTarget) -> bool {
        self.notifications.pointer_interaction(target)
    }

    pub fn navigate(&mut self, item: MenuItem) {
        self.navigation.select(item);
    }

    pub fn open_avatar_menu(&mut self) {
        self.alert = Some(Alert::Info(AVATAR_MENU_MESSAGE.to_string()));
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
