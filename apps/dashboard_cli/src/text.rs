use dashboard_core::{CandidateCard, StatTile};
use shared::domain::{MatchTier, Notification};

use crate::report::JobPostedView;

const EMPTY_GRID: &str = "No candidates match the current search and filter.";

fn tier_marker(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::High => "+",
        MatchTier::Medium => "~",
        MatchTier::Low => "-",
    }
}

pub fn render_card(card: &CandidateCard) -> String {
    let mut out = format!(
        "{} [{} {}]\n  {}\n  Top Skills: {}\n",
        card.name,
        tier_marker(card.match_tier),
        card.match_badge(),
        card.title,
        card.skills.join(" | "),
    );
    if let Some(warning) = &card.ai_warning {
        out.push_str(&format!("  ! {warning}\n"));
    }
    out.push_str(&format!(
        "  View Profile: #{}  ({})\n",
        card.candidate_id.0, card.experience_label
    ));
    out
}

pub fn render_grid(cards: &[CandidateCard]) -> String {
    if cards.is_empty() {
        return format!("{EMPTY_GRID}\n");
    }
    cards
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_notifications(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return "No notifications\n".to_string();
    }
    notifications
        .iter()
        .map(|n| {
            let marker = if n.read { " " } else { "*" };
            format!("{marker} {}  ({})\n", n.text, n.time)
        })
        .collect()
}

pub fn render_job_posted(view: &JobPostedView) -> String {
    format!(
        "{}\n{}",
        view.message,
        render_notifications(&view.notifications)
    )
}

pub fn render_stats(tiles: &[StatTile]) -> String {
    tiles
        .iter()
        .map(|tile| format!("{:<18}{}\n", tile.label, tile.display()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::{cards::render_cards, seed::seed_candidates};

    #[test]
    fn card_text_includes_warning_only_when_flagged() {
        let candidates = seed_candidates();
        let cards = render_cards(&candidates, 0);

        let clean = render_card(&cards[0]);
        assert!(clean.starts_with("Rahul Sharma [+ 92%]\n"));
        assert!(!clean.contains('!'));

        let flagged = render_card(&cards[5]);
        assert!(flagged.contains("  ! AI-generated content detected (92% probability)\n"));
        assert!(flagged.contains("#6  (1 year experience)"));
    }

    #[test]
    fn empty_grid_shows_placeholder() {
        assert_eq!(render_grid(&[]), format!("{EMPTY_GRID}\n"));
    }

    #[test]
    fn unread_notifications_are_starred() {
        let text = render_notifications(&dashboard_core::seed::seed_notifications());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("* New candidate applied"));
        assert!(lines[2].starts_with("  Your job posting"));
        assert_eq!(render_notifications(&[]), "No notifications\n");
    }

    #[test]
    fn job_posted_text_leads_with_confirmation() {
        let mut controller =
            dashboard_core::DashboardController::initialize(&dashboard_core::Settings::default());
        let form = shared::forms::JobPostingForm {
            title: "Eng".into(),
            department: "D".into(),
            description: "x".into(),
            ..Default::default()
        };
        let posting = controller.submit_job_posting(&form).expect("valid posting");
        let text = render_job_posted(&JobPostedView::acknowledge(&mut controller, posting));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Job posted successfully!");
        assert_eq!(lines[1], "* New job posted: Eng  (Just now)");
        assert_eq!(lines.len(), 5);
    }
}
