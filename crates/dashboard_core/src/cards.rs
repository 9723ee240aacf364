use std::fmt;

use serde::Serialize;
use shared::domain::{Candidate, CandidateId, MatchTier};

/// Reveal delay between consecutive cards when nothing else is configured.
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 110;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCard {
    pub candidate_id: CandidateId,
    pub name: String,
    pub title: String,
    pub match_score: u8,
    pub match_tier: MatchTier,
    pub skills: Vec<String>,
    /// Present only for AI-flagged candidates.
    pub ai_warning: Option<String>,
    pub experience_label: String,
    pub reveal_delay_ms: u64,
}

impl CandidateCard {
    pub fn from_candidate(candidate: &Candidate, index: usize, stagger_ms: u64) -> Self {
        Self {
            candidate_id: candidate.id,
            name: candidate.name.clone(),
            title: candidate.title.clone(),
            match_score: candidate.match_score,
            match_tier: candidate.match_tier(),
            skills: candidate.skills.clone(),
            ai_warning: candidate.ai_probability().map(|probability| {
                format!("AI-generated content detected ({probability}% probability)")
            }),
            experience_label: format!("{} experience", candidate.experience),
            reveal_delay_ms: (index as u64).saturating_mul(stagger_ms),
        }
    }

    pub fn match_badge(&self) -> String {
        format!("{}%", self.match_score)
    }
}

pub fn render_cards<'a>(
    candidates: impl IntoIterator<Item = &'a Candidate>,
    stagger_ms: u64,
) -> Vec<CandidateCard> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| CandidateCard::from_candidate(candidate, index, stagger_ms))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub candidate_id: CandidateId,
    pub name: String,
    pub title: String,
    pub match_score: u8,
    pub experience: String,
    pub skills: Vec<String>,
}

impl From<&Candidate> for ProfileSummary {
    fn from(candidate: &Candidate) -> Self {
        Self {
            candidate_id: candidate.id,
            name: candidate.name.clone(),
            title: candidate.title.clone(),
            match_score: candidate.match_score,
            experience: candidate.experience.clone(),
            skills: candidate.skills.clone(),
        }
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Viewing profile for {}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Role: {}", self.title)?;
        writeln!(f, "Match Score: {}%", self.match_score)?;
        writeln!(f, "Experience: {}", self.experience)?;
        write!(f, "Top Skills: {}", self.skills.join(", "))
    }
}
