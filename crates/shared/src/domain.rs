use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(CandidateId);
id_newtype!(NotificationId);

/// Minimum match score for the "shortlisted" filter and the high badge tier.
pub const SHORTLIST_THRESHOLD: u8 = 85;
/// Minimum match score for the medium badge tier.
pub const MEDIUM_MATCH_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiWarning {
    /// Detection probability, 0..=100.
    pub probability: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub title: String,
    pub match_score: u8,
    pub skills: Vec<String>,
    pub experience: String,
    pub ai_warning: Option<AiWarning>,
}

impl Candidate {
    pub fn is_ai_flagged(&self) -> bool {
        self.ai_warning.is_some()
    }

    pub fn ai_probability(&self) -> Option<u8> {
        self.ai_warning.map(|warning| warning.probability)
    }

    pub fn match_tier(&self) -> MatchTier {
        MatchTier::from_score(self.match_score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub text: String,
    pub read: bool,
    /// Display label such as "10 min ago"; not a timestamp.
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        if score >= SHORTLIST_THRESHOLD {
            MatchTier::High
        } else if score >= MEDIUM_MATCH_THRESHOLD {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::High => "High match",
            MatchTier::Medium => "Medium match",
            MatchTier::Low => "Low match",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterTag {
    #[default]
    All,
    Shortlisted,
    AiFlagged,
    New,
}

impl FilterTag {
    pub const ALL: [FilterTag; 4] = [
        FilterTag::All,
        FilterTag::Shortlisted,
        FilterTag::AiFlagged,
        FilterTag::New,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterTag::All => "all",
            FilterTag::Shortlisted => "shortlisted",
            FilterTag::AiFlagged => "ai-flagged",
            FilterTag::New => "new",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            FilterTag::All => "All Candidates",
            FilterTag::Shortlisted => "Shortlisted",
            FilterTag::AiFlagged => "AI Flagged",
            FilterTag::New => "New",
        }
    }

    /// Resolves a tab caption by case-insensitive keyword, first match wins.
    pub fn from_tab_label(label: &str) -> Option<Self> {
        let lower = label.to_lowercase();
        if lower.contains("all") {
            Some(FilterTag::All)
        } else if lower.contains("shortlisted") {
            Some(FilterTag::Shortlisted)
        } else if lower.contains("flagged") {
            Some(FilterTag::AiFlagged)
        } else if lower.contains("new") {
            Some(FilterTag::New)
        } else {
            None
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterTag {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        FilterTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == normalized)
            .ok_or_else(|| DashboardError::UnknownFilterTag(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_score_thresholds() {
        assert_eq!(MatchTier::from_score(100), MatchTier::High);
        assert_eq!(MatchTier::from_score(85), MatchTier::High);
        assert_eq!(MatchTier::from_score(84), MatchTier::Medium);
        assert_eq!(MatchTier::from_score(70), MatchTier::Medium);
        assert_eq!(MatchTier::from_score(69), MatchTier::Low);
        assert_eq!(MatchTier::from_score(0), MatchTier::Low);
    }

    #[test]
    fn parses_wire_names_and_rejects_unknown_tags() {
        assert_eq!("ai-flagged".parse::<FilterTag>().ok(), Some(FilterTag::AiFlagged));
        assert_eq!(" Shortlisted ".parse::<FilterTag>().ok(), Some(FilterTag::Shortlisted));
        assert!(matches!(
            "archived".parse::<FilterTag>(),
            Err(DashboardError::UnknownFilterTag(tag)) if tag == "archived"
        ));
    }

    #[test]
    fn resolves_tab_captions_in_keyword_order() {
        assert_eq!(FilterTag::from_tab_label("All Candidates"), Some(FilterTag::All));
        assert_eq!(FilterTag::from_tab_label("AI Flagged (2)"), Some(FilterTag::AiFlagged));
        assert_eq!(FilterTag::from_tab_label("NEW"), Some(FilterTag::New));
        assert_eq!(FilterTag::from_tab_label("Archived"), None);
        for tag in FilterTag::ALL {
            assert_eq!(FilterTag::from_tab_label(tag.tab_label()), Some(tag));
        }
    }

    #[test]
    fn serializes_filter_tags_with_kebab_case() {
        let encoded = serde_json::to_string(&FilterTag::AiFlagged).expect("encode");
        assert_eq!(encoded, "\"ai-flagged\"");
    }
}
