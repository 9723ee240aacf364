use shared::domain::{Candidate, FilterTag, SHORTLIST_THRESHOLD};

/// Experience marker used by the "new" filter. Matched textually, so
/// "11 years" qualifies as well.
pub const NEW_CANDIDATE_MARKER: &str = "1 year";

pub fn normalize_search_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `term` must already be normalized. An empty term matches every candidate.
pub fn matches_search(candidate: &Candidate, term: &str) -> bool {
    candidate.name.to_lowercase().contains(term)
        || candidate.title.to_lowercase().contains(term)
        || candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(term))
}

pub fn matches_filter(candidate: &Candidate, tag: FilterTag) -> bool {
    match tag {
        FilterTag::All => true,
        FilterTag::Shortlisted => candidate.match_score >= SHORTLIST_THRESHOLD,
        FilterTag::AiFlagged => candidate.is_ai_flagged(),
        FilterTag::New => candidate.experience.contains(NEW_CANDIDATE_MARKER),
    }
}

/// Indices of the candidates passing both predicates, in original order.
pub fn filter_indices(candidates: &[Candidate], term: &str, tag: FilterTag) -> Vec<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| matches_search(candidate, term) && matches_filter(candidate, tag))
        .map(|(index, _)| index)
        .collect()
}
