use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostingForm {
    pub title: String,
    pub department: String,
    pub description: String,
    /// Comma-separated skill list.
    pub skills: String,
    pub experience: String,
}

impl JobPostingForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub department: String,
    pub description: String,
    pub skills: Vec<String>,
    pub experience: String,
}

/// Splits a comma-separated skill list, trimming entries and dropping blanks.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_skills_in_order() {
        assert_eq!(
            parse_skill_list(" Rust ,  Tokio,egui "),
            vec!["Rust".to_string(), "Tokio".to_string(), "egui".to_string()]
        );
    }

    #[test]
    fn drops_blank_skill_entries() {
        assert!(parse_skill_list("").is_empty());
        assert_eq!(parse_skill_list("a,, ,b"), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = JobPostingForm {
            title: "Engineer".into(),
            department: "Eng".into(),
            description: "d".into(),
            skills: "a,b".into(),
            experience: "2".into(),
        };
        form.clear();
        assert_eq!(form, JobPostingForm::default());
    }
}
