use shared::{
    error::ValidationError,
    forms::{parse_skill_list, JobPosting, JobPostingForm},
};

pub const JOB_POSTED_MESSAGE: &str = "Job posted successfully!";

/// Title, department and description are required; everything else is
/// passed through trimmed.
pub fn validate(form: &JobPostingForm) -> Result<JobPosting, ValidationError> {
    let title = form.title.trim();
    let department = form.department.trim();
    let description = form.description.trim();

    if title.is_empty() || department.is_empty() || description.is_empty() {
        return Err(ValidationError::missing_required_fields());
    }

    Ok(JobPosting {
        title: title.to_string(),
        department: department.to_string(),
        description: description.to_string(),
        skills: parse_skill_list(&form.skills),
        experience: form.experience.trim().to_string(),
    })
}

pub fn notification_text(posting: &JobPosting) -> String {
    format!("New job posted: {}", posting.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, department: &str, description: &str) -> JobPostingForm {
        JobPostingForm {
            title: title.into(),
            department: department.into(),
            description: description.into(),
            skills: "Rust, egui".into(),
            experience: " 3+ years ".into(),
        }
    }

    #[test]
    fn accepts_complete_form_and_trims_fields() {
        let posting = validate(&form(" Platform Engineer ", "Eng", "Own the build")).expect("valid");
        assert_eq!(posting.title, "Platform Engineer");
        assert_eq!(posting.skills, vec!["Rust".to_string(), "egui".to_string()]);
        assert_eq!(posting.experience, "3+ years");
        assert_eq!(notification_text(&posting), "New job posted: Platform Engineer");
    }

    #[test]
    fn rejects_each_missing_required_field() {
        for bad in [
            form("", "Eng", "d"),
            form("Title", "   ", "d"),
            form("Title", "Eng", "\n"),
        ] {
            let err = validate(&bad).expect_err("should be rejected");
            assert_eq!(err, ValidationError::missing_required_fields());
        }
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let mut input = form("Title", "Eng", "d");
        input.skills.clear();
        input.experience.clear();
        let posting = validate(&input).expect("valid");
        assert!(posting.skills.is_empty());
        assert!(posting.experience.is_empty());
    }
}
