use shared::domain::{AiWarning, Candidate, CandidateId, Notification, NotificationId};

fn candidate(
    id: i64,
    name: &str,
    title: &str,
    match_score: u8,
    skills: &[&str],
    experience: &str,
    ai_probability: Option<u8>,
) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        title: title.to_string(),
        match_score,
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        experience: experience.to_string(),
        ai_warning: ai_probability.map(|probability| AiWarning { probability }),
    }
}

pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            1,
            "Rahul Sharma",
            "Senior Frontend Developer",
            92,
            &["JavaScript", "React", "TypeScript", "Node.js"],
            "5 years",
            None,
        ),
        candidate(
            2,
            "Priya Mehta",
            "UX Designer",
            87,
            &["Figma", "UI/UX", "Prototyping", "User Research"],
            "3 years",
            None,
        ),
        candidate(
            3,
            "Shubham Desai",
            "Backend Engineer",
            85,
            &["Python", "Django", "AWS", "PostgreSQL"],
            "4 years",
            Some(78),
        ),
        candidate(
            4,
            "Ananya Patel",
            "Product Manager",
            89,
            &["Product Strategy", "Agile", "Market Research", "JIRA"],
            "6 years",
            None,
        ),
        candidate(
            5,
            "Vikram Singh",
            "DevOps Engineer",
            82,
            &["Docker", "Kubernetes", "CI/CD", "Terraform"],
            "3 years",
            None,
        ),
        candidate(
            6,
            "Neha Gupta",
            "Data Scientist",
            65,
            &["Python", "Machine Learning", "Pandas"],
            "1 year",
            Some(92),
        ),
    ]
}

/// Seed notifications, newest first. Two of them start unread.
pub fn seed_notifications() -> Vec<Notification> {
    let notification = |id: i64, text: &str, read: bool, time: &str| Notification {
        id: NotificationId(id),
        text: text.to_string(),
        read,
        time: time.to_string(),
    };

    vec![
        notification(1, "New candidate applied for Frontend role", false, "10 min ago"),
        notification(2, "AI detected potential issues in 3 resumes", false, "25 min ago"),
        notification(3, "Your job posting was viewed 42 times", true, "2 hours ago"),
    ]
}
