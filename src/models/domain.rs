use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Candidate row as stored in the `candidate` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub ic_number: String,
    pub position: Option<String>,
    pub email: Option<String>,
    pub mentor: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub years_exp: i32,
    /// Comma separated skills, as entered
    pub skills_csv: String,
    #[sqlx(json)]
    pub projects: Vec<serde_json::Value>,
    #[sqlx(json)]
    pub education: Vec<serde_json::Value>,
    #[sqlx(json)]
    pub certifications: Vec<serde_json::Value>,
    pub summary: String,
    /// Comma separated languages, as entered
    pub languages: String,
}

/// Fields needed to insert a new candidate
#[derive(Debug, Clone, Default)]
pub struct NewCandidate {
    pub name: String,
    pub ic_number: String,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub skills_csv: String,
    pub languages: String,
}

/// Normalized view of a candidate used for mentor scoring
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateProfile {
    pub position: String,
    pub skills: BTreeSet<String>,
    pub languages: BTreeSet<String>,
}

/// Mentor entry in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentorProfile {
    pub name: String,
    /// Job titles matched verbatim against the candidate position
    pub roles: Vec<String>,
    pub languages: BTreeSet<String>,
    pub areas: BTreeSet<String>,
    pub email: String,
}

/// Outcome of mentor selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub mentor_name: String,
    pub score: u32,
    /// True when no mentor scored and the pick was random
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Idea {
    pub id: i64,
    pub text: String,
    pub status: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub date: String,
    pub task: String,
    pub status: String,
    pub priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: i64,
    pub employee_name: String,
    pub feedback_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub employee_name: String,
    pub task: String,
    pub is_completed: bool,
    pub due_date: Option<String>,
}

/// Partial update applied to a todo; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    pub is_completed: Option<bool>,
    pub task: Option<String>,
    pub due_date: Option<Option<String>>,
}

pub const IDEA_DEFAULT_STATUS: &str = "Pending Review";
pub const TASK_DEFAULT_STATUS: &str = "Not Started";
pub const TASK_DEFAULT_PRIORITY: &str = "Medium";
