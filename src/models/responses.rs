use serde::{Deserialize, Serialize};
use crate::core::normalize::split_csv;
use crate::models::domain::{Candidate, Feedback, Todo};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Response for the assign mentor endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignMentorResponse {
    pub message: String,
    pub candidate: AssignedCandidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedCandidate {
    pub name: String,
    pub position: Option<String>,
    pub languages: String,
    #[serde(rename = "areaExperts")]
    pub area_experts: String,
    pub mentor: Option<String>,
    pub mentor_email: Option<String>,
    pub ic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCandidateResponse {
    pub message: String,
    pub candidate: VerifiedCandidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedCandidate {
    pub name: String,
    pub position: Option<String>,
    pub email: Option<String>,
    pub ic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCandidateResponse {
    pub message: String,
    pub candidate: AddedCandidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedCandidate {
    pub name: String,
    pub ic_number: String,
    pub position: Option<String>,
    pub email: Option<String>,
}

/// Resume view of a candidate for the HR screener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(rename = "yearsExp")]
    pub years_exp: i32,
    pub education: Vec<serde_json::Value>,
    pub skills: Vec<String>,
    pub projects: Vec<serde_json::Value>,
    pub certifications: Vec<serde_json::Value>,
    pub summary: String,
    pub ic: String,
    pub mentor: String,
    pub languages: Vec<String>,
}

impl From<Candidate> for Resume {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id,
            skills: split_csv(&c.skills_csv),
            languages: split_csv(&c.languages),
            name: c.name,
            email: c.email.unwrap_or_default(),
            phone: c.phone.unwrap_or_default(),
            location: c.location.unwrap_or_default(),
            years_exp: c.years_exp,
            education: c.education,
            projects: c.projects,
            certifications: c.certifications,
            summary: c.summary,
            ic: c.ic_number,
            mentor: c.mentor.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmitted {
    pub message: String,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackList {
    pub feedbacks: Vec<Feedback>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoChanged {
    pub message: String,
    pub todo: Todo,
}

/// Todo as listed under an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub is_completed: bool,
    pub due_date: Option<String>,
}

impl From<Todo> for TodoItem {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            task: t.task,
            is_completed: t.is_completed,
            due_date: t.due_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    pub employee_name: String,
    pub todos: Vec<TodoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
